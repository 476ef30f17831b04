use std::time::Duration;

use crate::row::ConsultationRow;

/// Shown when whatever went wrong didn't tell us anything useful
pub const SUBMIT_FALLBACK_ERR: &str = "Failed to submit form. Please try again.";

/// How long the 'thank you' banner stays up after a successful submission
pub const BANNER_DURATION: Duration = Duration::from_millis(5000);

/// Whatever durably stores consultation requests. The form only ever inserts, once per
/// submission.
// these futures live on the browser's single thread, so we don't want to require `Send`
#[allow(async_fn_in_trait)]
pub trait ConsultationSink {
	async fn insert(&self, row: &ConsultationRow) -> Result<(), SinkError>;
}

/// A failed insert. Sinks can't always tell us why (and we can't tell a validation error from a
/// network error from an auth error anyways) so the message is optional.
#[derive(Debug, Clone, PartialEq, Eq, Default, thiserror::Error)]
#[error("{}", .message.as_deref().unwrap_or(SUBMIT_FALLBACK_ERR))]
pub struct SinkError {
	pub message: Option<String>,
}

impl SinkError {
	pub fn new(message: impl Into<String>) -> Self {
		Self { message: Some(message.into()) }
	}

	#[must_use]
	pub const fn without_message() -> Self {
		Self { message: None }
	}
}

/// The only way a submission can fail; this is what gets shown to the client
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmissionError {
	#[error("{0}")]
	Failed(String),
}

impl SubmissionError {
	#[must_use]
	pub fn message(&self) -> &str {
		match self {
			Self::Failed(msg) => msg,
		}
	}
}

impl From<SinkError> for SubmissionError {
	fn from(err: SinkError) -> Self {
		let message = err.message
			.filter(|m| !m.trim().is_empty())
			.unwrap_or_else(|| SUBMIT_FALLBACK_ERR.to_string());

		Self::Failed(message)
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SubmitRejected {
	#[error("a consultation request is already being submitted")]
	InFlight,
}

/// What the view needs to do once a submission has resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
	/// The request was stored; the banner should be dismissed after `dismiss_after`
	Submitted { dismiss_after: Duration },
	Failed(SubmissionError),
}

/// The three flags the view watches while submitting. `loading` is only ever set between
/// [`crate::ConsultationForm::begin_submit`] and [`crate::ConsultationForm::finish_submit`];
/// `submitted` and `error` are independent of each other.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SubmissionStatus {
	pub(crate) loading: bool,
	pub(crate) submitted: bool,
	pub(crate) error: Option<SubmissionError>,
}

impl SubmissionStatus {
	#[must_use]
	pub const fn loading(&self) -> bool {
		self.loading
	}

	#[must_use]
	pub const fn submitted(&self) -> bool {
		self.submitted
	}

	#[must_use]
	pub const fn error(&self) -> Option<&SubmissionError> {
		self.error.as_ref()
	}

	#[must_use]
	pub fn error_message(&self) -> Option<&str> {
		self.error.as_ref().map(SubmissionError::message)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn sink_messages_carry_through() {
		let err = SubmissionError::from(SinkError::new("Network error"));
		assert_eq!(err.message(), "Network error");
	}

	#[test]
	fn missing_or_blank_messages_fall_back() {
		assert_eq!(
			SubmissionError::from(SinkError::without_message()).message(),
			"Failed to submit form. Please try again."
		);
		assert_eq!(SubmissionError::from(SinkError::new("  ")).message(), SUBMIT_FALLBACK_ERR);
	}

	#[test]
	fn sink_error_displays_fallback() {
		assert_eq!(SinkError::without_message().to_string(), SUBMIT_FALLBACK_ERR);
		assert_eq!(SinkError::new("row violates policy").to_string(), "row violates policy");
	}
}
