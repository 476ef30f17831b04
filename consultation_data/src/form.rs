use tracing::{debug, info, warn};

use crate::{
	options::Service,
	request::{ConsultationRequest, Field, FieldError, FieldValue},
	row::ConsultationRow,
	submission::{
		ConsultationSink, SinkError, SubmissionError, SubmissionStatus, SubmitOutcome,
		SubmitRejected, BANNER_DURATION
	}
};

/// All the state owned by one open consultation form: what's been typed, plus where we are in
/// submitting it.
///
/// Submitting is split in two ([`Self::begin_submit`] and [`Self::finish_submit`]) so that a UI
/// can hold this behind a `RefCell` and not keep it borrowed while the insert is in flight.
/// [`Self::submit`] does both for callers that can hold `&mut self` across the await.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConsultationForm {
	request: ConsultationRequest,
	// what's typed in the 'please specify' box under the 'Other' service. This isn't part of the
	// row that gets stored.
	other_services_detail: String,
	status: SubmissionStatus,
}

impl ConsultationForm {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	#[must_use]
	pub const fn request(&self) -> &ConsultationRequest {
		&self.request
	}

	#[must_use]
	pub const fn status(&self) -> &SubmissionStatus {
		&self.status
	}

	pub fn set_field(&mut self, field: Field, value: FieldValue) -> Result<(), FieldError> {
		self.request.set_field(field, value)
	}

	pub fn toggle_service(&mut self, service: Service) {
		self.request.toggle_service(service);

		// the box goes away when 'Other' is unticked, and whatever was in it goes with it
		if !self.shows_other_services_input() {
			self.other_services_detail.clear();
		}
	}

	pub fn set_other_services_detail(&mut self, detail: String) {
		self.other_services_detail = detail;
	}

	#[must_use]
	pub fn other_services_detail(&self) -> &str {
		&self.other_services_detail
	}

	#[must_use]
	pub const fn date_input_disabled(&self) -> bool {
		self.request.date_not_final
	}

	#[must_use]
	pub const fn location_input_disabled(&self) -> bool {
		self.request.venue_not_booked
	}

	#[must_use]
	pub fn shows_other_services_input(&self) -> bool {
		self.request.has_service(Service::Other)
	}

	/// Moves into the submitting state and hands back the row to insert. Fails without touching
	/// anything if a submission is already in flight.
	pub fn begin_submit(&mut self) -> Result<ConsultationRow, SubmitRejected> {
		if self.status.loading {
			debug!("Ignoring submit while a consultation request is already in flight");
			return Err(SubmitRejected::InFlight);
		}

		self.status.error = None;
		self.status.loading = true;

		Ok(ConsultationRow::from(&self.request))
	}

	/// Resolves the in-flight submission with whatever the sink returned.
	///
	/// On success the form is cleared and `submitted` is set; the caller should call
	/// [`Self::dismiss_banner`] once `dismiss_after` has passed. On failure everything that was
	/// typed is kept so that the client can just hit submit again.
	pub fn finish_submit(&mut self, result: Result<(), SinkError>) -> SubmitOutcome {
		match result {
			Ok(()) => {
				info!("Consultation request submitted");

				self.status.submitted = true;
				self.request = ConsultationRequest::default();
				self.other_services_detail.clear();
				self.status.loading = false;

				SubmitOutcome::Submitted { dismiss_after: BANNER_DURATION }
			},
			Err(e) => {
				let err = SubmissionError::from(e);
				warn!("Couldn't submit consultation request: {err}");

				self.status.error = Some(err.clone());
				self.status.loading = false;

				SubmitOutcome::Failed(err)
			}
		}
	}

	/// Hides the 'thank you' banner. Every successful submission schedules one of these, and
	/// they aren't deduplicated, so an earlier one may hide the banner of a later submission.
	pub fn dismiss_banner(&mut self) {
		self.status.submitted = false;
	}

	pub async fn submit<S: ConsultationSink>(&mut self, sink: &S) -> Result<SubmitOutcome, SubmitRejected> {
		let row = self.begin_submit()?;
		let result = sink.insert(&row).await;
		Ok(self.finish_submit(result))
	}
}
