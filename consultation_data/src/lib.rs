mod form;
mod options;
mod request;
mod row;
mod submission;

pub use form::ConsultationForm;
pub use options::{BudgetRange, ContactMethod, EventType, GuestCount, Service, UnknownOption};
pub use request::{ConsultationRequest, Field, FieldError, FieldValue};
pub use row::{ConsultationRow, VENUE_NOT_BOOKED};
pub use submission::{
	ConsultationSink,
	SinkError,
	SubmissionError,
	SubmissionStatus,
	SubmitOutcome,
	SubmitRejected,
	BANNER_DURATION,
	SUBMIT_FALLBACK_ERR
};
