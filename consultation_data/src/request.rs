use std::{fmt, str::FromStr};

use chrono::NaiveDate;

use crate::options::{BudgetRange, ContactMethod, EventType, GuestCount, Service, UnknownOption};

/// Everything the client has filled out so far. There's only ever one of these per open form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConsultationRequest {
	pub full_name: String,
	pub phone_number: String,
	pub email: String,
	pub contact_method: ContactMethod,
	pub event_type: EventType,
	pub event_date: Option<NaiveDate>,
	pub date_not_final: bool,
	pub event_location: String,
	pub venue_not_booked: bool,
	pub guest_count: GuestCount,
	// this is a set, but we keep it as a Vec so that it's shown (and stored) in the order the
	// client ticked things
	pub services: Vec<Service>,
	pub theme_and_style: String,
	pub inspiration_url: String,
	pub budget_range: BudgetRange,
	pub additional_notes: String,
}

/// One input on the form, named by its `name` attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
	FullName,
	PhoneNumber,
	Email,
	ContactMethod,
	EventType,
	EventDate,
	DateNotFinal,
	EventLocation,
	VenueNotBooked,
	GuestCount,
	ThemeAndStyle,
	InspirationUrl,
	BudgetRange,
	AdditionalNotes,
}

impl Field {
	pub const ALL: &[Self] = &[
		Self::FullName,
		Self::PhoneNumber,
		Self::Email,
		Self::ContactMethod,
		Self::EventType,
		Self::EventDate,
		Self::DateNotFinal,
		Self::EventLocation,
		Self::VenueNotBooked,
		Self::GuestCount,
		Self::ThemeAndStyle,
		Self::InspirationUrl,
		Self::BudgetRange,
		Self::AdditionalNotes,
	];

	#[must_use]
	pub const fn name(self) -> &'static str {
		match self {
			Self::FullName => "fullName",
			Self::PhoneNumber => "phoneNumber",
			Self::Email => "email",
			Self::ContactMethod => "contactMethod",
			Self::EventType => "eventType",
			Self::EventDate => "eventDate",
			Self::DateNotFinal => "dateNotFinal",
			Self::EventLocation => "eventLocation",
			Self::VenueNotBooked => "venueNotBooked",
			Self::GuestCount => "guestCount",
			Self::ThemeAndStyle => "themeAndStyle",
			Self::InspirationUrl => "inspirationUrl",
			Self::BudgetRange => "budgetRange",
			Self::AdditionalNotes => "additionalNotes",
		}
	}

	/// Whether this field is backed by a checkbox (and thus takes [`FieldValue::Checked`])
	#[must_use]
	pub const fn is_checkbox(self) -> bool {
		matches!(self, Self::DateNotFinal | Self::VenueNotBooked)
	}
}

impl fmt::Display for Field {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

impl FromStr for Field {
	type Err = FieldError;
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::ALL.iter()
			.copied()
			.find(|f| f.name() == s)
			.ok_or_else(|| FieldError::UnknownField(s.to_string()))
	}
}

/// What an input hands us when it changes: checkboxes give their checked state, everything else
/// gives its raw value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
	Text(String),
	Checked(bool),
}

impl FieldValue {
	fn text(self, field: Field) -> Result<String, FieldError> {
		match self {
			Self::Text(text) => Ok(text),
			Self::Checked(_) => Err(FieldError::ExpectedText(field)),
		}
	}

	fn checked(self, field: Field) -> Result<bool, FieldError> {
		match self {
			Self::Checked(checked) => Ok(checked),
			Self::Text(_) => Err(FieldError::ExpectedChecked(field)),
		}
	}
}

impl From<&str> for FieldValue {
	fn from(value: &str) -> Self {
		Self::Text(value.to_string())
	}
}

impl From<bool> for FieldValue {
	fn from(value: bool) -> Self {
		Self::Checked(value)
	}
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
	#[error("there's no field named '{0}'")]
	UnknownField(String),
	#[error("'{value}' is not a valid option for {field}")]
	UnknownOption { field: Field, value: String },
	#[error("'{0}' is not a date in the form YYYY-MM-DD")]
	InvalidDate(String),
	#[error("{0} needs a text value")]
	ExpectedText(Field),
	#[error("{0} is a checkbox and needs a checked state")]
	ExpectedChecked(Field),
}

fn option<T>(field: Field, value: FieldValue) -> Result<T, FieldError>
where
	T: FromStr<Err = UnknownOption>
{
	value.text(field)?
		.parse()
		.map_err(|UnknownOption(value)| FieldError::UnknownOption { field, value })
}

fn date(value: FieldValue) -> Result<Option<NaiveDate>, FieldError> {
	let text = value.text(Field::EventDate)?;

	// a cleared date input gives us an empty string
	if text.is_empty() {
		return Ok(None);
	}

	text.parse()
		.map(Some)
		.map_err(|_| FieldError::InvalidDate(text))
}

impl ConsultationRequest {
	/// Replaces exactly one field. If the value doesn't fit the field, nothing is changed.
	pub fn set_field(&mut self, field: Field, value: FieldValue) -> Result<(), FieldError> {
		match field {
			Field::FullName => self.full_name = value.text(field)?,
			Field::PhoneNumber => self.phone_number = value.text(field)?,
			Field::Email => self.email = value.text(field)?,
			Field::ContactMethod => self.contact_method = option(field, value)?,
			Field::EventType => self.event_type = option(field, value)?,
			Field::EventDate => self.event_date = date(value)?,
			Field::DateNotFinal => self.date_not_final = value.checked(field)?,
			Field::EventLocation => self.event_location = value.text(field)?,
			Field::VenueNotBooked => self.venue_not_booked = value.checked(field)?,
			Field::GuestCount => self.guest_count = option(field, value)?,
			Field::ThemeAndStyle => self.theme_and_style = value.text(field)?,
			Field::InspirationUrl => self.inspiration_url = value.text(field)?,
			Field::BudgetRange => self.budget_range = option(field, value)?,
			Field::AdditionalNotes => self.additional_notes = value.text(field)?,
		}

		Ok(())
	}

	/// Ticks the service if it isn't ticked yet, unticks it otherwise
	pub fn toggle_service(&mut self, service: Service) {
		if let Some(idx) = self.services.iter().position(|s| *s == service) {
			self.services.remove(idx);
		} else {
			self.services.push(service);
		}
	}

	#[must_use]
	pub fn has_service(&self, service: Service) -> bool {
		self.services.contains(&service)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn defaults_match_the_blank_form() {
		let req = ConsultationRequest::default();

		assert!(req.full_name.is_empty());
		assert_eq!(req.contact_method, ContactMethod::Email);
		assert_eq!(req.event_type, EventType::Wedding);
		assert_eq!(req.event_date, None);
		assert!(!req.date_not_final);
		assert!(!req.venue_not_booked);
		assert_eq!(req.guest_count, GuestCount::From50To100);
		assert!(req.services.is_empty());
		assert_eq!(req.budget_range, BudgetRange::From15kTo30k);
	}

	#[test]
	fn field_names_round_trip() {
		for field in Field::ALL {
			assert_eq!(field.name().parse::<Field>(), Ok(*field));
		}

		assert_eq!(
			"full_name".parse::<Field>(),
			Err(FieldError::UnknownField("full_name".into()))
		);
	}

	#[test]
	fn set_field_replaces_only_that_field() {
		let mut req = ConsultationRequest::default();
		req.set_field(Field::FullName, "Jane Doe".into()).unwrap();

		assert_eq!(req, ConsultationRequest {
			full_name: "Jane Doe".into(),
			..ConsultationRequest::default()
		});

		req.set_field(Field::VenueNotBooked, true.into()).unwrap();
		req.set_field(Field::GuestCount, "200+".into()).unwrap();
		req.set_field(Field::EventType, "Corporate Function".into()).unwrap();

		assert!(req.venue_not_booked);
		assert_eq!(req.guest_count, GuestCount::Over200);
		assert_eq!(req.event_type, EventType::Corporate);
		assert_eq!(req.full_name, "Jane Doe");
	}

	#[test]
	fn bad_values_leave_the_request_alone() {
		let mut req = ConsultationRequest::default();
		let before = req.clone();

		assert_eq!(
			req.set_field(Field::BudgetRange, "a lot".into()),
			Err(FieldError::UnknownOption { field: Field::BudgetRange, value: "a lot".into() })
		);
		assert_eq!(
			req.set_field(Field::DateNotFinal, "true".into()),
			Err(FieldError::ExpectedChecked(Field::DateNotFinal))
		);
		assert_eq!(
			req.set_field(Field::Email, true.into()),
			Err(FieldError::ExpectedText(Field::Email))
		);
		assert_eq!(
			req.set_field(Field::EventDate, "01/06/2025".into()),
			Err(FieldError::InvalidDate("01/06/2025".into()))
		);

		assert_eq!(req, before);
	}

	#[test]
	fn event_date_parses_and_clears() {
		let mut req = ConsultationRequest::default();

		req.set_field(Field::EventDate, "2025-06-01".into()).unwrap();
		assert_eq!(req.event_date, NaiveDate::from_ymd_opt(2025, 6, 1));

		req.set_field(Field::EventDate, "".into()).unwrap();
		assert_eq!(req.event_date, None);
	}

	#[test]
	fn toggling_twice_restores_membership() {
		let mut req = ConsultationRequest::default();
		req.toggle_service(Service::Catering);
		req.toggle_service(Service::DecorOnly);
		let before = req.services.clone();

		for service in Service::ALL {
			req.toggle_service(*service);
			req.toggle_service(*service);

			let mut now = req.services.clone();
			let mut expected = before.clone();
			now.sort_by_key(|s| s.as_str());
			expected.sort_by_key(|s| s.as_str());
			assert_eq!(now, expected, "toggling {service} twice changed the selection");
		}
	}

	#[test]
	fn toggling_keeps_insertion_order_without_duplicates() {
		let mut req = ConsultationRequest::default();
		req.toggle_service(Service::Entertainment);
		req.toggle_service(Service::Catering);
		req.toggle_service(Service::FullEventPlanning);
		req.toggle_service(Service::Catering);

		assert_eq!(req.services, [Service::Entertainment, Service::FullEventPlanning]);
		assert!(req.has_service(Service::Entertainment));
		assert!(!req.has_service(Service::Catering));
	}
}
