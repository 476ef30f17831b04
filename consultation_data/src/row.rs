use chrono::NaiveDate;
use serde::Serialize;

use crate::{
	options::{BudgetRange, ContactMethod, EventType, GuestCount, Service},
	request::ConsultationRequest
};

/// What gets stored as the location when the client said they haven't booked a venue
pub const VENUE_NOT_BOOKED: &str = "Venue not booked yet";

/// The exact shape of a row in the consultation table. The column names are what the table
/// uses, so don't rename these.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ConsultationRow {
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
	pub services: Vec<Service>,
	pub theme_and_style: String,
	pub inspiration_url: String,
	pub budget_range: BudgetRange,
	pub additional_notes: String,
}

impl From<&ConsultationRequest> for ConsultationRow {
	fn from(req: &ConsultationRequest) -> Self {
		// The date and location inputs are only disabled when their checkboxes are ticked, so
		// they may still hold whatever was typed before. The flags always win.
		let event_date = if req.date_not_final {
			None
		} else {
			req.event_date
		};

		let event_location = if req.venue_not_booked {
			VENUE_NOT_BOOKED.to_string()
		} else {
			req.event_location.clone()
		};

		Self {
			full_name: req.full_name.clone(),
			phone_number: req.phone_number.clone(),
			email: req.email.clone(),
			contact_method: req.contact_method,
			event_type: req.event_type,
			event_date,
			date_not_final: req.date_not_final,
			event_location,
			venue_not_booked: req.venue_not_booked,
			guest_count: req.guest_count,
			services: req.services.clone(),
			theme_and_style: req.theme_and_style.clone(),
			inspiration_url: req.inspiration_url.clone(),
			budget_range: req.budget_range,
			additional_notes: req.additional_notes.clone(),
		}
	}
}

#[cfg(test)]
mod tests {
	use serde_json::json;

	use super::*;
	use crate::request::Field;

	fn jane() -> ConsultationRequest {
		ConsultationRequest {
			full_name: "Jane Doe".into(),
			phone_number: "0821234567".into(),
			email: "jane@x.com".into(),
			..ConsultationRequest::default()
		}
	}

	#[test]
	fn flags_decide_date_and_location() {
		let date = NaiveDate::from_ymd_opt(2025, 6, 1);

		for date_not_final in [false, true] {
			for venue_not_booked in [false, true] {
				let req = ConsultationRequest {
					event_date: date,
					date_not_final,
					event_location: "Old Value".into(),
					venue_not_booked,
					..jane()
				};

				let row = ConsultationRow::from(&req);

				let expected_date = if date_not_final { None } else { date };
				let expected_location = if venue_not_booked { VENUE_NOT_BOOKED } else { "Old Value" };

				assert_eq!(row.event_date, expected_date);
				assert_eq!(row.event_location, expected_location);
				assert_eq!(row.date_not_final, date_not_final);
				assert_eq!(row.venue_not_booked, venue_not_booked);
			}
		}
	}

	#[test]
	fn stale_date_is_dropped_when_not_final() {
		let mut req = jane();
		req.set_field(Field::EventDate, "2025-06-01".into()).unwrap();
		req.set_field(Field::DateNotFinal, true.into()).unwrap();

		let row = serde_json::to_value(ConsultationRow::from(&req)).unwrap();

		assert_eq!(row["event_date"], serde_json::Value::Null);
		assert_eq!(row["date_not_final"], true);
		assert_eq!(row["full_name"], "Jane Doe");
	}

	#[test]
	fn stale_location_is_replaced_when_venue_not_booked() {
		let mut req = jane();
		req.set_field(Field::EventLocation, "Old Value".into()).unwrap();
		req.set_field(Field::VenueNotBooked, true.into()).unwrap();

		let row = ConsultationRow::from(&req);

		assert_eq!(row.event_location, "Venue not booked yet");
		assert!(row.venue_not_booked);
	}

	#[test]
	fn row_serializes_with_table_columns() {
		let mut req = jane();
		req.event_date = NaiveDate::from_ymd_opt(2025, 6, 1);
		req.event_location = "Sandton".into();
		req.toggle_service(Service::Catering);
		req.toggle_service(Service::Photography);
		req.theme_and_style = "gold and black".into();

		let row = serde_json::to_value(ConsultationRow::from(&req)).unwrap();

		assert_eq!(row, json!({
			"full_name": "Jane Doe",
			"phone_number": "0821234567",
			"email": "jane@x.com",
			"contact_method": "Email",
			"event_type": "Wedding",
			"event_date": "2025-06-01",
			"date_not_final": false,
			"event_location": "Sandton",
			"venue_not_booked": false,
			"guest_count": "50-100",
			"services": ["Catering", "Photography / Videography"],
			"theme_and_style": "gold and black",
			"inspiration_url": "",
			"budget_range": "R15k–R30k",
			"additional_notes": "",
		}));
	}
}
