use std::{fmt, str::FromStr};

use serde::{Serialize, Serializer};

/// A select or checkbox value that doesn't correspond to any of the options we offer
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{0}' is not one of the available options")]
pub struct UnknownOption(pub String);

// Each option has the value that's stored in the table (and used as the `value` attribute of the
// input), plus the label that's shown next to it. They're the same more often than not.
macro_rules! form_options{
	(
		$(#[$meta:meta])*
		$name:ident {
			$($variant:ident => $value:literal, $label:literal),+ $(,)?
		}
	) => {
		$(#[$meta])*
		#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
		pub enum $name {
			$($variant),+
		}

		impl $name {
			/// Every option, in the order that the form lists them
			pub const ALL: &[Self] = &[$(Self::$variant),+];

			#[must_use]
			pub const fn as_str(self) -> &'static str {
				match self {
					$(Self::$variant => $value),+
				}
			}

			#[must_use]
			pub const fn label(self) -> &'static str {
				match self {
					$(Self::$variant => $label),+
				}
			}
		}

		impl fmt::Display for $name {
			fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
				f.write_str(self.as_str())
			}
		}

		impl FromStr for $name {
			type Err = UnknownOption;
			fn from_str(s: &str) -> Result<Self, Self::Err> {
				match s {
					$($value => Ok(Self::$variant),)+
					other => Err(UnknownOption(other.to_string()))
				}
			}
		}

		impl Serialize for $name {
			fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
				serializer.serialize_str(self.as_str())
			}
		}
	}
}

form_options! {
	/// How the client would like us to get back to them
	ContactMethod {
		Email => "Email", "Email",
		Phone => "Phone", "Phone",
		WhatsApp => "WhatsApp", "WhatsApp",
	}
}

form_options! {
	EventType {
		Wedding => "Wedding", "Wedding",
		Birthday => "Birthday", "Birthday",
		BabyShower => "Baby Shower", "Baby Shower",
		Corporate => "Corporate Function", "Corporate Function",
		Anniversary => "Anniversary", "Anniversary",
		Other => "Other", "Other",
	}
}

form_options! {
	GuestCount {
		UpTo50 => "0-50", "0–50 guests",
		From50To100 => "50-100", "50–100 guests",
		From100To200 => "100-200", "100–200 guests",
		Over200 => "200+", "200+ guests",
	}
}

form_options! {
	/// Budget brackets, in rand
	BudgetRange {
		From5kTo15k => "R5k–R15k", "R5,000 – R15,000",
		From15kTo30k => "R15k–R30k", "R15,000 – R30,000",
		From30kTo50k => "R30k–R50k", "R30,000 – R50,000",
		Over50k => "R50k+", "R50,000+",
	}
}

form_options! {
	/// The services a client can tick; any number of them can be selected at once
	Service {
		FullEventPlanning => "Full Event Planning", "Full Event Planning",
		DecorOnly => "Decor Only", "Decor Only",
		Catering => "Catering", "Catering",
		VenueSourcing => "Venue Sourcing", "Venue Sourcing",
		Entertainment => "Entertainment", "Entertainment",
		Photography => "Photography / Videography", "Photography / Videography",
		OnTheDayCoordination => "On-the-Day Coordination", "On-the-Day Coordination",
		Other => "Other", "Other",
	}
}

impl Default for ContactMethod {
	fn default() -> Self {
		Self::Email
	}
}

impl Default for EventType {
	fn default() -> Self {
		Self::Wedding
	}
}

impl Default for GuestCount {
	fn default() -> Self {
		Self::From50To100
	}
}

impl Default for BudgetRange {
	fn default() -> Self {
		Self::From15kTo30k
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn every_option_parses_from_its_own_value() {
		fn check<T>(all: &[T])
		where
			T: Copy + PartialEq + fmt::Debug + FromStr<Err = UnknownOption> + fmt::Display
		{
			for opt in all {
				assert_eq!(opt.to_string().parse::<T>(), Ok(*opt));
			}
		}

		check(ContactMethod::ALL);
		check(EventType::ALL);
		check(GuestCount::ALL);
		check(BudgetRange::ALL);
		check(Service::ALL);
	}

	#[test]
	fn labels_are_not_parsed_as_values() {
		assert_eq!(
			"0–50 guests".parse::<GuestCount>(),
			Err(UnknownOption("0–50 guests".into()))
		);
		assert!("R5,000 – R15,000".parse::<BudgetRange>().is_err());
		assert!("corporate function".parse::<EventType>().is_err());
	}

	#[test]
	fn services_keep_form_order() {
		assert_eq!(Service::ALL.len(), 8);
		assert_eq!(Service::ALL.first(), Some(&Service::FullEventPlanning));
		assert_eq!(Service::ALL.last(), Some(&Service::Other));
	}

	#[test]
	fn options_serialize_as_their_table_values() {
		assert_eq!(serde_json::to_value(EventType::BabyShower).unwrap(), "Baby Shower");
		assert_eq!(serde_json::to_value(BudgetRange::Over50k).unwrap(), "R50k+");
		assert_eq!(serde_json::to_value(ContactMethod::WhatsApp).unwrap(), "WhatsApp");
	}
}
