use consultation_data::{ConsultationRow, ConsultationSink, SinkError};
use gloo_console::log;
use gloo_net::http::Request;
use serde::Deserialize;

use crate::config::{Config, ConfigError};

/// Inserts consultation rows straight into the Supabase table through its REST (PostgREST) API
#[derive(Clone, Debug, PartialEq)]
pub struct SupabaseSink {
	// if the build was missing config, we still want to render the form; it just can't submit
	config: Result<Config, ConfigError>,
}

impl SupabaseSink {
	pub fn from_build_env() -> Self {
		let config = Config::from_build_env();

		if let Err(ref e) = config {
			log!(format!("Consultation form can't submit: {e}"));
		}

		Self { config }
	}
}

// PostgREST also sends `code`, `details` and `hint`, but we only show the message
#[derive(Deserialize)]
struct PostgrestError {
	message: Option<String>,
}

fn error_from_body(body: &str) -> SinkError {
	serde_json::from_str::<PostgrestError>(body)
		.map_or_else(
			|_| SinkError::without_message(),
			|e| SinkError { message: e.message }
		)
}

impl ConsultationSink for SupabaseSink {
	async fn insert(&self, row: &ConsultationRow) -> Result<(), SinkError> {
		let config = self.config.as_ref()
			.map_err(|e| SinkError::new(e.to_string()))?;

		let request = Request::post(&config.insert_url())
			.header("apikey", &config.anon_key)
			.header("Authorization", &format!("Bearer {}", config.anon_key))
			// we don't need the row back, so don't make them send it
			.header("Prefer", "return=minimal")
			.json(&[row])
			.map_err(|e| {
				log!(format!("Couldn't serialize consultation row: {e:?}"));
				SinkError::new(format!("Couldn't prepare the request: {e}"))
			})?;

		let res = request.send()
			.await
			.map_err(|e| {
				log!(format!("Error sending consultation request: {e:?}"));
				SinkError::new(e.to_string())
			})?;

		if res.ok() {
			return Ok(());
		}

		let text = match res.text().await {
			Ok(text) => text,
			Err(e) => {
				log!(format!("Insert returned {} and we couldn't read why: {e:?}", res.status()));
				return Err(SinkError::without_message());
			}
		};

		log!(format!("Insert returned {}: {text}", res.status()));
		Err(error_from_body(&text))
	}
}
