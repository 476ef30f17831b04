// These are baked in when the wasm is built, since there's no server to ask at runtime. The anon
// key ends up in the bundle anyways; row-level security on the table only allows inserts.
const SUPABASE_URL: Option<&str> = option_env!("SUPABASE_URL");
const SUPABASE_ANON_KEY: Option<&str> = option_env!("SUPABASE_ANON_KEY");
const CONSULTATION_TABLE: Option<&str> = option_env!("CONSULTATION_TABLE");

pub const DEFAULT_TABLE: &str = "consultation_forms";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
	pub supabase_url: String,
	pub anon_key: String,
	pub table: String,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
	#[error("{0} was not set when this site was built")]
	Missing(&'static str),
}

impl Config {
	pub fn from_build_env() -> Result<Self, ConfigError> {
		Self::from_values(SUPABASE_URL, SUPABASE_ANON_KEY, CONSULTATION_TABLE)
	}

	fn from_values(
		url: Option<&str>,
		anon_key: Option<&str>,
		table: Option<&str>
	) -> Result<Self, ConfigError> {
		fn non_empty(val: Option<&str>) -> Option<&str> {
			val.map(str::trim).filter(|v| !v.is_empty())
		}

		let supabase_url = non_empty(url)
			.ok_or(ConfigError::Missing("SUPABASE_URL"))?
			.trim_end_matches('/')
			.to_string();

		let anon_key = non_empty(anon_key)
			.ok_or(ConfigError::Missing("SUPABASE_ANON_KEY"))?
			.to_string();

		let table = non_empty(table).unwrap_or(DEFAULT_TABLE).to_string();

		Ok(Self { supabase_url, anon_key, table })
	}

	/// The PostgREST endpoint that rows get POSTed to
	pub fn insert_url(&self) -> String {
		format!("{}/rest/v1/{}", self.supabase_url, self.table)
	}
}
