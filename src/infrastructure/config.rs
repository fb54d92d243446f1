use crate::domain::time_label::{TimeFormatError, TimeLabelFormatter, TimestampUnit};
use serde::Deserialize;

const CONFIG_FILE: &str = "config/ping-monitor";
const ENV_PREFIX: &str = "PING_MONITOR";

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub backend: BackendSettings,
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub display: DisplaySettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct BackendSettings {
    pub base_url: String,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct DisplaySettings {
    #[serde(default = "default_time_format")]
    pub time_format: String,
    #[serde(default)]
    pub timestamp_unit: TimestampUnit,
    #[serde(default = "default_utc_offset_minutes")]
    pub utc_offset_minutes: i32,
    /// Drop the displayed series when a selection fails
    #[serde(default)]
    pub clear_on_failure: bool,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            time_format: default_time_format(),
            timestamp_unit: TimestampUnit::default(),
            utc_offset_minutes: default_utc_offset_minutes(),
            clear_on_failure: false,
        }
    }
}

impl DisplaySettings {
    pub fn formatter(&self) -> Result<TimeLabelFormatter, TimeFormatError> {
        TimeLabelFormatter::new(
            self.time_format.clone(),
            self.timestamp_unit,
            self.utc_offset_minutes,
        )
    }
}

fn default_request_timeout_secs() -> u64 {
    10
}

fn default_bind_address() -> String {
    "0.0.0.0:8080".to_string()
}

fn default_time_format() -> String {
    "%d/%m/%Y %H:%M:%S".to_string()
}

// Brasilia time
fn default_utc_offset_minutes() -> i32 {
    -180
}

/// Load `config/ping-monitor.*` (optional) overlaid with `PING_MONITOR__*` env vars.
pub fn load_settings() -> anyhow::Result<Settings> {
    build_settings(config::File::with_name(CONFIG_FILE).required(false))
}

fn build_settings<S>(file: S) -> anyhow::Result<Settings>
where
    S: config::Source + Send + Sync + 'static,
{
    let settings = config::Config::builder()
        .add_source(file)
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    Ok(settings.try_deserialize()?)
}
