use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use serde::Deserialize;
use serde_aux::field_attributes::deserialize_number_from_string;

use crate::domain::site_profile::SiteProfile;

#[derive(Deserialize, Clone, Debug)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub fetcher: FetcherSettings,
    pub pacing: PacingSettings,
    #[serde(default)]
    pub extraction: SiteProfile,
}

#[derive(Deserialize, Clone, Debug)]
pub struct ApplicationSettings {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub url_template: String,
}

#[derive(Deserialize, Clone, Debug)]
pub struct FetcherSettings {
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub max_attempts: u32,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub base_delay_ms: u64,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub jitter_ms: u64,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub timeout_secs: u64,
}

impl FetcherSettings {
    pub fn base_delay(&self) -> Duration {
        Duration::from_millis(self.base_delay_ms)
    }

    pub fn jitter(&self) -> Duration {
        Duration::from_millis(self.jitter_ms)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for FetcherSettings {
    fn default() -> Self {
        FetcherSettings {
            max_attempts: 3,
            base_delay_ms: 2_000,
            jitter_ms: 1_000,
            timeout_secs: 30,
        }
    }
}

#[derive(Deserialize, Clone, Debug)]
pub struct PacingSettings {
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub workers: usize,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub min_delay_ms: u64,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub max_delay_ms: u64,
}

impl Default for PacingSettings {
    fn default() -> Self {
        PacingSettings {
            workers: 1,
            min_delay_ms: 2_000,
            max_delay_ms: 5_000,
        }
    }
}

/// Reads `configuration/base.yaml` and then applies `APP_*` environment
/// overrides, e.g. `APP_PACING__WORKERS=2`.
pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let configuration_directory = Path::new("configuration");

    let settings = config::Config::builder()
        .add_source(config::File::from(configuration_directory.join("base.yaml")))
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    settings.try_deserialize::<Settings>()
}
