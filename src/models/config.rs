use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::domain::weight::WeightUnit;

/// Configuration options specific to the Trailpack service.
///
/// Values are read from `<dir>/default.yaml`, then `<dir>/local.yaml`, then
/// `TRAILPACK__*` environment variables, later sources taking precedence.
#[derive(Clone, Debug, Deserialize)]
pub struct ServerConfig {
    /// Path of the SQLite database file.
    pub database_url: String,
    #[serde(default = "default_address")]
    pub address: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Unit used when a user's stored preference is not a recognized unit.
    #[serde(default = "default_weight_unit")]
    pub default_weight_unit: WeightUnit,
}

fn default_address() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_weight_unit() -> WeightUnit {
    WeightUnit::Grams
}

impl ServerConfig {
    pub fn load(config_dir: &str) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name(&format!("{config_dir}/default")).required(false))
            .add_source(File::with_name(&format!("{config_dir}/local")).required(false))
            .add_source(Environment::with_prefix("TRAILPACK").separator("__"))
            .build()?
            .try_deserialize()
    }
}
