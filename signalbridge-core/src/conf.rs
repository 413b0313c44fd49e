/*
    Copyright 2025 MydriaTech AB

    Licensed under the Apache License 2.0 with Free world makers exception
    1.0.0 (the "License"); you may not use this file except in compliance with
    the License. You should have obtained a copy of the License with the source
    or binary distribution in file named

        LICENSE-Apache-2.0-with-FWM-Exception-1.0.0

    Unless required by applicable law or agreed to in writing, software
    distributed under the License is distributed on an "AS IS" BASIS,
    WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
    See the License for the specific language governing permissions and
    limitations under the License.
*/

//! Parsing of application configuration.

mod engine_config;
mod producer_config;

use config::Config;
use config::ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use config::FileFormat;
use config::builder::BuilderState;
use serde::Deserialize;
use serde::Serialize;

pub use self::engine_config::EngineConfig;
pub use self::producer_config::ProducerConfig;

/// Package version reported by Cargo at build time.
const CARGO_PKG_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Static trait for tracking implementations.
trait AppConfigDefaults {
    fn set_defaults<T: BuilderState>(
        config_builder: ConfigBuilder<T>,
        prefix: &str,
    ) -> Result<ConfigBuilder<T>, ConfigError>;
}

/**
Application configration root.

The application name defaults to the Rust package name, but can be overridden
with the environment variable `APP_NAME`.

Configuration will be loaded from

1. the file `{application name}.json` in the current working directory.
2. environment variable overrides in the form
   `{APPLICATION_NAME}_MODULE_CONFIGKEYWITHOUTSPACES`
 */
#[derive(Debug, Deserialize, Serialize)]
pub struct AppConfig {
    /// Configuration of the process engine connection.
    pub engine: EngineConfig,
    /// Configuration of the signal producer.
    pub producer: ProducerConfig,

    /// Lower case application name. Ignored when loading configuration.
    #[serde(skip_deserializing)]
    app_name: String,
}

impl AppConfig {
    /// The application name defaults to the Rust package name, but can be
    /// overridden with the environment variable `APP_NAME`.
    fn read_app_name_lowercase(cargo_pkg_name: &str) -> String {
        std::env::var("APP_NAME")
            .map_err(|e| {
                log::debug!(
                    "Environment variable APP_NAME: {e:?} -> Default app name '{cargo_pkg_name}' will be used."
                );
            })
            .ok()
            .map(|value| value.to_lowercase())
            .unwrap_or(cargo_pkg_name.to_owned())
    }

    /// Lower case application name.
    pub fn app_name_lowercase(&self) -> &str {
        &self.app_name
    }

    /// SemVer application version derived fromt the Rust package version.
    pub fn app_version(&self) -> &'static str {
        CARGO_PKG_VERSION
    }

    /** Creates a new instance pre-populated with defaults, an optional
    configurations file and environment variable overrides.

    Use `env!("CARGO_PKG_NAME")` as `cargo_pkg_name`.
    */
    pub fn new(cargo_pkg_name: &str) -> Result<Self, ConfigError> {
        let app_name = Self::read_app_name_lowercase(cargo_pkg_name);
        let config_filename = app_name.to_owned() + ".json";
        let conf_file = std::env::current_dir()
            .map_err(|e| ConfigError::Message(format!("No current directory: {e}")))?
            .join(config_filename);
        if log::log_enabled!(log::Level::Debug) {
            log::debug!(
                "Will load '{}' configuration if present.",
                conf_file.display()
            );
        }
        let config_builder = Self::defaults()?
            .add_source(File::from(conf_file).required(false))
            .add_source(
                Environment::with_prefix(&app_name.to_uppercase())
                    .separator("_")
                    .list_separator(","),
            );
        let app_config = Self::from_builder(config_builder, &app_name)?;
        log::info!("Running with configuration: {app_config:?}");
        if log::log_enabled!(log::Level::Trace) {
            log::trace!(
                "Running with configuration: {}",
                serde_json::to_string(&app_config).unwrap_or_default()
            );
        }
        Ok(app_config)
    }

    /// Creates a new instance from defaults overridden by a JSON document.
    ///
    /// Neither files nor environment variables are consulted.
    pub fn from_json_str(document: &str, app_name: &str) -> Result<Self, ConfigError> {
        let config_builder =
            Self::defaults()?.add_source(File::from_str(document, FileFormat::Json));
        Self::from_builder(config_builder, app_name)
    }

    /// Builder pre-populated with the defaults of every section.
    fn defaults() -> Result<ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        let config_builder = Config::builder();
        let config_builder = EngineConfig::set_defaults(config_builder, "engine")?;
        ProducerConfig::set_defaults(config_builder, "producer")
    }

    fn from_builder(
        config_builder: ConfigBuilder<config::builder::DefaultState>,
        app_name: &str,
    ) -> Result<Self, ConfigError> {
        let mut app_config: AppConfig = config_builder.build()?.try_deserialize()?;
        app_config.app_name = app_name.to_owned();
        Ok(app_config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_deserialize() {
        let app_config = AppConfig::from_builder(AppConfig::defaults().unwrap(), "signalbridge")
            .unwrap();
        assert_eq!(app_config.app_name_lowercase(), "signalbridge");
        assert_eq!(app_config.engine.implementation(), "rest");
        assert_eq!(app_config.engine.url(), "http://localhost:8080/engine-rest");
        assert_eq!(app_config.engine.pool_size(), 4);
        assert_eq!(app_config.engine.timeout().as_millis(), 10_000);
        assert!(app_config.producer.as_parameters().is_empty());
    }

    #[test]
    fn file_overrides_defaults() {
        let app_config = AppConfig::from_json_str(
            r#"{
                "engine": {"implementation": "mem", "timeoutmillis": "2500"},
                "producer": {"activityid": "review", "definitionkey": "orderProcess", "copyheaders": "true"}
            }"#,
            "signalbridge",
        )
        .unwrap();
        assert_eq!(app_config.engine.implementation(), "mem");
        assert_eq!(app_config.engine.timeout().as_millis(), 2500);
        let parameters = app_config.producer.as_parameters();
        assert_eq!(parameters.get("activityId").map(String::as_str), Some("review"));
        assert_eq!(
            parameters.get("processDefinitionKey").map(String::as_str),
            Some("orderProcess")
        );
        assert_eq!(parameters.get("copyHeaders").map(String::as_str), Some("true"));
        assert!(!parameters.contains_key("copyBodyAsVariable"));
    }
}
