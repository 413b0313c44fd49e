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

//! Parsing of configuration for the process engine connection.

use config::ConfigBuilder;
use config::ConfigError;
use config::builder::BuilderState;
use serde::Deserialize;
use serde::Serialize;
use std::time::Duration;

use super::AppConfigDefaults;

/// Configuration of the process engine connection.
#[derive(Debug, Deserialize, Serialize)]
pub struct EngineConfig {
    /// Engine implementation: `rest` or `mem`.
    implementation: String,
    /// Base URL of the engine REST API.
    url: String,
    /// Max idle HTTP connections kept per host.
    poolsize: usize,
    /// HTTP request timeout in milliseconds.
    timeoutmillis: u64,
}

impl AppConfigDefaults for EngineConfig {
    /// Provide defaults for this part of the configuration
    fn set_defaults<T: BuilderState>(
        config_builder: ConfigBuilder<T>,
        prefix: &str,
    ) -> Result<ConfigBuilder<T>, ConfigError> {
        config_builder
            .set_default(prefix.to_string() + "." + "implementation", "rest")?
            .set_default(
                prefix.to_string() + "." + "url",
                "http://localhost:8080/engine-rest",
            )?
            .set_default(prefix.to_string() + "." + "poolsize", "4")?
            .set_default(prefix.to_string() + "." + "timeoutmillis", "10000")
    }
}

impl EngineConfig {
    /// Engine implementation variant. Defaults to `rest`.
    pub fn implementation(&self) -> &str {
        &self.implementation
    }

    /// Base URL of the engine REST API. Defaults to
    /// `http://localhost:8080/engine-rest`.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Max idle HTTP connections kept per host. Defaults to `4`.
    pub fn pool_size(&self) -> usize {
        self.poolsize
    }

    /// HTTP request timeout. Defaults to 10 seconds.
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeoutmillis)
    }
}
