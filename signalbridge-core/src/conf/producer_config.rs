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

//! Parsing of configuration for the signal producer.

use crate::producer::ProducerParameters;
use config::ConfigBuilder;
use config::ConfigError;
use config::builder::BuilderState;
use serde::Deserialize;
use serde::Serialize;
use std::collections::HashMap;

use super::AppConfigDefaults;

/// Configuration of the signal producer.
///
/// Empty values are treated as not configured.
#[derive(Debug, Deserialize, Serialize)]
pub struct ProducerConfig {
    /// See [ProducerParameters::ACTIVITY_ID].
    activityid: String,
    /// See [ProducerParameters::PROCESS_DEFINITION_KEY].
    definitionkey: String,
    /// See [ProducerParameters::COPY_BODY_AS_VARIABLE].
    bodyvariable: String,
    /// See [ProducerParameters::COPY_HEADERS].
    copyheaders: String,
    /// See [ProducerParameters::COPY_PROPERTIES].
    copyproperties: String,
    /// See [ProducerParameters::CORRELATION_KEY_NAME].
    correlationkeyname: String,
}

impl AppConfigDefaults for ProducerConfig {
    /// Provide defaults for this part of the configuration
    fn set_defaults<T: BuilderState>(
        config_builder: ConfigBuilder<T>,
        prefix: &str,
    ) -> Result<ConfigBuilder<T>, ConfigError> {
        config_builder
            .set_default(prefix.to_string() + "." + "activityid", "")?
            .set_default(prefix.to_string() + "." + "definitionkey", "")?
            .set_default(prefix.to_string() + "." + "bodyvariable", "")?
            .set_default(prefix.to_string() + "." + "copyheaders", "")?
            .set_default(prefix.to_string() + "." + "copyproperties", "")?
            .set_default(prefix.to_string() + "." + "correlationkeyname", "")
    }
}

impl ProducerConfig {
    /// Return the configured values as raw producer parameters.
    ///
    /// Validation is left to [ProducerParameters::from_map].
    pub fn as_parameters(&self) -> HashMap<String, String> {
        [
            (ProducerParameters::ACTIVITY_ID, &self.activityid),
            (ProducerParameters::PROCESS_DEFINITION_KEY, &self.definitionkey),
            (ProducerParameters::COPY_BODY_AS_VARIABLE, &self.bodyvariable),
            (ProducerParameters::COPY_HEADERS, &self.copyheaders),
            (ProducerParameters::COPY_PROPERTIES, &self.copyproperties),
            (ProducerParameters::CORRELATION_KEY_NAME, &self.correlationkeyname),
        ]
        .into_iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(key, value)| (key.to_owned(), value.to_owned()))
        .collect()
    }
}
