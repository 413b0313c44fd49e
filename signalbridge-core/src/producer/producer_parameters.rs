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

//! Validated producer parameters.

use super::ProducerError;
use super::ProducerErrorKind;
use std::collections::BTreeMap;
use std::collections::HashMap;

/** Validated producer parameters.

Created once from the raw parameter map of the endpoint. Only `activityId` is
required.
*/
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProducerParameters {
    activity_id: String,
    process_definition_key: Option<String>,
    copy_body_as_variable: String,
    copy_headers: bool,
    copy_properties: bool,
    correlation_key_name: Option<String>,
}

impl ProducerParameters {
    /// Parameter naming the activity the execution waits in.
    pub const ACTIVITY_ID: &'static str = "activityId";
    /// Parameter naming the process definition to restrict lookups to.
    pub const PROCESS_DEFINITION_KEY: &'static str = "processDefinitionKey";
    /// Parameter naming the variable a text body is stored in.
    pub const COPY_BODY_AS_VARIABLE: &'static str = "copyBodyAsVariable";
    /// Parameter enabling copying of message headers into variables.
    pub const COPY_HEADERS: &'static str = "copyHeaders";
    /// Parameter enabling copying of exchange properties into variables.
    pub const COPY_PROPERTIES: &'static str = "copyProperties";
    /// Parameter naming the process variable used for correlation key lookups.
    pub const CORRELATION_KEY_NAME: &'static str = "correlationKeyName";

    /// Variable name of a text body unless configured otherwise.
    pub const DEFAULT_BODY_VARIABLE: &'static str = "camelBody";

    /// Validate and extract parameters.
    ///
    /// Fails with [ProducerErrorKind::Configuration] when `activityId` is
    /// absent or empty, or when a flag is not `true` or `false`.
    pub fn from_map(parameters: &HashMap<String, String>) -> Result<Self, ProducerError> {
        let activity_id = parameters
            .get(Self::ACTIVITY_ID)
            .filter(|value| !value.is_empty())
            .ok_or_else(|| {
                ProducerErrorKind::Configuration.error_with_msg(format!(
                    "You need to pass the '{}' parameter! Parameters received: {:?}",
                    Self::ACTIVITY_ID,
                    parameters.iter().collect::<BTreeMap<_, _>>()
                ))
            })?
            .to_owned();
        Ok(Self {
            activity_id,
            process_definition_key: Self::optional(parameters, Self::PROCESS_DEFINITION_KEY),
            copy_body_as_variable: Self::optional(parameters, Self::COPY_BODY_AS_VARIABLE)
                .unwrap_or_else(|| Self::DEFAULT_BODY_VARIABLE.to_owned()),
            copy_headers: Self::flag(parameters, Self::COPY_HEADERS)?,
            copy_properties: Self::flag(parameters, Self::COPY_PROPERTIES)?,
            correlation_key_name: Self::optional(parameters, Self::CORRELATION_KEY_NAME),
        })
    }

    fn optional(parameters: &HashMap<String, String>, name: &str) -> Option<String> {
        parameters
            .get(name)
            .filter(|value| !value.is_empty())
            .map(String::to_owned)
    }

    fn flag(parameters: &HashMap<String, String>, name: &str) -> Result<bool, ProducerError> {
        match parameters.get(name).map(|value| value.to_lowercase()).as_deref() {
            None | Some("") | Some("false") => Ok(false),
            Some("true") => Ok(true),
            Some(other) => Err(ProducerErrorKind::Configuration.error_with_msg(format!(
                "Parameter '{name}' must be 'true' or 'false', not '{other}'."
            ))),
        }
    }

    /// Activity the execution waits in.
    pub fn activity_id(&self) -> &str {
        &self.activity_id
    }

    /// Process definition to restrict lookups to. `None` means any.
    pub fn process_definition_key(&self) -> Option<&str> {
        self.process_definition_key.as_deref()
    }

    /// Variable name a text body is stored in.
    pub fn copy_body_as_variable(&self) -> &str {
        &self.copy_body_as_variable
    }

    /// `true` if message headers are copied into variables.
    pub fn copy_headers(&self) -> bool {
        self.copy_headers
    }

    /// `true` if exchange properties are copied into variables.
    pub fn copy_properties(&self) -> bool {
        self.copy_properties
    }

    /// Process variable used for correlation key lookups.
    pub fn correlation_key_name(&self) -> Option<&str> {
        self.correlation_key_name.as_deref()
    }
}
