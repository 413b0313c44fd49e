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

//! Process instance model.

use serde::Deserialize;
use serde::Serialize;

/// A running instance of a process definition.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessInstance {
    id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    business_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    process_definition_key: Option<String>,
}

impl ProcessInstance {
    /// Return a new instance.
    pub fn new(
        id: &str,
        business_key: Option<&str>,
        process_definition_key: Option<&str>,
    ) -> Self {
        Self {
            id: id.to_owned(),
            business_key: business_key.map(str::to_owned),
            process_definition_key: process_definition_key.map(str::to_owned),
        }
    }

    /// Return the process instance identifier.
    pub fn get_id(&self) -> &str {
        &self.id
    }

    /// Return the business key, if the instance was started with one.
    pub fn get_business_key(&self) -> Option<&str> {
        self.business_key.as_deref()
    }

    /// Return the key of the process definition, when known.
    pub fn get_process_definition_key(&self) -> Option<&str> {
        self.process_definition_key.as_deref()
    }
}
