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

//! Execution model.

use serde::Deserialize;
use serde::Serialize;

/** A runtime pointer into a running process instance.

The identifier is issued by the process engine and is opaque to everything
else.
*/
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Execution {
    id: String,
    process_instance_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    activity_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    process_definition_key: Option<String>,
}

impl Execution {
    /// Return a new instance.
    pub fn new(
        id: &str,
        process_instance_id: &str,
        activity_id: Option<&str>,
        process_definition_key: Option<&str>,
    ) -> Self {
        Self {
            id: id.to_owned(),
            process_instance_id: process_instance_id.to_owned(),
            activity_id: activity_id.map(str::to_owned),
            process_definition_key: process_definition_key.map(str::to_owned),
        }
    }

    /// Return the execution identifier.
    pub fn get_id(&self) -> &str {
        &self.id
    }

    /// Return the identifier of the process instance this execution belongs
    /// to.
    pub fn get_process_instance_id(&self) -> &str {
        &self.process_instance_id
    }

    /// Return the activity the execution is waiting in, when known.
    pub fn get_activity_id(&self) -> Option<&str> {
        self.activity_id.as_deref()
    }

    /// Return the key of the process definition, when known.
    pub fn get_process_definition_key(&self) -> Option<&str> {
        self.process_definition_key.as_deref()
    }
}
