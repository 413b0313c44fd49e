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

//! Message payload.

use serde::Deserialize;
use serde::Serialize;

/// Message payload classified by how it is handed over to the process engine.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(from = "serde_json::Value", into = "serde_json::Value")]
pub enum MessageBody {
    /// No payload.
    #[default]
    Empty,
    /// Text payload.
    Text(String),
    /// Named values.
    Map(serde_json::Map<String, serde_json::Value>),
    /// Anything else. Not handed over as variables.
    Other(serde_json::Value),
}

impl From<serde_json::Value> for MessageBody {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Self::Empty,
            serde_json::Value::String(text) => Self::Text(text),
            serde_json::Value::Object(map) => Self::Map(map),
            other => Self::Other(other),
        }
    }
}

impl From<MessageBody> for serde_json::Value {
    fn from(body: MessageBody) -> Self {
        match body {
            MessageBody::Empty => Self::Null,
            MessageBody::Text(text) => Self::String(text),
            MessageBody::Map(map) => Self::Object(map),
            MessageBody::Other(other) => other,
        }
    }
}

impl From<&str> for MessageBody {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}
