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

//! Message envelope delivered by the router.

mod message_body;

pub use self::message_body::MessageBody;
use serde::Deserialize;
use serde::Serialize;
use std::collections::HashMap;

/// Exchange property holding the process instance identifier.
pub const PROCESS_INSTANCE_ID_PROPERTY: &str = "CamundaBpmProcessInstanceId";
/// Exchange property holding the business key of the process instance.
pub const BUSINESS_KEY_PROPERTY: &str = "CamundaBpmBusinessKey";
/// Exchange property holding the value of the correlation key variable.
pub const CORRELATION_KEY_PROPERTY: &str = "CamundaBpmCorrelationKey";

/** Message envelope delivered by the router.

Serialized form:

```json
{
  "body": {"approved": true},
  "headers": {"source": "erp"},
  "properties": {"CamundaBpmBusinessKey": "order-1"}
}
```
*/
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Exchange {
    #[serde(default)]
    body: MessageBody,
    #[serde(default)]
    headers: HashMap<String, serde_json::Value>,
    #[serde(default)]
    properties: HashMap<String, serde_json::Value>,
}

impl Exchange {
    /// Return a new instance carrying `body` and nothing else.
    pub fn new(body: MessageBody) -> Self {
        Self {
            body,
            ..Default::default()
        }
    }

    /// Parse the serialized form.
    pub fn from_json_str(document: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(document)
    }

    /// Add or replace a message header.
    pub fn with_header<V: Into<serde_json::Value>>(mut self, name: &str, value: V) -> Self {
        self.headers.insert(name.to_owned(), value.into());
        self
    }

    /// Add or replace an exchange property.
    pub fn with_property<V: Into<serde_json::Value>>(mut self, name: &str, value: V) -> Self {
        self.properties.insert(name.to_owned(), value.into());
        self
    }

    /// Return the message body.
    pub fn get_body(&self) -> &MessageBody {
        &self.body
    }

    /// Return the message headers.
    pub fn get_headers(&self) -> &HashMap<String, serde_json::Value> {
        &self.headers
    }

    /// Return the exchange properties.
    pub fn get_properties(&self) -> &HashMap<String, serde_json::Value> {
        &self.properties
    }

    /// Return an exchange property in text form.
    ///
    /// Strings are returned as is and numbers in decimal notation. Other
    /// values are not considered text.
    pub fn property_as_string(&self, name: &str) -> Option<String> {
        match self.properties.get(name)? {
            serde_json::Value::String(value) => Some(value.to_owned()),
            serde_json::Value::Number(value) => Some(value.to_string()),
            _ => None,
        }
    }
}
