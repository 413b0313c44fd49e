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

//! Derivation of process variables from an exchange.

use crate::exchange::BUSINESS_KEY_PROPERTY;
use crate::exchange::CORRELATION_KEY_PROPERTY;
use crate::exchange::Exchange;
use crate::exchange::MessageBody;
use crate::exchange::PROCESS_INSTANCE_ID_PROPERTY;
use crate::producer::ProducerParameters;
use signalbridge_engine::model::VariableMap;

/// Exchange properties used for locating the process instance. Never copied.
const CORRELATION_PROPERTIES: [&str; 3] = [
    PROCESS_INSTANCE_ID_PROPERTY,
    BUSINESS_KEY_PROPERTY,
    CORRELATION_KEY_PROPERTY,
];

/** Derive the process variables to hand over from an exchange.

* A text body is stored in the variable named by `copyBodyAsVariable`.
* Each entry of a map body becomes a variable.
* Other bodies are not handed over.
* Exchange properties and message headers are copied when enabled.

On name clashes the body wins over headers, which win over properties.
*/
pub fn prepare_variables(exchange: &Exchange, parameters: &ProducerParameters) -> VariableMap {
    let mut variables = VariableMap::new();
    if parameters.copy_properties() {
        for (name, value) in exchange.get_properties() {
            if !CORRELATION_PROPERTIES.contains(&name.as_str()) {
                variables.insert(name.to_owned(), value.to_owned());
            }
        }
    }
    if parameters.copy_headers() {
        for (name, value) in exchange.get_headers() {
            variables.insert(name.to_owned(), value.to_owned());
        }
    }
    match exchange.get_body() {
        MessageBody::Empty => {}
        MessageBody::Text(text) => {
            variables.insert(
                parameters.copy_body_as_variable().to_owned(),
                serde_json::Value::String(text.to_owned()),
            );
        }
        MessageBody::Map(map) => {
            for (name, value) in map {
                variables.insert(name.to_owned(), value.to_owned());
            }
        }
        MessageBody::Other(other) => {
            log::warn!(
                "Unsupported type of message body will not be handed over to the process engine: {other}"
            );
        }
    }
    variables
}
