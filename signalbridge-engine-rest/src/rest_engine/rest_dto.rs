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

//! JSON documents exchanged with the engine REST API.

use serde::Deserialize;
use serde::Serialize;
use signalbridge_engine::model::VariableMap;
use std::collections::HashMap;

/// Execution as returned by `GET /execution`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionDto {
    pub id: String,
    pub process_instance_id: String,
    #[serde(default)]
    pub ended: bool,
}

/// Process instance as returned by `GET /process-instance`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessInstanceDto {
    pub id: String,
    #[serde(default)]
    pub business_key: Option<String>,
    #[serde(default)]
    pub ended: bool,
}

/// Error document returned by the engine for failed requests.
#[derive(Debug, Deserialize)]
pub struct ExceptionDto {
    #[serde(default)]
    pub message: Option<String>,
}

impl ExceptionDto {
    /// Extract the error message from a response body, if it is an exception
    /// document.
    pub fn message_from_body(body: &str) -> Option<String> {
        serde_json::from_str::<Self>(body)
            .ok()
            .and_then(|exception| exception.message)
    }
}

/// Typed variable value.
#[derive(Debug, PartialEq, Serialize)]
pub struct VariableValueDto {
    pub value: serde_json::Value,
    #[serde(rename = "type")]
    pub value_type: &'static str,
}

impl VariableValueDto {
    /// Map a JSON value to the closest engine value type.
    ///
    /// Objects and arrays are handed over as serialized JSON documents of
    /// type `Json`. That type is only known to engines with the Spin plugin
    /// installed. Other engines reject the request with `400 Bad Request`,
    /// which surfaces as [ClientFailure](signalbridge_engine::model::EngineErrorKind::ClientFailure).
    pub fn from_json_value(value: &serde_json::Value) -> Self {
        use serde_json::Value;
        let (value, value_type) = match value {
            Value::Null => (Value::Null, "Null"),
            Value::Bool(_) => (value.to_owned(), "Boolean"),
            Value::Number(number) if number.is_i64() || number.is_u64() => {
                (value.to_owned(), "Long")
            }
            Value::Number(_) => (value.to_owned(), "Double"),
            Value::String(_) => (value.to_owned(), "String"),
            Value::Array(_) | Value::Object(_) => (Value::String(value.to_string()), "Json"),
        };
        Self { value, value_type }
    }
}

/// Body of `POST /process-instance/{id}/variables`.
#[derive(Debug, Serialize)]
pub struct VariableModificationsDto {
    pub modifications: HashMap<String, VariableValueDto>,
}

impl VariableModificationsDto {
    /// Return a new instance setting every variable in the map.
    pub fn from_variables(variables: &VariableMap) -> Self {
        Self {
            modifications: variables
                .iter()
                .map(|(name, value)| (name.to_owned(), VariableValueDto::from_json_value(value)))
                .collect(),
        }
    }
}

/// Body of `POST /execution/{id}/signal`.
#[derive(Debug, Default, Serialize)]
pub struct SignalDto {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variable_types_follow_json_types() {
        assert_eq!(
            VariableValueDto::from_json_value(&serde_json::json!("yes")).value_type,
            "String"
        );
        assert_eq!(
            VariableValueDto::from_json_value(&serde_json::json!(42)).value_type,
            "Long"
        );
        assert_eq!(
            VariableValueDto::from_json_value(&serde_json::json!(4.2)).value_type,
            "Double"
        );
        assert_eq!(
            VariableValueDto::from_json_value(&serde_json::json!(false)).value_type,
            "Boolean"
        );
        assert_eq!(
            VariableValueDto::from_json_value(&serde_json::Value::Null).value_type,
            "Null"
        );
        let nested = VariableValueDto::from_json_value(&serde_json::json!({"sku": "A-1"}));
        assert_eq!(nested.value_type, "Json");
        assert_eq!(nested.value, serde_json::json!(r#"{"sku":"A-1"}"#));
    }

    #[test]
    fn modifications_document_layout() {
        let variables = VariableMap::from([("approved".to_string(), serde_json::json!(true))]);
        let json = serde_json::to_value(VariableModificationsDto::from_variables(&variables))
            .unwrap();
        assert_eq!(
            json,
            serde_json::json!({"modifications": {"approved": {"value": true, "type": "Boolean"}}})
        );
    }

    #[test]
    fn exception_message_is_extracted() {
        assert_eq!(
            ExceptionDto::message_from_body(r#"{"type":"InvalidRequestException","message":"bad"}"#),
            Some("bad".to_string())
        );
        assert_eq!(ExceptionDto::message_from_body("not json"), None);
    }
}
