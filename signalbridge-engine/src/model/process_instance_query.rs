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

//! Criteria for looking up a process instance.

/** Equality filtered lookup of process instances.

Criteria that are not set do not restrict the result.
*/
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProcessInstanceQuery {
    process_definition_key: Option<String>,
    business_key: Option<String>,
    variable_equals: Option<(String, serde_json::Value)>,
}

impl ProcessInstanceQuery {
    /// Only match instances of the process definition with this key.
    ///
    /// `None` removes the restriction.
    pub fn process_definition_key(mut self, process_definition_key: Option<&str>) -> Self {
        self.process_definition_key = process_definition_key.map(str::to_owned);
        self
    }

    /// Only match instances started with this business key.
    pub fn business_key(mut self, business_key: &str) -> Self {
        self.business_key = Some(business_key.to_owned());
        self
    }

    /// Only match instances where the variable `name` holds `value`.
    pub fn variable_equals(mut self, name: &str, value: serde_json::Value) -> Self {
        self.variable_equals = Some((name.to_owned(), value));
        self
    }

    /// See [Self::process_definition_key()].
    pub fn get_process_definition_key(&self) -> Option<&str> {
        self.process_definition_key.as_deref()
    }

    /// See [Self::business_key()].
    pub fn get_business_key(&self) -> Option<&str> {
        self.business_key.as_deref()
    }

    /// See [Self::variable_equals()].
    pub fn get_variable_equals(&self) -> Option<(&str, &serde_json::Value)> {
        self.variable_equals
            .as_ref()
            .map(|(name, value)| (name.as_str(), value))
    }
}
