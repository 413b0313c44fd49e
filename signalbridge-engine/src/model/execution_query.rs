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

//! Criteria for looking up an execution.

use super::Execution;

/** Equality filtered lookup of executions.

Criteria that are not set do not restrict the result.

```
use signalbridge_engine::model::ExecutionQuery;

let query = ExecutionQuery::default()
    .process_definition_key(Some("orderProcess"))
    .process_instance_id("inst-42")
    .activity_id("review");
assert_eq!(query.get_activity_id(), Some("review"));
```
*/
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExecutionQuery {
    process_definition_key: Option<String>,
    process_instance_id: Option<String>,
    activity_id: Option<String>,
}

impl ExecutionQuery {
    /// Only match executions of the process definition with this key.
    ///
    /// `None` removes the restriction.
    pub fn process_definition_key(mut self, process_definition_key: Option<&str>) -> Self {
        self.process_definition_key = process_definition_key.map(str::to_owned);
        self
    }

    /// Only match executions of this process instance.
    pub fn process_instance_id(mut self, process_instance_id: &str) -> Self {
        self.process_instance_id = Some(process_instance_id.to_owned());
        self
    }

    /// Only match executions waiting in this activity.
    pub fn activity_id(mut self, activity_id: &str) -> Self {
        self.activity_id = Some(activity_id.to_owned());
        self
    }

    /// See [Self::process_definition_key()].
    pub fn get_process_definition_key(&self) -> Option<&str> {
        self.process_definition_key.as_deref()
    }

    /// See [Self::process_instance_id()].
    pub fn get_process_instance_id(&self) -> Option<&str> {
        self.process_instance_id.as_deref()
    }

    /// See [Self::activity_id()].
    pub fn get_activity_id(&self) -> Option<&str> {
        self.activity_id.as_deref()
    }

    /// Return `true` if the execution satisfies every criterion that is set.
    pub fn matches(&self, execution: &Execution) -> bool {
        Self::criterion_matches(
            &self.process_definition_key,
            execution.get_process_definition_key(),
        ) && Self::criterion_matches(
            &self.process_instance_id,
            Some(execution.get_process_instance_id()),
        ) && Self::criterion_matches(&self.activity_id, execution.get_activity_id())
    }

    fn criterion_matches(criterion: &Option<String>, value: Option<&str>) -> bool {
        criterion
            .as_deref()
            .is_none_or(|expected| value.is_some_and(|value| value == expected))
    }
}
