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

//! Ephemeral in-memory representation of a process instance.

use crossbeam_skiplist::SkipMap;
use signalbridge_engine::model::ProcessInstance;
use signalbridge_engine::model::ProcessInstanceQuery;
use signalbridge_engine::model::VariableMap;
use std::sync::atomic::AtomicBool;
use std::sync::atomic::Ordering;

/// Ephemeral in-memory representation of a process instance.
pub struct InMemProcessInstance {
    pub process_instance: ProcessInstance,
    pub variables: SkipMap<String, serde_json::Value>,
    ended: AtomicBool,
}

impl InMemProcessInstance {
    /// Return a new running instance without variables.
    pub fn new(process_instance: ProcessInstance) -> Self {
        Self {
            process_instance,
            variables: SkipMap::default(),
            ended: AtomicBool::new(false),
        }
    }

    pub fn is_ended(&self) -> bool {
        self.ended.load(Ordering::Relaxed)
    }

    pub fn end(&self) {
        self.ended.store(true, Ordering::Relaxed);
    }

    pub fn variables_snapshot(&self) -> VariableMap {
        self.variables
            .iter()
            .map(|entry| (entry.key().to_owned(), entry.value().to_owned()))
            .collect()
    }

    /// Return `true` if this running instance satisfies every criterion that
    /// is set.
    pub fn matches(&self, query: &ProcessInstanceQuery) -> bool {
        if self.is_ended() {
            return false;
        }
        if let Some(process_definition_key) = query.get_process_definition_key()
            && self.process_instance.get_process_definition_key() != Some(process_definition_key)
        {
            return false;
        }
        if let Some(business_key) = query.get_business_key()
            && self.process_instance.get_business_key() != Some(business_key)
        {
            return false;
        }
        if let Some((name, value)) = query.get_variable_equals() {
            return self
                .variables
                .get(name)
                .is_some_and(|entry| entry.value() == value);
        }
        true
    }
}
