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

//! Ephemeral in-memory implementation of [RuntimeService].

mod engine_operation;
mod inmem_facades;
mod inmem_process_instance;

pub use self::engine_operation::EngineOperation;
use self::inmem_facades::InMemRuntimeServiceFacades;
use self::inmem_process_instance::InMemProcessInstance;
use crossbeam_skiplist::SkipMap;
use signalbridge_engine::engine::RuntimeService;
use signalbridge_engine::model::EngineError;
use signalbridge_engine::model::EngineErrorKind;
use signalbridge_engine::model::Execution;
use signalbridge_engine::model::ProcessInstance;
use signalbridge_engine::model::VariableMap;
use std::sync::Arc;
use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering;

/// Ephemeral in-memory implementation of [RuntimeService].
pub struct InMemoryProcessEngine {
    process_instances: SkipMap<String, Arc<InMemProcessInstance>>,
    /// Executions waiting in an activity by execution identifier.
    executions: SkipMap<String, Execution>,
    journal: SkipMap<u64, EngineOperation>,
    id_sequence: AtomicU64,
    journal_sequence: AtomicU64,
}

impl InMemoryProcessEngine {
    /// Return a new instance.
    pub async fn new() -> Arc<Self> {
        if log::log_enabled!(log::Level::Trace) {
            log::trace!("Using in-mem process engine.");
        }
        Arc::new(Self {
            process_instances: SkipMap::default(),
            executions: SkipMap::default(),
            journal: SkipMap::default(),
            id_sequence: AtomicU64::new(1),
            journal_sequence: AtomicU64::default(),
        })
    }

    /// Get [RuntimeService] instance.
    pub fn as_runtime_service(self: &Arc<Self>) -> RuntimeService {
        RuntimeService::new(Arc::new(InMemRuntimeServiceFacades::new(self)))
    }

    /// Start a new process instance with a single execution waiting in
    /// `waiting_activity_id`.
    pub fn start_process_instance(
        &self,
        process_definition_key: &str,
        business_key: Option<&str>,
        waiting_activity_id: &str,
        variables: VariableMap,
    ) -> ProcessInstance {
        let process_instance_id = self.next_id("inst");
        let process_instance = ProcessInstance::new(
            &process_instance_id,
            business_key,
            Some(process_definition_key),
        );
        let inmem_process_instance = InMemProcessInstance::new(process_instance.clone());
        for (name, value) in variables {
            inmem_process_instance.variables.insert(name, value);
        }
        self.process_instances
            .insert(process_instance_id.to_owned(), Arc::new(inmem_process_instance));
        self.add_waiting_execution(&process_instance_id, waiting_activity_id);
        log::debug!(
            "Started process instance '{process_instance_id}' of '{process_definition_key}' waiting in '{waiting_activity_id}'."
        );
        process_instance
    }

    /// Add another execution of a running process instance that waits in
    /// `activity_id`.
    ///
    /// Returns `None` if the process instance is unknown or has ended.
    pub fn add_waiting_execution(
        &self,
        process_instance_id: &str,
        activity_id: &str,
    ) -> Option<Execution> {
        let process_instance = self.running_process_instance(process_instance_id)?;
        let execution = Execution::new(
            &self.next_id("exec"),
            process_instance_id,
            Some(activity_id),
            process_instance.process_instance.get_process_definition_key(),
        );
        self.executions
            .insert(execution.get_id().to_owned(), execution.clone());
        Some(execution)
    }

    /// Return a snapshot of the variables of a process instance.
    pub fn variables(&self, process_instance_id: &str) -> Option<VariableMap> {
        self.process_instances
            .get(process_instance_id)
            .map(|entry| entry.value().variables_snapshot())
    }

    /// Return `true` if the process instance exists and has no waiting
    /// executions left.
    pub fn is_ended(&self, process_instance_id: &str) -> bool {
        self.process_instances
            .get(process_instance_id)
            .is_some_and(|entry| entry.value().is_ended())
    }

    /// Return all operations applied by the runtime service in order.
    pub fn journal(&self) -> Vec<EngineOperation> {
        self.journal
            .iter()
            .map(|entry| entry.value().clone())
            .collect()
    }

    /// Return all executions currently waiting in an activity.
    pub fn waiting_executions(&self) -> Vec<Execution> {
        self.executions
            .iter()
            .map(|entry| entry.value().clone())
            .collect()
    }

    fn next_id(&self, prefix: &str) -> String {
        format!(
            "{prefix}-{}",
            self.id_sequence.fetch_add(1, Ordering::Relaxed)
        )
    }

    fn running_process_instance(
        &self,
        process_instance_id: &str,
    ) -> Option<Arc<InMemProcessInstance>> {
        self.process_instances
            .get(process_instance_id)
            .map(|entry| Arc::clone(entry.value()))
            .filter(|process_instance| !process_instance.is_ended())
    }

    fn append_to_journal(&self, operation: EngineOperation) {
        let sequence = self.journal_sequence.fetch_add(1, Ordering::Relaxed);
        self.journal.insert(sequence, operation);
    }

    fn waiting_execution(&self, execution_id: &str) -> Result<Execution, EngineError> {
        self.executions
            .get(execution_id)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| {
                EngineErrorKind::NotFound
                    .error_with_msg(format!("No execution with id '{execution_id}' exists."))
            })
    }

    /// Write variables to the process instance owning the execution.
    fn set_variables(&self, execution_id: &str, variables: &VariableMap) -> Result<(), EngineError> {
        let execution = self.waiting_execution(execution_id)?;
        let process_instance = self
            .running_process_instance(execution.get_process_instance_id())
            .ok_or_else(|| {
                EngineErrorKind::NotFound.error_with_msg(format!(
                    "Process instance '{}' of execution '{execution_id}' is not running.",
                    execution.get_process_instance_id()
                ))
            })?;
        for (name, value) in variables {
            process_instance
                .variables
                .insert(name.to_owned(), value.to_owned());
        }
        self.append_to_journal(EngineOperation::SetVariables {
            execution_id: execution_id.to_owned(),
            variables: variables.to_owned(),
        });
        Ok(())
    }

    /// Remove the waiting execution and end the process instance once nothing
    /// waits in it anymore.
    fn signal(&self, execution_id: &str) -> Result<(), EngineError> {
        let execution = self
            .executions
            .remove(execution_id)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| {
                EngineErrorKind::NotFound
                    .error_with_msg(format!("No execution with id '{execution_id}' exists."))
            })?;
        self.append_to_journal(EngineOperation::Signal {
            execution_id: execution_id.to_owned(),
        });
        let process_instance_id = execution.get_process_instance_id();
        let still_waiting = self.executions.iter().any(|entry| {
            entry.value().get_process_instance_id() == process_instance_id
        });
        if !still_waiting
            && let Some(process_instance) = self.process_instances.get(process_instance_id)
        {
            process_instance.value().end();
            log::debug!("Process instance '{process_instance_id}' has ended.");
        }
        Ok(())
    }
}

/// Return the only item or fail when there are several.
fn single_result<T>(mut matches: Vec<T>, what: &str) -> Result<Option<T>, EngineError> {
    match matches.len() {
        0 => Ok(None),
        1 => Ok(matches.pop()),
        count => Err(EngineErrorKind::NonUniqueResult
            .error_with_msg(format!("Query for {what} returned {count} results."))),
    }
}
