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

//! Signals a waiting execution of a process instance.

use super::ProducerError;
use super::ProducerErrorKind;
use super::ProducerParameters;
use crate::correlation::ProcessInstanceResolver;
use crate::exchange::Exchange;
use crate::util::LogScopeDuration;
use crate::variables;
use signalbridge_engine::engine::RuntimeService;
use signalbridge_engine::engine::facades::RuntimeServiceFacades;
use signalbridge_engine::model::Execution;
use signalbridge_engine::model::ExecutionQuery;
use std::collections::HashMap;
use std::sync::Arc;

/** Signals a waiting execution of a process instance.

For each exchange the producer resolves the process instance, looks up the
single execution of that instance waiting in the configured activity, hands
over the message content as variables and signals the execution.

Nothing is retried or rolled back. If signaling fails, the variables that were
already set stay in place.
*/
pub struct SignalProcessProducer {
    runtime_service: Arc<RuntimeService>,
    resolver: ProcessInstanceResolver,
    parameters: ProducerParameters,
}

impl SignalProcessProducer {
    /// Return a new instance from raw endpoint parameters.
    ///
    /// Fails with [ProducerErrorKind::Configuration] if the `activityId`
    /// parameter is missing.
    pub fn new(
        runtime_service: &Arc<RuntimeService>,
        parameters: &HashMap<String, String>,
    ) -> Result<Self, ProducerError> {
        Ok(Self::with_parameters(
            runtime_service,
            ProducerParameters::from_map(parameters)?,
        ))
    }

    /// Return a new instance from already validated parameters.
    pub fn with_parameters(
        runtime_service: &Arc<RuntimeService>,
        parameters: ProducerParameters,
    ) -> Self {
        let resolver =
            ProcessInstanceResolver::new(runtime_service, parameters.correlation_key_name());
        Self {
            runtime_service: Arc::clone(runtime_service),
            resolver,
            parameters,
        }
    }

    /// Return the parameters the producer was set up with.
    pub fn parameters(&self) -> &ProducerParameters {
        &self.parameters
    }

    /// Signal the execution the exchange targets.
    ///
    /// Returns the execution that was signaled.
    pub async fn process(&self, exchange: &Exchange) -> Result<Execution, ProducerError> {
        let _log_scope_duration =
            LogScopeDuration::new(log::Level::Debug, module_path!(), "process", 0);
        let activity_id = self.parameters.activity_id();
        let process_definition_key = self.parameters.process_definition_key();
        let process_instance_id = self
            .resolver
            .find_process_instance_id(exchange, process_definition_key)
            .await?;
        let query = ExecutionQuery::default()
            .process_definition_key(process_definition_key)
            .process_instance_id(&process_instance_id)
            .activity_id(activity_id);
        let execution = self
            .runtime_service
            .execution_facade()
            .single_execution(&query)
            .await?
            .ok_or_else(|| {
                ProducerErrorKind::NotFound.error_with_msg(format!(
                    "Couldn't find process instance with id '{process_instance_id}' waiting in activity '{activity_id}'."
                ))
            })?;
        let variables = variables::prepare_variables(exchange, &self.parameters);
        if log::log_enabled!(log::Level::Trace) {
            log::trace!(
                "Setting {} variable(s) on execution '{}'.",
                variables.len(),
                execution.get_id()
            );
        }
        self.runtime_service
            .variable_facade()
            .set_variables(&execution, &variables)
            .await?;
        self.runtime_service
            .execution_facade()
            .signal(execution.get_id())
            .await?;
        log::debug!(
            "Signaled execution '{}' of process instance '{process_instance_id}' in activity '{activity_id}'.",
            execution.get_id()
        );
        Ok(execution)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exchange::BUSINESS_KEY_PROPERTY;
    use crate::exchange::PROCESS_INSTANCE_ID_PROPERTY;
    use signalbridge_engine::engine::facades::*;
    use signalbridge_engine::model::EngineError;
    use signalbridge_engine::model::EngineErrorKind;
    use signalbridge_engine::model::ProcessInstance;
    use signalbridge_engine::model::ProcessInstanceQuery;
    use signalbridge_engine::model::VariableMap;
    use signalbridge_engine_mem::EngineOperation;
    use signalbridge_engine_mem::InMemoryProcessEngine;
    use std::sync::Mutex;

    pub fn initialize_env_logger() {
        env_logger::builder()
            .is_test(true)
            .filter_level(log::LevelFilter::Debug)
            .try_init()
            .map_err(|e| {
                log::trace!("Env logger for testing was probably already initialized: {e:?}")
            })
            .ok();
    }

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Query(ExecutionQuery),
        SetVariables(String, VariableMap),
        Signal(String),
    }

    /// Runtime service double answering queries with a canned result and
    /// recording every call.
    struct RecordingFacades {
        execution: Result<Option<Execution>, EngineError>,
        signal_failure: Option<EngineError>,
        calls: Mutex<Vec<Call>>,
    }

    impl RecordingFacades {
        fn new(execution: Result<Option<Execution>, EngineError>) -> Arc<Self> {
            Arc::new(Self {
                execution,
                signal_failure: None,
                calls: Mutex::default(),
            })
        }

        fn failing_signal(execution: Execution, signal_failure: EngineError) -> Arc<Self> {
            Arc::new(Self {
                execution: Ok(Some(execution)),
                signal_failure: Some(signal_failure),
                calls: Mutex::default(),
            })
        }

        fn record(&self, call: Call) {
            self.calls.lock().unwrap().push(call);
        }

        fn calls(&self) -> Vec<Call> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl RuntimeServiceFacades for RecordingFacades {
        fn execution_facade(&self) -> &dyn ExecutionFacade {
            self
        }

        fn process_instance_facade(&self) -> &dyn ProcessInstanceFacade {
            self
        }

        fn variable_facade(&self) -> &dyn VariableFacade {
            self
        }
    }

    #[async_trait::async_trait]
    impl ExecutionFacade for RecordingFacades {
        async fn single_execution(
            &self,
            query: &ExecutionQuery,
        ) -> Result<Option<Execution>, EngineError> {
            self.record(Call::Query(query.clone()));
            self.execution.clone()
        }

        async fn signal(&self, execution_id: &str) -> Result<(), EngineError> {
            self.record(Call::Signal(execution_id.to_owned()));
            self.signal_failure.clone().map_or(Ok(()), Err)
        }
    }

    #[async_trait::async_trait]
    impl ProcessInstanceFacade for RecordingFacades {
        async fn single_process_instance(
            &self,
            _query: &ProcessInstanceQuery,
        ) -> Result<Option<ProcessInstance>, EngineError> {
            Ok(None)
        }
    }

    #[async_trait::async_trait]
    impl VariableFacade for RecordingFacades {
        async fn set_variables(
            &self,
            execution: &Execution,
            variables: &VariableMap,
        ) -> Result<(), EngineError> {
            self.record(Call::SetVariables(
                execution.get_id().to_owned(),
                variables.to_owned(),
            ));
            Ok(())
        }
    }

    fn parameters(entries: &[(&str, &str)]) -> HashMap<String, String> {
        entries
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect()
    }

    fn order_review_producer(facades: &Arc<RecordingFacades>) -> SignalProcessProducer {
        let runtime_service = Arc::new(RuntimeService::new(facades.clone()));
        SignalProcessProducer::new(
            &runtime_service,
            &parameters(&[
                ("activityId", "review"),
                ("processDefinitionKey", "orderProcess"),
            ]),
        )
        .unwrap()
    }

    #[test]
    fn construction_requires_activity_id() {
        let runtime_service = Arc::new(RuntimeService::new(RecordingFacades::new(Ok(None))));
        let err = SignalProcessProducer::new(
            &runtime_service,
            &parameters(&[("processDefinitionKey", "orderProcess")]),
        )
        .err()
        .unwrap();
        assert_eq!(err.kind(), &ProducerErrorKind::Configuration);
        let producer =
            SignalProcessProducer::new(&runtime_service, &parameters(&[("activityId", "review")]))
                .unwrap();
        assert_eq!(producer.parameters().activity_id(), "review");
        assert_eq!(producer.parameters().process_definition_key(), None);
    }

    #[tokio::test]
    async fn sets_variables_then_signals_matching_execution() {
        initialize_env_logger();
        let facades = RecordingFacades::new(Ok(Some(Execution::new(
            "exec-7",
            "inst-42",
            Some("review"),
            Some("orderProcess"),
        ))));
        let producer = order_review_producer(&facades);
        let exchange = Exchange::new(serde_json::json!({"approved": true, "amount": 12}).into())
            .with_property(PROCESS_INSTANCE_ID_PROPERTY, "inst-42");
        let execution = producer.process(&exchange).await.unwrap();
        assert_eq!(execution.get_id(), "exec-7");
        assert_eq!(
            facades.calls(),
            vec![
                Call::Query(
                    ExecutionQuery::default()
                        .process_definition_key(Some("orderProcess"))
                        .process_instance_id("inst-42")
                        .activity_id("review")
                ),
                Call::SetVariables(
                    "exec-7".to_string(),
                    variables::prepare_variables(&exchange, producer.parameters())
                ),
                Call::Signal("exec-7".to_string()),
            ]
        );
        assert_eq!(
            variables::prepare_variables(&exchange, producer.parameters()),
            VariableMap::from([
                ("approved".to_string(), serde_json::json!(true)),
                ("amount".to_string(), serde_json::json!(12)),
            ])
        );
    }

    #[tokio::test]
    async fn missing_execution_is_not_found() {
        initialize_env_logger();
        let facades = RecordingFacades::new(Ok(None));
        let producer = order_review_producer(&facades);
        let exchange = Exchange::new("hello".into())
            .with_property(PROCESS_INSTANCE_ID_PROPERTY, "inst-42");
        let err = producer.process(&exchange).await.unwrap_err();
        assert_eq!(err.kind(), &ProducerErrorKind::NotFound);
        let msg = err.to_string();
        assert!(msg.contains("inst-42"));
        assert!(msg.contains("review"));
        assert!(
            facades
                .calls()
                .iter()
                .all(|call| matches!(call, Call::Query(_)))
        );
    }

    #[tokio::test]
    async fn engine_errors_propagate_unchanged() {
        initialize_env_logger();
        let facades = RecordingFacades::new(Err(EngineErrorKind::NonUniqueResult
            .error_with_msg("Query for executions returned 2 results.")));
        let producer = order_review_producer(&facades);
        let exchange =
            Exchange::default().with_property(PROCESS_INSTANCE_ID_PROPERTY, "inst-42");
        let err = producer.process(&exchange).await.unwrap_err();
        assert_eq!(err.kind(), &ProducerErrorKind::Client);
        assert_eq!(
            err.engine_error().map(|e| *e.kind()),
            Some(EngineErrorKind::NonUniqueResult)
        );
        assert_eq!(facades.calls().len(), 1);
    }

    #[tokio::test]
    async fn failed_signal_leaves_variables_set() {
        initialize_env_logger();
        let facades = RecordingFacades::failing_signal(
            Execution::new("exec-7", "inst-42", Some("review"), None),
            EngineErrorKind::Unreachable.error(),
        );
        let producer = order_review_producer(&facades);
        let exchange = Exchange::new("hello".into())
            .with_property(PROCESS_INSTANCE_ID_PROPERTY, "inst-42");
        let err = producer.process(&exchange).await.unwrap_err();
        assert_eq!(err.kind(), &ProducerErrorKind::Client);
        assert!(matches!(
            facades.calls().as_slice(),
            [Call::Query(_), Call::SetVariables(_, _), Call::Signal(_)]
        ));
    }

    #[tokio::test]
    async fn unresolvable_exchange_touches_no_execution() {
        initialize_env_logger();
        let facades = RecordingFacades::new(Ok(None));
        let producer = order_review_producer(&facades);
        let err = producer
            .process(&Exchange::new("hello".into()))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), &ProducerErrorKind::Resolution);
        assert!(facades.calls().is_empty());
    }

    #[tokio::test]
    async fn resumes_waiting_execution_in_memory_engine() {
        initialize_env_logger();
        let engine = InMemoryProcessEngine::new().await;
        let order = engine.start_process_instance(
            "orderProcess",
            Some("order-1"),
            "review",
            VariableMap::new(),
        );
        let runtime_service = Arc::new(engine.as_runtime_service());
        let producer = SignalProcessProducer::new(
            &runtime_service,
            &parameters(&[
                ("activityId", "review"),
                ("processDefinitionKey", "orderProcess"),
                ("copyHeaders", "true"),
            ]),
        )
        .unwrap();
        let exchange = Exchange::new("approved".into())
            .with_header("reviewer", "alice")
            .with_property(BUSINESS_KEY_PROPERTY, "order-1");
        let execution = producer.process(&exchange).await.unwrap();
        assert_eq!(execution.get_process_instance_id(), order.get_id());
        assert!(engine.is_ended(order.get_id()));
        let variables = engine.variables(order.get_id()).unwrap();
        assert_eq!(variables.get("camelBody"), Some(&serde_json::json!("approved")));
        assert_eq!(variables.get("reviewer"), Some(&serde_json::json!("alice")));
        let journal = engine.journal();
        assert_eq!(journal.len(), 2);
        assert!(matches!(journal[0], EngineOperation::SetVariables { .. }));
        assert_eq!(
            journal[1],
            EngineOperation::Signal {
                execution_id: execution.get_id().to_owned()
            }
        );
        // Nothing waits in the activity anymore.
        let err = producer.process(&exchange).await.unwrap_err();
        assert_eq!(err.kind(), &ProducerErrorKind::Resolution);
    }
}
