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

//! Wiring of process engine and producer from configuration.

use crate::conf::AppConfig;
use crate::exchange::Exchange;
use crate::producer::ProducerError;
use crate::producer::ProducerErrorKind;
use crate::producer::SignalProcessProducer;
use signalbridge_engine::engine::RuntimeService;
use signalbridge_engine::model::Execution;
use signalbridge_engine_mem::InMemoryProcessEngine;
use signalbridge_engine_rest::RestProcessEngine;
use std::sync::Arc;

/** Signal bridge.

Owns the process engine connection and the producer set up from the
application configuration.
*/
pub struct SignalBridge {
    producer: SignalProcessProducer,
}

impl SignalBridge {
    /// Return a new instance with the engine selected by the configuration.
    pub async fn new(app_config: &AppConfig) -> Result<Arc<Self>, ProducerError> {
        let runtime_service = match app_config.engine.implementation() {
            "rest" => {
                let rest_engine = RestProcessEngine::new(
                    app_config.engine.url(),
                    app_config.app_name_lowercase(),
                    app_config.app_version(),
                    app_config.engine.pool_size(),
                    app_config.engine.timeout(),
                )?;
                Arc::new(rest_engine.as_runtime_service())
            }
            "mem" => {
                log::warn!("Using ephemeral in-mem process engine without any process instances.");
                let inmem_engine = InMemoryProcessEngine::new().await;
                Arc::new(inmem_engine.as_runtime_service())
            }
            unknown_engine => {
                return Err(ProducerErrorKind::Configuration
                    .error_with_msg(format!("Unknown process engine type '{unknown_engine}'.")));
            }
        };
        Self::with_runtime_service(app_config, &runtime_service)
    }

    /// Return a new instance using an already set up engine.
    pub fn with_runtime_service(
        app_config: &AppConfig,
        runtime_service: &Arc<RuntimeService>,
    ) -> Result<Arc<Self>, ProducerError> {
        let producer =
            SignalProcessProducer::new(runtime_service, &app_config.producer.as_parameters())?;
        log::info!(
            "Signal producer for activity '{}' has been created.",
            producer.parameters().activity_id()
        );
        Ok(Arc::new(Self { producer }))
    }

    /// Parse a serialized [Exchange] and signal the execution it targets.
    pub async fn process_document(&self, document: &str) -> Result<Execution, ProducerError> {
        let exchange = Exchange::from_json_str(document).map_err(|e| {
            ProducerErrorKind::MalformedExchange
                .error_with_msg(format!("Failed to parse exchange document: {e}"))
        })?;
        self.producer.process(&exchange).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use signalbridge_engine::model::VariableMap;

    fn app_config(producer_json: &str) -> AppConfig {
        AppConfig::from_json_str(
            &format!(r#"{{"engine": {{"implementation": "mem"}}, "producer": {producer_json}}}"#),
            "signalbridge",
        )
        .unwrap()
    }

    #[tokio::test]
    async fn configuration_without_activity_is_rejected() {
        let err = SignalBridge::new(&app_config("{}")).await.err().unwrap();
        assert_eq!(err.kind(), &ProducerErrorKind::Configuration);
    }

    #[tokio::test]
    async fn unknown_engine_is_rejected() {
        let app_config = AppConfig::from_json_str(
            r#"{"engine": {"implementation": "carrier-pigeon"}, "producer": {"activityid": "review"}}"#,
            "signalbridge",
        )
        .unwrap();
        let err = SignalBridge::new(&app_config).await.err().unwrap();
        assert_eq!(err.kind(), &ProducerErrorKind::Configuration);
    }

    #[tokio::test]
    async fn document_is_processed() {
        let engine = InMemoryProcessEngine::new().await;
        let order = engine.start_process_instance(
            "orderProcess",
            Some("order-1"),
            "review",
            VariableMap::new(),
        );
        let runtime_service = Arc::new(engine.as_runtime_service());
        let bridge = SignalBridge::with_runtime_service(
            &app_config(r#"{"activityid": "review", "definitionkey": "orderProcess"}"#),
            &runtime_service,
        )
        .unwrap();
        let err = bridge.process_document("not json").await.unwrap_err();
        assert_eq!(err.kind(), &ProducerErrorKind::MalformedExchange);
        let execution = bridge
            .process_document(
                r#"{"body": {"approved": true}, "properties": {"CamundaBpmBusinessKey": "order-1"}}"#,
            )
            .await
            .unwrap();
        assert_eq!(execution.get_process_instance_id(), order.get_id());
        assert_eq!(
            engine
                .variables(order.get_id())
                .and_then(|variables| variables.get("approved").cloned()),
            Some(serde_json::json!(true))
        );
    }
}
