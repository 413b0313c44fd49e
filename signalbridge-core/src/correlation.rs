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

//! Locating the process instance an exchange is meant for.

use crate::exchange::BUSINESS_KEY_PROPERTY;
use crate::exchange::CORRELATION_KEY_PROPERTY;
use crate::exchange::Exchange;
use crate::exchange::PROCESS_INSTANCE_ID_PROPERTY;
use crate::producer::ProducerError;
use crate::producer::ProducerErrorKind;
use signalbridge_engine::engine::RuntimeService;
use signalbridge_engine::engine::facades::RuntimeServiceFacades;
use signalbridge_engine::model::ProcessInstanceQuery;
use std::sync::Arc;

/** Resolve the process instance identifier of an exchange.

The exchange properties are tried in order:

1. `CamundaBpmProcessInstanceId` is used as is.
2. `CamundaBpmBusinessKey` is looked up among the running instances.
3. `CamundaBpmCorrelationKey` is matched against the value of the configured
   correlation key variable.
*/
pub struct ProcessInstanceResolver {
    runtime_service: Arc<RuntimeService>,
    correlation_key_name: Option<String>,
}

impl ProcessInstanceResolver {
    /// Return a new instance.
    ///
    /// Without `correlation_key_name` the correlation key property is ignored.
    pub fn new(runtime_service: &Arc<RuntimeService>, correlation_key_name: Option<&str>) -> Self {
        Self {
            runtime_service: Arc::clone(runtime_service),
            correlation_key_name: correlation_key_name.map(str::to_owned),
        }
    }

    /// Return the identifier of the process instance the exchange targets.
    ///
    /// The optional `process_definition_key` restricts instance lookups.
    pub async fn find_process_instance_id(
        &self,
        exchange: &Exchange,
        process_definition_key: Option<&str>,
    ) -> Result<String, ProducerError> {
        if let Some(process_instance_id) = exchange.property_as_string(PROCESS_INSTANCE_ID_PROPERTY)
        {
            return Ok(process_instance_id);
        }
        if let Some(business_key) = exchange.property_as_string(BUSINESS_KEY_PROPERTY) {
            let query = ProcessInstanceQuery::default()
                .business_key(&business_key)
                .process_definition_key(process_definition_key);
            return self.single_process_instance_id(&query).await?.ok_or_else(|| {
                ProducerErrorKind::Resolution.error_with_msg(format!(
                    "Could not find process instance with business key '{business_key}'."
                ))
            });
        }
        if let Some(correlation_key_name) = &self.correlation_key_name
            && let Some(correlation_key) = exchange.get_properties().get(CORRELATION_KEY_PROPERTY)
        {
            let query = ProcessInstanceQuery::default()
                .variable_equals(correlation_key_name, correlation_key.to_owned())
                .process_definition_key(process_definition_key);
            return self.single_process_instance_id(&query).await?.ok_or_else(|| {
                ProducerErrorKind::Resolution.error_with_msg(format!(
                    "Could not find process instance with '{correlation_key_name}' = {correlation_key}."
                ))
            });
        }
        Err(ProducerErrorKind::Resolution.error_with_msg(format!(
            "Missing exchange property '{PROCESS_INSTANCE_ID_PROPERTY}', '{BUSINESS_KEY_PROPERTY}' or '{CORRELATION_KEY_PROPERTY}'."
        )))
    }

    async fn single_process_instance_id(
        &self,
        query: &ProcessInstanceQuery,
    ) -> Result<Option<String>, ProducerError> {
        if log::log_enabled!(log::Level::Trace) {
            log::trace!("Looking up process instance: {query:?}");
        }
        Ok(self
            .runtime_service
            .process_instance_facade()
            .single_process_instance(query)
            .await?
            .map(|process_instance| process_instance.get_id().to_owned()))
    }
}
