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

//! REST API implementation of [ProcessInstanceFacade].

use super::single_result;
use crate::RestProcessEngine;
use crate::rest_engine::rest_dto::ProcessInstanceDto;
use signalbridge_engine::engine::facades::ProcessInstanceFacade;
use signalbridge_engine::model::EngineError;
use signalbridge_engine::model::ProcessInstance;
use signalbridge_engine::model::ProcessInstanceQuery;
use std::sync::Arc;

/// REST API implementation of [ProcessInstanceFacade].
pub struct RestProcessInstanceFacade {
    rest_engine: Arc<RestProcessEngine>,
}

impl RestProcessInstanceFacade {
    /// Return a new instance.
    pub fn new(rest_engine: &Arc<RestProcessEngine>) -> Self {
        Self {
            rest_engine: Arc::clone(rest_engine),
        }
    }

    /// Query parameters of `GET /process-instance` for the criteria that are
    /// set.
    ///
    /// Variable criteria use the `name_eq_value` notation of the API, so names
    /// and values containing `_eq_` or `,` can not be expressed.
    fn query_params(query: &ProcessInstanceQuery) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(business_key) = query.get_business_key() {
            params.push(("businessKey", business_key.to_owned()));
        }
        if let Some(process_definition_key) = query.get_process_definition_key() {
            params.push(("processDefinitionKey", process_definition_key.to_owned()));
        }
        if let Some((name, value)) = query.get_variable_equals() {
            let value = match value {
                serde_json::Value::String(value) => value.to_owned(),
                other => other.to_string(),
            };
            params.push(("variables", format!("{name}_eq_{value}")));
        }
        params
    }
}

#[async_trait::async_trait]
impl ProcessInstanceFacade for RestProcessInstanceFacade {
    async fn single_process_instance(
        &self,
        query: &ProcessInstanceQuery,
    ) -> Result<Option<ProcessInstance>, EngineError> {
        let dtos: Vec<ProcessInstanceDto> = self
            .rest_engine
            .get_json(&["process-instance"], &Self::query_params(query))
            .await?;
        let process_instances = dtos
            .into_iter()
            .filter(|dto| !dto.ended)
            .map(|dto| {
                ProcessInstance::new(
                    &dto.id,
                    dto.business_key.as_deref(),
                    query.get_process_definition_key(),
                )
            })
            .collect();
        single_result(process_instances, "process instances")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn business_key_and_definition_key_params() {
        let query = ProcessInstanceQuery::default()
            .business_key("order-1")
            .process_definition_key(Some("orderProcess"));
        assert_eq!(
            RestProcessInstanceFacade::query_params(&query),
            vec![
                ("businessKey", "order-1".to_string()),
                ("processDefinitionKey", "orderProcess".to_string()),
            ]
        );
    }

    #[test]
    fn variable_criterion_uses_eq_notation() {
        let query = ProcessInstanceQuery::default().variable_equals("orderNo", "A-1".into());
        assert_eq!(
            RestProcessInstanceFacade::query_params(&query),
            vec![("variables", "orderNo_eq_A-1".to_string())]
        );
        let query = ProcessInstanceQuery::default().variable_equals("amount", 12.into());
        assert_eq!(
            RestProcessInstanceFacade::query_params(&query),
            vec![("variables", "amount_eq_12".to_string())]
        );
    }
}
