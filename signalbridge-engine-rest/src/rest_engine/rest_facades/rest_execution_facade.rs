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

//! REST API implementation of [ExecutionFacade].

use super::single_result;
use crate::RestProcessEngine;
use crate::rest_engine::rest_dto::ExecutionDto;
use crate::rest_engine::rest_dto::SignalDto;
use signalbridge_engine::engine::facades::ExecutionFacade;
use signalbridge_engine::model::EngineError;
use signalbridge_engine::model::Execution;
use signalbridge_engine::model::ExecutionQuery;
use std::sync::Arc;

/// REST API implementation of [ExecutionFacade].
pub struct RestExecutionFacade {
    rest_engine: Arc<RestProcessEngine>,
}

impl RestExecutionFacade {
    /// Return a new instance.
    pub fn new(rest_engine: &Arc<RestProcessEngine>) -> Self {
        Self {
            rest_engine: Arc::clone(rest_engine),
        }
    }

    /// Query parameters of `GET /execution` for the criteria that are set.
    fn query_params(query: &ExecutionQuery) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(process_instance_id) = query.get_process_instance_id() {
            params.push(("processInstanceId", process_instance_id.to_owned()));
        }
        if let Some(activity_id) = query.get_activity_id() {
            params.push(("activityId", activity_id.to_owned()));
        }
        if let Some(process_definition_key) = query.get_process_definition_key() {
            params.push(("processDefinitionKey", process_definition_key.to_owned()));
        }
        params
    }

    /// The engine does not report the waiting activity, so the queried one is
    /// carried over.
    fn to_execution(dto: ExecutionDto, query: &ExecutionQuery) -> Execution {
        Execution::new(
            &dto.id,
            &dto.process_instance_id,
            query.get_activity_id(),
            query.get_process_definition_key(),
        )
    }
}

#[async_trait::async_trait]
impl ExecutionFacade for RestExecutionFacade {
    async fn single_execution(
        &self,
        query: &ExecutionQuery,
    ) -> Result<Option<Execution>, EngineError> {
        let dtos: Vec<ExecutionDto> = self
            .rest_engine
            .get_json(&["execution"], &Self::query_params(query))
            .await?;
        let executions = dtos
            .into_iter()
            .filter(|dto| !dto.ended)
            .map(|dto| Self::to_execution(dto, query))
            .collect();
        single_result(executions, "executions")
    }

    async fn signal(&self, execution_id: &str) -> Result<(), EngineError> {
        self.rest_engine
            .post_json(&["execution", execution_id, "signal"], &SignalDto::default())
            .await
    }
}
