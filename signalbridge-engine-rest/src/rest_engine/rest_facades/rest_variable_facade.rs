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

//! REST API implementation of [VariableFacade].

use crate::RestProcessEngine;
use crate::rest_engine::rest_dto::VariableModificationsDto;
use signalbridge_engine::engine::facades::VariableFacade;
use signalbridge_engine::model::EngineError;
use signalbridge_engine::model::Execution;
use signalbridge_engine::model::VariableMap;
use std::sync::Arc;

/// REST API implementation of [VariableFacade].
pub struct RestVariableFacade {
    rest_engine: Arc<RestProcessEngine>,
}

impl RestVariableFacade {
    /// Return a new instance.
    pub fn new(rest_engine: &Arc<RestProcessEngine>) -> Self {
        Self {
            rest_engine: Arc::clone(rest_engine),
        }
    }
}

#[async_trait::async_trait]
impl VariableFacade for RestVariableFacade {
    async fn set_variables(
        &self,
        execution: &Execution,
        variables: &VariableMap,
    ) -> Result<(), EngineError> {
        // Variables of the process instance survive the signaled execution.
        self.rest_engine
            .post_json(
                &[
                    "process-instance",
                    execution.get_process_instance_id(),
                    "variables",
                ],
                &VariableModificationsDto::from_variables(variables),
            )
            .await
    }
}
