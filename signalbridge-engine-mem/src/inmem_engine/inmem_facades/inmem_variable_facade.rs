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

//! Ephemeral in-memory implementation of [VariableFacade].

use crate::InMemoryProcessEngine;
use signalbridge_engine::engine::facades::VariableFacade;
use signalbridge_engine::model::EngineError;
use signalbridge_engine::model::Execution;
use signalbridge_engine::model::VariableMap;
use std::sync::Arc;

/// Ephemeral in-memory implementation of [VariableFacade].
pub struct InMemVariableFacade {
    inmem_engine: Arc<InMemoryProcessEngine>,
}

impl InMemVariableFacade {
    /// Return a new instance.
    pub fn new(inmem_engine: &Arc<InMemoryProcessEngine>) -> Self {
        Self {
            inmem_engine: Arc::clone(inmem_engine),
        }
    }
}

#[async_trait::async_trait]
impl VariableFacade for InMemVariableFacade {
    async fn set_variables(
        &self,
        execution: &Execution,
        variables: &VariableMap,
    ) -> Result<(), EngineError> {
        self.inmem_engine.set_variables(execution.get_id(), variables)
    }
}
