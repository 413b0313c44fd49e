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

//! Ephemeral in-memory implementation of [ProcessInstanceFacade].

use crate::InMemoryProcessEngine;
use crate::inmem_engine::single_result;
use signalbridge_engine::engine::facades::ProcessInstanceFacade;
use signalbridge_engine::model::EngineError;
use signalbridge_engine::model::ProcessInstance;
use signalbridge_engine::model::ProcessInstanceQuery;
use std::sync::Arc;

/// Ephemeral in-memory implementation of [ProcessInstanceFacade].
pub struct InMemProcessInstanceFacade {
    inmem_engine: Arc<InMemoryProcessEngine>,
}

impl InMemProcessInstanceFacade {
    /// Return a new instance.
    pub fn new(inmem_engine: &Arc<InMemoryProcessEngine>) -> Self {
        Self {
            inmem_engine: Arc::clone(inmem_engine),
        }
    }
}

#[async_trait::async_trait]
impl ProcessInstanceFacade for InMemProcessInstanceFacade {
    async fn single_process_instance(
        &self,
        query: &ProcessInstanceQuery,
    ) -> Result<Option<ProcessInstance>, EngineError> {
        let matches = self
            .inmem_engine
            .process_instances
            .iter()
            .filter(|entry| entry.value().matches(query))
            .map(|entry| entry.value().process_instance.clone())
            .collect::<Vec<_>>();
        single_result(matches, "process instances")
    }
}
