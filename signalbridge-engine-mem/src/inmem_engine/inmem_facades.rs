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

//! Ephemeral in-memory specific runtime service code.

mod inmem_execution_facade;
mod inmem_process_instance_facade;
mod inmem_variable_facade;

pub use self::inmem_execution_facade::*;
pub use self::inmem_process_instance_facade::*;
pub use self::inmem_variable_facade::*;
use super::InMemoryProcessEngine;
use signalbridge_engine::engine::facades::*;
use std::sync::Arc;

/// Ephemeral in-memory specific runtime service code.
pub struct InMemRuntimeServiceFacades {
    execution_facade: InMemExecutionFacade,
    process_instance_facade: InMemProcessInstanceFacade,
    variable_facade: InMemVariableFacade,
}

impl InMemRuntimeServiceFacades {
    /// Return a new instance.
    pub fn new(inmem_engine: &Arc<InMemoryProcessEngine>) -> Self {
        Self {
            execution_facade: InMemExecutionFacade::new(inmem_engine),
            process_instance_facade: InMemProcessInstanceFacade::new(inmem_engine),
            variable_facade: InMemVariableFacade::new(inmem_engine),
        }
    }
}

impl RuntimeServiceFacades for InMemRuntimeServiceFacades {
    fn execution_facade(&self) -> &dyn ExecutionFacade {
        &self.execution_facade
    }

    fn process_instance_facade(&self) -> &dyn ProcessInstanceFacade {
        &self.process_instance_facade
    }

    fn variable_facade(&self) -> &dyn VariableFacade {
        &self.variable_facade
    }
}
