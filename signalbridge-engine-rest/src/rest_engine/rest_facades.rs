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

//! REST API specific runtime service code.

mod rest_execution_facade;
mod rest_process_instance_facade;
mod rest_variable_facade;

pub use self::rest_execution_facade::*;
pub use self::rest_process_instance_facade::*;
pub use self::rest_variable_facade::*;
use super::RestProcessEngine;
use signalbridge_engine::engine::facades::*;
use signalbridge_engine::model::EngineError;
use signalbridge_engine::model::EngineErrorKind;
use std::sync::Arc;

/// REST API specific runtime service code.
pub struct RestRuntimeServiceFacades {
    execution_facade: RestExecutionFacade,
    process_instance_facade: RestProcessInstanceFacade,
    variable_facade: RestVariableFacade,
}

impl RestRuntimeServiceFacades {
    /// Return a new instance.
    pub fn new(rest_engine: &Arc<RestProcessEngine>) -> Self {
        Self {
            execution_facade: RestExecutionFacade::new(rest_engine),
            process_instance_facade: RestProcessInstanceFacade::new(rest_engine),
            variable_facade: RestVariableFacade::new(rest_engine),
        }
    }
}

impl RuntimeServiceFacades for RestRuntimeServiceFacades {
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

/// Return the only item or fail when the engine returned several.
fn single_result<T>(mut results: Vec<T>, what: &str) -> Result<Option<T>, EngineError> {
    match results.len() {
        0 => Ok(None),
        1 => Ok(results.pop()),
        count => Err(EngineErrorKind::NonUniqueResult
            .error_with_msg(format!("Query for {what} returned {count} results."))),
    }
}
