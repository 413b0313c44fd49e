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

//! Process engine runtime service abstraction

pub mod facades;

use self::facades::*;
use std::sync::Arc;

/// The process engine runtime service.
///
/// Implementation logic is abstracted by [RuntimeServiceFacades] for related
/// operations.
pub struct RuntimeService {
    facades: Arc<dyn RuntimeServiceFacades>,
}

impl RuntimeService {
    /// Return a new instance.
    pub fn new(runtime_service_facades: Arc<dyn RuntimeServiceFacades>) -> Self {
        Self {
            facades: runtime_service_facades,
        }
    }
}

impl RuntimeServiceFacades for RuntimeService {
    fn execution_facade(&self) -> &dyn ExecutionFacade {
        self.facades.execution_facade()
    }

    fn process_instance_facade(&self) -> &dyn ProcessInstanceFacade {
        self.facades.process_instance_facade()
    }

    fn variable_facade(&self) -> &dyn VariableFacade {
        self.facades.variable_facade()
    }
}
