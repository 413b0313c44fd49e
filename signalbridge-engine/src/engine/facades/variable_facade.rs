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

//! Runtime service facade for process variables.

use crate::model::EngineError;
use crate::model::Execution;
use crate::model::VariableMap;

/// Runtime service facade for process variables.
#[async_trait::async_trait]
pub trait VariableFacade: Send + Sync {
    /// Set variables through the execution.
    ///
    /// Variables are written to the process instance of the execution, so
    /// they outlive the execution once it is signaled. Existing values are
    /// overwritten.
    async fn set_variables(
        &self,
        execution: &Execution,
        variables: &VariableMap,
    ) -> Result<(), EngineError>;
}
