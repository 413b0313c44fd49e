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

//! Record of a state changing runtime service operation.

use signalbridge_engine::model::VariableMap;

/// Record of a state changing runtime service operation.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineOperation {
    /// Variables were set through an execution.
    SetVariables {
        /// Target execution.
        execution_id: String,
        /// The variables exactly as provided by the caller.
        variables: VariableMap,
    },
    /// A waiting execution was resumed.
    Signal {
        /// Target execution.
        execution_id: String,
    },
}

impl EngineOperation {
    /// Return the identifier of the execution the operation targeted.
    pub fn execution_id(&self) -> &str {
        match self {
            Self::SetVariables { execution_id, .. } => execution_id,
            Self::Signal { execution_id } => execution_id,
        }
    }
}
