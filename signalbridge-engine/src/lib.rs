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

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![doc = include_str!("../README.md")]

pub mod engine;
pub mod model {
    //! Process engine runtime objects.

    mod engine_error;
    mod execution;
    mod execution_query;
    mod process_instance;
    mod process_instance_query;

    pub use self::engine_error::EngineError;
    pub use self::engine_error::EngineErrorKind;
    pub use self::execution::Execution;
    pub use self::execution_query::ExecutionQuery;
    pub use self::process_instance::ProcessInstance;
    pub use self::process_instance_query::ProcessInstanceQuery;

    /// Process variables by name.
    pub type VariableMap = std::collections::HashMap<String, serde_json::Value>;
}
