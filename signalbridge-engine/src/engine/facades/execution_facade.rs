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

//! Runtime service facade for operations on executions.

use crate::model::EngineError;
use crate::model::Execution;
use crate::model::ExecutionQuery;

/// Runtime service facade for operations on executions.
#[async_trait::async_trait]
pub trait ExecutionFacade: Send + Sync {
    /// Return the single execution matching all criteria set in the query.
    ///
    /// Returns `Ok(None)` when nothing matches and an error of kind
    /// [crate::model::EngineErrorKind::NonUniqueResult] when more than one
    /// execution matches.
    async fn single_execution(&self, query: &ExecutionQuery)
    -> Result<Option<Execution>, EngineError>;

    /// Resume the execution waiting in its current activity.
    async fn signal(&self, execution_id: &str) -> Result<(), EngineError>;
}
