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

//! Runtime service facade for process instance lookups.

use crate::model::EngineError;
use crate::model::ProcessInstance;
use crate::model::ProcessInstanceQuery;

/// Runtime service facade for process instance lookups.
#[async_trait::async_trait]
pub trait ProcessInstanceFacade: Send + Sync {
    /// Return the single process instance matching all criteria set in the
    /// query.
    ///
    /// Returns `Ok(None)` when nothing matches and an error of kind
    /// [crate::model::EngineErrorKind::NonUniqueResult] when more than one
    /// instance matches.
    async fn single_process_instance(
        &self,
        query: &ProcessInstanceQuery,
    ) -> Result<Option<ProcessInstance>, EngineError>;
}
