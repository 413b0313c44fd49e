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

//! Runtime service facades.

mod execution_facade;
mod process_instance_facade;
mod variable_facade;

pub use self::execution_facade::*;
pub use self::process_instance_facade::*;
pub use self::variable_facade::*;

/// Provide access to runtime service facades.
pub trait RuntimeServiceFacades: Send + Sync {
    /// See [ExecutionFacade].
    fn execution_facade(&self) -> &dyn ExecutionFacade;

    /// See [ProcessInstanceFacade].
    fn process_instance_facade(&self) -> &dyn ProcessInstanceFacade;

    /// See [VariableFacade].
    fn variable_facade(&self) -> &dyn VariableFacade;
}
