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

//! Signaling of waiting process executions.

mod producer_error;
mod producer_parameters;
mod signal_process_producer;

pub use self::producer_error::ProducerError;
pub use self::producer_error::ProducerErrorKind;
pub use self::producer_parameters::ProducerParameters;
pub use self::signal_process_producer::SignalProcessProducer;
