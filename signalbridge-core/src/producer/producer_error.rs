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

//! Producer errors.

use signalbridge_engine::model::EngineError;
use std::error::Error;
use std::fmt;

/// Cause of error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProducerErrorKind {
    /// Required parameter is missing or a parameter value is invalid.
    Configuration,
    /// The process instance could not be determined from the exchange.
    Resolution,
    /// No execution is waiting in the activity of the process instance.
    NotFound,
    /// The process engine reported a failure. See [ProducerError::engine_error].
    Client,
    /// The exchange document could not be parsed.
    MalformedExchange,
}

impl ProducerErrorKind {
    /// Create a new instance with an error message.
    pub fn error_with_msg<S: AsRef<str>>(self, msg: S) -> ProducerError {
        ProducerError {
            kind: self,
            msg: Some(msg.as_ref().to_string()),
            engine_error: None,
        }
    }

    /// Create a new instance without an error message.
    pub fn error(self) -> ProducerError {
        ProducerError {
            kind: self,
            msg: None,
            engine_error: None,
        }
    }
}

impl fmt::Display for ProducerErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

/** Producer error.

Create a new instance via [ProducerErrorKind] or from an [EngineError].
*/
#[derive(Debug)]
pub struct ProducerError {
    kind: ProducerErrorKind,
    msg: Option<String>,
    engine_error: Option<EngineError>,
}

impl ProducerError {
    /// Return the type of error.
    pub fn kind(&self) -> &ProducerErrorKind {
        &self.kind
    }

    /// Return the process engine failure behind a [ProducerErrorKind::Client]
    /// error.
    pub fn engine_error(&self) -> Option<&EngineError> {
        self.engine_error.as_ref()
    }
}

impl From<EngineError> for ProducerError {
    fn from(engine_error: EngineError) -> Self {
        Self {
            kind: ProducerErrorKind::Client,
            msg: None,
            engine_error: Some(engine_error),
        }
    }
}

impl fmt::Display for ProducerError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match (&self.msg, &self.engine_error) {
            (Some(msg), _) => write!(f, "{} {}", self.kind, msg),
            (None, Some(engine_error)) => write!(f, "{} {}", self.kind, engine_error),
            (None, None) => write!(f, "{}", self.kind),
        }
    }
}

impl AsRef<ProducerError> for ProducerError {
    fn as_ref(&self) -> &ProducerError {
        self
    }
}

impl Error for ProducerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.engine_error
            .as_ref()
            .map(|engine_error| engine_error as &(dyn Error + 'static))
    }
}
