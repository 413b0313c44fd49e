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

//! Process engine errors.

use std::error::Error;
use std::fmt;

/// Cause of error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineErrorKind {
    /// General failure. See message for details.
    Unspecified,
    /// The referenced execution or process instance does not exist.
    NotFound,
    /// A query expected to return at most one result matched several.
    NonUniqueResult,
    /// The engine could not be reached.
    Unreachable,
    /// The engine rejected the request.
    ClientFailure,
    /// The engine response could not be understood.
    MalformedResponse,
}

impl EngineErrorKind {
    /// Create a new instance with an error message.
    pub fn error_with_msg<S: AsRef<str>>(self, msg: S) -> EngineError {
        EngineError {
            kind: self,
            msg: Some(msg.as_ref().to_string()),
        }
    }

    /// Create a new instance without an error message.
    pub fn error(self) -> EngineError {
        EngineError {
            kind: self,
            msg: None,
        }
    }
}

impl fmt::Display for EngineErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

/** Process engine error.

Create a new instance via [EngineErrorKind].
*/
#[derive(Debug, Clone)]
pub struct EngineError {
    kind: EngineErrorKind,
    msg: Option<String>,
}

impl EngineError {
    /// Return the type of error.
    pub fn kind(&self) -> &EngineErrorKind {
        &self.kind
    }

    /// Return the error message if any.
    pub fn msg(&self) -> Option<&str> {
        self.msg.as_deref()
    }
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if let Some(msg) = &self.msg {
            write!(f, "{} {}", self.kind, msg)
        } else {
            write!(f, "{}", self.kind)
        }
    }
}

impl AsRef<EngineError> for EngineError {
    fn as_ref(&self) -> &EngineError {
        self
    }
}

impl Error for EngineError {}
