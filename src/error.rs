// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::fmt::Display;
use std::fmt::Formatter;

/// A generic error with a human-readable message.
#[derive(Debug)]
pub struct ErrorReport {
    message: String,
}

impl ErrorReport {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Display for ErrorReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "error: {}", self.message)
    }
}

impl<E: std::error::Error> From<E> for ErrorReport {
    fn from(e: E) -> Self {
        Self::new(e.to_string())
    }
}

pub type Fallible<T> = Result<T, ErrorReport>;

pub fn fail<T>(message: &str) -> Fallible<T> {
    Err(ErrorReport::new(message))
}

/// Errors the scheduling engine can report to its callers.
///
/// The HTTP layer maps these to status codes; the engine itself never
/// touches the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// The referenced card is not filed in any bucket.
    NotFound,
    /// The difficulty value is outside the enumerated set.
    InvalidDifficulty(String),
    /// The assignment files a card in more than one bucket.
    InvalidState(String),
}

impl Display for EngineError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineError::NotFound => write!(f, "card not found in any bucket"),
            EngineError::InvalidDifficulty(value) => {
                write!(f, "invalid difficulty: {value:?}")
            }
            EngineError::InvalidState(message) => {
                write!(f, "invalid bucket state: {message}")
            }
        }
    }
}

impl std::error::Error for EngineError {}
