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

//! The Leitner scheduling rules.
//!
//! Cards live in integer-indexed buckets. Bucket 0 is reviewed every
//! day; each higher bucket doubles the review interval. Answering
//! wrong resets a card to bucket 0, answering hard moves it one bucket
//! down, answering easy moves it one bucket up.

use serde::Deserialize;
use serde::Serialize;

use crate::error::EngineError;

/// How well the learner answered a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Wrong,
    Hard,
    Easy,
}

impl Difficulty {
    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Wrong => "wrong",
            Difficulty::Hard => "hard",
            Difficulty::Easy => "easy",
        }
    }

    /// Parse a difficulty from the wire, case-insensitively.
    ///
    /// This is the boundary check: anything outside the enumerated set
    /// is rejected here, before it reaches the engine.
    pub fn parse(value: &str) -> Result<Self, EngineError> {
        match value.to_ascii_lowercase().as_str() {
            "wrong" => Ok(Difficulty::Wrong),
            "hard" => Ok(Difficulty::Hard),
            "easy" => Ok(Difficulty::Easy),
            _ => Err(EngineError::InvalidDifficulty(value.to_string())),
        }
    }
}

/// Whether a card in the given bucket is due on the given day.
///
/// A card in bucket `b` is due iff `day % 2^b == 0`, in exact integer
/// arithmetic. Buckets of 64 and up have an interval longer than any
/// representable day, so they are due only on day 0.
pub fn is_due(bucket: u32, day: u64) -> bool {
    match 1u64.checked_shl(bucket) {
        Some(interval) => day % interval == 0,
        None => day == 0,
    }
}

/// The bucket a card moves to after being answered.
pub fn next_bucket(current: u32, difficulty: Difficulty) -> u32 {
    match difficulty {
        Difficulty::Wrong => 0,
        Difficulty::Hard => current.saturating_sub(1),
        Difficulty::Easy => current + 1,
    }
}
