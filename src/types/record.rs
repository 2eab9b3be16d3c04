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

use serde::Deserialize;
use serde::Serialize;

use crate::leitner::Difficulty;

/// One past feedback event. Append-only: records are created when
/// feedback is applied and never mutated or deleted afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PracticeRecord {
    pub card_front: String,
    pub card_back: String,
    /// Wall-clock time of the event, in milliseconds since the epoch.
    pub timestamp: i64,
    pub difficulty: Difficulty,
    pub previous_bucket: u32,
    pub new_bucket: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_serializes_camel_case() {
        let record = PracticeRecord {
            card_front: "front1".to_string(),
            card_back: "back1".to_string(),
            timestamp: 123456789,
            difficulty: Difficulty::Easy,
            previous_bucket: 0,
            new_bucket: 1,
        };
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            json,
            r#"{"cardFront":"front1","cardBack":"back1","timestamp":123456789,"difficulty":"easy","previousBucket":0,"newBucket":1}"#
        );
        let back: PracticeRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
