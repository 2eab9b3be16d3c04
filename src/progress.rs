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

use std::collections::BTreeMap;

use serde::Serialize;

use crate::buckets::BucketMap;
use crate::leitner::Difficulty;
use crate::types::record::PracticeRecord;

/// A read-only summary of the learning state.
#[derive(Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressStats {
    pub total_cards: usize,
    pub cards_per_bucket: BTreeMap<u32, usize>,
    pub wrong_count: usize,
    pub hard_count: usize,
    pub easy_count: usize,
}

/// Aggregate the current assignment and the practice history.
///
/// Pure and deterministic: repeated calls with the same inputs produce
/// the same stats, and neither input is mutated.
pub fn summarize(buckets: &BucketMap, history: &[PracticeRecord]) -> ProgressStats {
    let cards_per_bucket: BTreeMap<u32, usize> = buckets
        .iter()
        .map(|(bucket, cards)| (bucket, cards.len()))
        .collect();
    let mut wrong_count = 0;
    let mut hard_count = 0;
    let mut easy_count = 0;
    for record in history {
        match record.difficulty {
            Difficulty::Wrong => wrong_count += 1,
            Difficulty::Hard => hard_count += 1,
            Difficulty::Easy => easy_count += 1,
        }
    }
    ProgressStats {
        total_cards: buckets.card_count(),
        cards_per_bucket,
        wrong_count,
        hard_count,
        easy_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::card::Flashcard;

    fn record(difficulty: Difficulty) -> PracticeRecord {
        PracticeRecord {
            card_front: "a".to_string(),
            card_back: "1".to_string(),
            timestamp: 0,
            difficulty,
            previous_bucket: 0,
            new_bucket: 1,
        }
    }

    #[test]
    fn test_summarize() {
        let mut buckets = BucketMap::empty();
        buckets.insert(0, Flashcard::new("a", "1", None, vec![]));
        buckets.insert(0, Flashcard::new("b", "2", None, vec![]));
        buckets.insert(2, Flashcard::new("c", "3", None, vec![]));
        let history = vec![
            record(Difficulty::Easy),
            record(Difficulty::Easy),
            record(Difficulty::Hard),
            record(Difficulty::Wrong),
        ];
        let stats = summarize(&buckets, &history);
        assert_eq!(stats.total_cards, 3);
        assert_eq!(stats.cards_per_bucket.get(&0), Some(&2));
        assert_eq!(stats.cards_per_bucket.get(&2), Some(&1));
        assert_eq!(stats.wrong_count, 1);
        assert_eq!(stats.hard_count, 1);
        assert_eq!(stats.easy_count, 2);
    }

    #[test]
    fn test_summarize_is_idempotent() {
        let mut buckets = BucketMap::empty();
        buckets.insert(1, Flashcard::new("a", "1", None, vec![]));
        let history = vec![record(Difficulty::Hard)];
        assert_eq!(summarize(&buckets, &history), summarize(&buckets, &history));
    }

    #[test]
    fn test_summarize_empty_state() {
        let stats = summarize(&BucketMap::empty(), &[]);
        assert_eq!(stats.total_cards, 0);
        assert!(stats.cards_per_bucket.is_empty());
        assert_eq!(stats.wrong_count, 0);
        assert_eq!(stats.hard_count, 0);
        assert_eq!(stats.easy_count, 0);
    }

    #[test]
    fn test_stats_serialize_camel_case() {
        let stats = summarize(&BucketMap::empty(), &[]);
        let json = serde_json::to_string(&stats).unwrap();
        assert_eq!(
            json,
            r#"{"totalCards":0,"cardsPerBucket":{},"wrongCount":0,"hardCount":0,"easyCount":0}"#
        );
    }
}
