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

//! Pure scheduling operations over a [`BucketMap`] snapshot.
//!
//! Both operations take an explicit snapshot and return new values;
//! neither mutates its input, so callers can invoke them from any
//! number of request handlers and install the result under their own
//! locking discipline.

use std::collections::HashSet;

use crate::buckets::BucketMap;
use crate::error::EngineError;
use crate::leitner::Difficulty;
use crate::leitner::is_due;
use crate::leitner::next_bucket;
use crate::types::card::Flashcard;

/// The set of cards due for review on the given simulated day.
pub fn due_today(buckets: &BucketMap, day: u64) -> HashSet<Flashcard> {
    let mut due = HashSet::new();
    for (bucket, cards) in buckets.iter() {
        if is_due(bucket, day) {
            due.extend(cards.iter().cloned());
        }
    }
    due
}

/// The result of applying feedback to a card.
#[derive(Debug)]
pub struct FeedbackOutcome {
    /// The new assignment, with the card re-filed.
    pub buckets: BucketMap,
    /// The bucket the card was in before the feedback.
    pub previous_bucket: u32,
    /// The bucket the card is in now.
    pub new_bucket: u32,
}

/// Re-file a card according to the answer difficulty.
///
/// Returns `NotFound` if the card is in no bucket and `InvalidState`
/// if the assignment files it in more than one; in both cases the
/// input snapshot is untouched. The total card count is the same
/// before and after.
pub fn apply_feedback(
    buckets: &BucketMap,
    card: &Flashcard,
    difficulty: Difficulty,
) -> Result<FeedbackOutcome, EngineError> {
    let holding = buckets.buckets_of(card);
    let previous_bucket = match holding.as_slice() {
        [] => return Err(EngineError::NotFound),
        [bucket] => *bucket,
        _ => {
            return Err(EngineError::InvalidState(format!(
                "card {:?} appears in buckets {holding:?}",
                card.front()
            )));
        }
    };
    let new_bucket = next_bucket(previous_bucket, difficulty);
    let mut updated = buckets.clone();
    updated.insert(new_bucket, card.clone());
    Ok(FeedbackOutcome {
        buckets: updated,
        previous_bucket,
        new_bucket,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    fn card(front: &str, back: &str) -> Flashcard {
        Flashcard::new(front, back, None, vec![])
    }

    fn sample_buckets() -> BucketMap {
        let mut buckets = BucketMap::empty();
        buckets.insert(0, card("a", "1"));
        buckets.insert(1, card("b", "2"));
        buckets.insert(2, card("c", "3"));
        buckets.insert(3, card("d", "4"));
        buckets
    }

    #[test]
    fn test_due_today_day_four() {
        // Day 4: buckets 0, 1, and 2 divide evenly; bucket 3 does not.
        let due = due_today(&sample_buckets(), 4);
        assert!(due.contains(&card("a", "1")));
        assert!(due.contains(&card("b", "2")));
        assert!(due.contains(&card("c", "3")));
        assert!(!due.contains(&card("d", "4")));
    }

    #[test]
    fn test_due_today_is_deterministic() {
        let buckets = sample_buckets();
        for day in 0..32 {
            assert_eq!(due_today(&buckets, day), due_today(&buckets, day));
        }
    }

    #[test]
    fn test_due_today_does_not_mutate_input() {
        let buckets = sample_buckets();
        let before = buckets.clone();
        let _ = due_today(&buckets, 6);
        assert_eq!(buckets, before);
    }

    #[test]
    fn test_easy_from_bucket_zero() {
        let buckets = sample_buckets();
        let outcome = apply_feedback(&buckets, &card("a", "1"), Difficulty::Easy).unwrap();
        assert_eq!(outcome.previous_bucket, 0);
        assert_eq!(outcome.new_bucket, 1);
        assert_eq!(outcome.buckets.bucket_of(&card("a", "1")), Some(1));
    }

    #[test]
    fn test_wrong_from_bucket_three() {
        let buckets = sample_buckets();
        let outcome = apply_feedback(&buckets, &card("d", "4"), Difficulty::Wrong).unwrap();
        assert_eq!(outcome.previous_bucket, 3);
        assert_eq!(outcome.new_bucket, 0);
        assert_eq!(outcome.buckets.bucket_of(&card("d", "4")), Some(0));
    }

    #[test]
    fn test_hard_from_bucket_one_floors_at_zero() {
        let buckets = sample_buckets();
        let outcome = apply_feedback(&buckets, &card("b", "2"), Difficulty::Hard).unwrap();
        assert_eq!(outcome.previous_bucket, 1);
        assert_eq!(outcome.new_bucket, 0);
    }

    #[test]
    fn test_feedback_conserves_card_count() {
        let buckets = sample_buckets();
        let count = buckets.card_count();
        for (target, difficulty) in [
            (card("a", "1"), Difficulty::Wrong),
            (card("b", "2"), Difficulty::Hard),
            (card("c", "3"), Difficulty::Easy),
            (card("d", "4"), Difficulty::Easy),
        ] {
            let outcome = apply_feedback(&buckets, &target, difficulty).unwrap();
            assert_eq!(outcome.buckets.card_count(), count);
            outcome.buckets.validate().unwrap();
        }
    }

    #[test]
    fn test_feedback_leaves_other_cards_alone() {
        let buckets = sample_buckets();
        let outcome = apply_feedback(&buckets, &card("c", "3"), Difficulty::Easy).unwrap();
        assert_eq!(outcome.buckets.bucket_of(&card("a", "1")), Some(0));
        assert_eq!(outcome.buckets.bucket_of(&card("b", "2")), Some(1));
        assert_eq!(outcome.buckets.bucket_of(&card("d", "4")), Some(3));
    }

    #[test]
    fn test_feedback_on_absent_card_is_not_found() {
        let buckets = sample_buckets();
        let before = buckets.clone();
        let err = apply_feedback(&buckets, &card("x", "y"), Difficulty::Easy).unwrap_err();
        assert_eq!(err, EngineError::NotFound);
        // No partial mutation.
        assert_eq!(buckets, before);
    }

    #[test]
    fn test_feedback_on_duplicated_card_is_invalid_state() {
        let mut raw: BTreeMap<u32, HashSet<Flashcard>> = BTreeMap::new();
        raw.entry(0).or_default().insert(card("a", "1"));
        raw.entry(2).or_default().insert(card("a", "1"));
        let corrupt = BucketMap::from_parts_unchecked(raw);
        let err = apply_feedback(&corrupt, &card("a", "1"), Difficulty::Easy).unwrap_err();
        assert!(matches!(err, EngineError::InvalidState(_)));
    }
}
