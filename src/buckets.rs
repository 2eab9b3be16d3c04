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
use std::collections::HashSet;

use crate::error::EngineError;
use crate::types::card::Flashcard;

/// The assignment of cards to review buckets.
///
/// Invariant: a card appears in at most one bucket. Entries for
/// emptied buckets are dropped rather than kept around.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BucketMap {
    buckets: BTreeMap<u32, HashSet<Flashcard>>,
}

impl BucketMap {
    pub fn empty() -> Self {
        Self {
            buckets: BTreeMap::new(),
        }
    }

    /// Build a map from raw bucket contents, dropping empty entries.
    ///
    /// Rejects contents that file a card in more than one bucket.
    pub fn from_parts(buckets: BTreeMap<u32, HashSet<Flashcard>>) -> Result<Self, EngineError> {
        let map = Self {
            buckets: buckets
                .into_iter()
                .filter(|(_, cards)| !cards.is_empty())
                .collect(),
        };
        map.validate()?;
        Ok(map)
    }

    #[cfg(test)]
    pub fn from_parts_unchecked(buckets: BTreeMap<u32, HashSet<Flashcard>>) -> Self {
        Self { buckets }
    }

    /// File a card into the given bucket, removing it from any bucket
    /// it was previously in.
    pub fn insert(&mut self, bucket: u32, card: Flashcard) {
        self.remove(&card);
        self.buckets.entry(bucket).or_default().insert(card);
    }

    /// Remove a card from whichever bucket holds it.
    pub fn remove(&mut self, card: &Flashcard) {
        let mut emptied = None;
        for (bucket, cards) in self.buckets.iter_mut() {
            if cards.remove(card) {
                if cards.is_empty() {
                    emptied = Some(*bucket);
                }
                break;
            }
        }
        if let Some(bucket) = emptied {
            self.buckets.remove(&bucket);
        }
    }

    /// The buckets containing a card equal to the given one. Under the
    /// invariant this has at most one element; `validate` and
    /// `apply_feedback` use the full list to detect violations.
    pub fn buckets_of(&self, card: &Flashcard) -> Vec<u32> {
        self.buckets
            .iter()
            .filter(|(_, cards)| cards.contains(card))
            .map(|(bucket, _)| *bucket)
            .collect()
    }

    /// The single bucket holding a card, if any.
    pub fn bucket_of(&self, card: &Flashcard) -> Option<u32> {
        self.buckets_of(card).into_iter().next()
    }

    /// The stored card matching the given (front, back) pair.
    pub fn find_card(&self, front: &str, back: &str) -> Option<&Flashcard> {
        self.buckets
            .values()
            .flat_map(|cards| cards.iter())
            .find(|card| card.matches(front, back))
    }

    /// The total number of cards across all buckets.
    pub fn card_count(&self) -> usize {
        self.buckets.values().map(|cards| cards.len()).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, &HashSet<Flashcard>)> {
        self.buckets.iter().map(|(bucket, cards)| (*bucket, cards))
    }

    /// Check that no card is filed in more than one bucket.
    pub fn validate(&self) -> Result<(), EngineError> {
        let mut seen: HashSet<&Flashcard> = HashSet::new();
        for cards in self.buckets.values() {
            for card in cards {
                if !seen.insert(card) {
                    return Err(EngineError::InvalidState(format!(
                        "card {:?} appears in more than one bucket",
                        card.front()
                    )));
                }
            }
        }
        Ok(())
    }
}
