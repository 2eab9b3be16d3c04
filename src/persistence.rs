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
use std::path::Path;

use serde::Deserialize;
use serde::Serialize;

use crate::buckets::BucketMap;
use crate::error::ErrorReport;
use crate::error::Fallible;
use crate::types::card::Flashcard;
use crate::types::record::PracticeRecord;

/// The on-disk shape of the whole learning state.
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SerializedState {
    pub buckets: BTreeMap<u32, Vec<Flashcard>>,
    pub history: Vec<PracticeRecord>,
    pub current_day: u64,
}

/// A deserialized learning state.
#[derive(Debug)]
pub struct LoadedState {
    pub buckets: BucketMap,
    pub history: Vec<PracticeRecord>,
    pub current_day: u64,
}

pub fn serialize_state(
    buckets: &BucketMap,
    history: &[PracticeRecord],
    current_day: u64,
) -> SerializedState {
    let buckets: BTreeMap<u32, Vec<Flashcard>> = buckets
        .iter()
        .map(|(bucket, cards)| {
            let mut cards: Vec<Flashcard> = cards.iter().cloned().collect();
            // Sets have no order; sort so the document is byte-stable.
            cards.sort_by(|a, b| (a.front(), a.back()).cmp(&(b.front(), b.back())));
            (bucket, cards)
        })
        .collect();
    SerializedState {
        buckets,
        history: history.to_vec(),
        current_day,
    }
}

/// Rebuild the in-memory state from the on-disk shape.
///
/// Fails if the document files a card in more than one bucket.
pub fn deserialize_state(state: SerializedState) -> Fallible<LoadedState> {
    let raw: BTreeMap<u32, HashSet<Flashcard>> = state
        .buckets
        .into_iter()
        .map(|(bucket, cards)| (bucket, cards.into_iter().collect()))
        .collect();
    let buckets = BucketMap::from_parts(raw)?;
    Ok(LoadedState {
        buckets,
        history: state.history,
        current_day: state.current_day,
    })
}

/// Write the state document to disk.
pub fn save_state(
    path: &Path,
    buckets: &BucketMap,
    history: &[PracticeRecord],
    current_day: u64,
) -> Fallible<()> {
    let state = serialize_state(buckets, history, current_day);
    let json = serde_json::to_string_pretty(&state)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Load the state document from disk.
///
/// A missing or unreadable document is a reported error, never a
/// silent empty state: starting from empty would mask data loss.
pub fn load_state(path: &Path) -> Fallible<LoadedState> {
    if !path.exists() {
        return Err(ErrorReport::new(format!(
            "state file does not exist: {}",
            path.display()
        )));
    }
    let json = std::fs::read_to_string(path)?;
    let state: SerializedState = serde_json::from_str(&json)?;
    deserialize_state(state)
}
