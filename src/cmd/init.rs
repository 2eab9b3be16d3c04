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

use std::path::Path;

use crate::buckets::BucketMap;
use crate::error::Fallible;
use crate::error::fail;
use crate::persistence::save_state;
use crate::types::card::Flashcard;

/// Create a fresh state file from a deck file.
///
/// The deck file is a JSON list of cards. Every card starts in bucket
/// 0, with an empty history and the day counter at zero.
pub fn init_state(state_file: &Path, deck_file: &Path) -> Fallible<()> {
    if state_file.exists() {
        return fail("state file already exists.");
    }
    if !deck_file.exists() {
        return fail("deck file does not exist.");
    }
    let json = std::fs::read_to_string(deck_file)?;
    let cards: Vec<Flashcard> = serde_json::from_str(&json)?;
    if cards.is_empty() {
        return fail("deck file contains no cards.");
    }
    let mut buckets = BucketMap::empty();
    for card in cards {
        buckets.insert(0, card);
    }
    save_state(state_file, &buckets, &[], 0)?;
    println!(
        "Created {} with {} cards.",
        state_file.display(),
        buckets.card_count()
    );
    Ok(())
}
