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
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::Mutex;

use crate::buckets::BucketMap;
use crate::error::Fallible;
use crate::persistence::save_state;
use crate::types::card::Flashcard;
use crate::types::record::PracticeRecord;

#[derive(Clone)]
pub struct ServerState {
    pub state_path: PathBuf,
    pub mutable: Arc<Mutex<MutableState>>,
}

/// The authoritative current state: bucket assignment, practice
/// history, and the simulated day counter.
///
/// Handlers hold the mutex across read-compute-replace, so each
/// feedback event is atomic and concurrent updates cannot race on the
/// same card. The raw map is never handed out mutably; handlers read
/// a snapshot and install a replacement.
pub struct MutableState {
    buckets: BucketMap,
    history: Vec<PracticeRecord>,
    day: u64,
}

impl MutableState {
    pub fn new(buckets: BucketMap, history: Vec<PracticeRecord>, day: u64) -> Self {
        Self {
            buckets,
            history,
            day,
        }
    }

    pub fn buckets(&self) -> &BucketMap {
        &self.buckets
    }

    pub fn history(&self) -> &[PracticeRecord] {
        &self.history
    }

    pub fn day(&self) -> u64 {
        self.day
    }

    /// The stored card matching the given (front, back) pair.
    pub fn locate_card(&self, front: &str, back: &str) -> Option<Flashcard> {
        self.buckets.find_card(front, back).cloned()
    }

    /// Install a new assignment snapshot.
    pub fn replace_buckets(&mut self, buckets: BucketMap) {
        self.buckets = buckets;
    }

    /// Append one history record.
    pub fn record_practice(&mut self, record: PracticeRecord) {
        self.history.push(record);
    }

    /// Advance the simulated day and return the new value.
    pub fn next_day(&mut self) -> u64 {
        self.day += 1;
        self.day
    }

    /// Write the current state to the given state file.
    pub fn persist(&self, path: &Path) -> Fallible<()> {
        save_state(path, &self.buckets, &self.history, self.day)
    }
}
