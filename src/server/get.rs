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

use axum::Json;
use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;
use serde_json::json;

use crate::hint::hint_for;
use crate::progress::ProgressStats;
use crate::progress::summarize;
use crate::scheduler::due_today;
use crate::server::state::ServerState;
use crate::types::card::Flashcard;

#[derive(Serialize)]
pub struct PracticeResponse {
    pub day: u64,
    pub cards: Vec<Flashcard>,
}

/// `GET /api/practice`: the cards due on the current simulated day.
pub async fn practice_handler(State(state): State<ServerState>) -> Json<PracticeResponse> {
    let mutable = state.mutable.lock().unwrap();
    let due = due_today(mutable.buckets(), mutable.day());
    let mut cards: Vec<Flashcard> = due.into_iter().collect();
    // The due set is unordered; sort for stable responses.
    cards.sort_by(|a, b| (a.front(), a.back()).cmp(&(b.front(), b.back())));
    log::debug!("Day {}: {} cards due.", mutable.day(), cards.len());
    Json(PracticeResponse {
        day: mutable.day(),
        cards,
    })
}

#[derive(Deserialize)]
pub struct CardParams {
    front: String,
    back: String,
}

/// `GET /api/hint`: the hint for the identified card.
pub async fn hint_handler(
    State(state): State<ServerState>,
    Query(params): Query<CardParams>,
) -> (StatusCode, Json<Value>) {
    let mutable = state.mutable.lock().unwrap();
    match mutable.locate_card(&params.front, &params.back) {
        Some(card) => (StatusCode::OK, Json(json!({ "hint": hint_for(&card) }))),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "card not found" })),
        ),
    }
}

/// `GET /api/progress`: aggregate statistics over the assignment and
/// the practice history.
pub async fn progress_handler(State(state): State<ServerState>) -> Json<ProgressStats> {
    let mutable = state.mutable.lock().unwrap();
    Json(summarize(mutable.buckets(), mutable.history()))
}
