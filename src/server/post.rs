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
use axum::extract::State;
use axum::http::StatusCode;
use chrono::Utc;
use serde::Deserialize;
use serde_json::Value;
use serde_json::json;

use crate::error::EngineError;
use crate::leitner::Difficulty;
use crate::scheduler::apply_feedback;
use crate::server::state::ServerState;
use crate::types::record::PracticeRecord;

#[derive(Deserialize)]
pub struct UpdateRequest {
    front: String,
    back: String,
    difficulty: String,
}

/// `POST /api/update`: apply difficulty feedback to a card.
///
/// The new assignment is installed and a history record appended
/// under one lock acquisition, then the state file is rewritten.
pub async fn update_handler(
    State(state): State<ServerState>,
    Json(request): Json<UpdateRequest>,
) -> (StatusCode, Json<Value>) {
    // Validate the difficulty at the boundary, before the engine.
    let difficulty = match Difficulty::parse(&request.difficulty) {
        Ok(difficulty) => difficulty,
        Err(e) => {
            return (StatusCode::BAD_REQUEST, Json(json!({ "error": e.to_string() })));
        }
    };
    let mut mutable = state.mutable.lock().unwrap();
    let card = match mutable.locate_card(&request.front, &request.back) {
        Some(card) => card,
        None => {
            return (
                StatusCode::NOT_FOUND,
                Json(json!({ "error": "card not found" })),
            );
        }
    };
    match apply_feedback(mutable.buckets(), &card, difficulty) {
        Ok(outcome) => {
            mutable.replace_buckets(outcome.buckets);
            mutable.record_practice(PracticeRecord {
                card_front: card.front().to_string(),
                card_back: card.back().to_string(),
                timestamp: Utc::now().timestamp_millis(),
                difficulty,
                previous_bucket: outcome.previous_bucket,
                new_bucket: outcome.new_bucket,
            });
            log::debug!(
                "{:?} {}: bucket {} -> {}",
                card.front(),
                difficulty.as_str(),
                outcome.previous_bucket,
                outcome.new_bucket
            );
            if let Err(e) = mutable.persist(&state.state_path) {
                log::error!("failed to persist state: {e}");
                return (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "failed to persist state" })),
                );
            }
            (
                StatusCode::OK,
                Json(json!({
                    "previousBucket": outcome.previous_bucket,
                    "newBucket": outcome.new_bucket,
                })),
            )
        }
        Err(e) => {
            log::error!("feedback rejected: {e}");
            (engine_error_status(&e), Json(json!({ "error": e.to_string() })))
        }
    }
}

/// `POST /api/day`: advance the simulated day by one.
pub async fn day_handler(State(state): State<ServerState>) -> (StatusCode, Json<Value>) {
    let mut mutable = state.mutable.lock().unwrap();
    let day = mutable.next_day();
    log::debug!("Advanced to day {day}.");
    if let Err(e) = mutable.persist(&state.state_path) {
        log::error!("failed to persist state: {e}");
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "failed to persist state" })),
        );
    }
    (StatusCode::OK, Json(json!({ "currentDay": day })))
}

fn engine_error_status(e: &EngineError) -> StatusCode {
    match e {
        EngineError::NotFound => StatusCode::NOT_FOUND,
        EngineError::InvalidDifficulty(_) => StatusCode::BAD_REQUEST,
        EngineError::InvalidState(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}
