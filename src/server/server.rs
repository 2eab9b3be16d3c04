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

use std::path::PathBuf;
use std::sync::Arc;
use std::sync::Mutex;

use axum::Json;
use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use axum::routing::post;
use serde_json::Value;
use serde_json::json;
use tokio::net::TcpListener;

use crate::error::Fallible;
use crate::persistence::load_state;
use crate::server::get::hint_handler;
use crate::server::get::practice_handler;
use crate::server::get::progress_handler;
use crate::server::post::day_handler;
use crate::server::post::update_handler;
use crate::server::state::MutableState;
use crate::server::state::ServerState;

pub async fn start_server(state_path: PathBuf, port: u16) -> Fallible<()> {
    log::debug!("Loading state from {}...", state_path.display());
    let loaded = load_state(&state_path)?;
    log::debug!(
        "Loaded {} cards, {} history records, day {}.",
        loaded.buckets.card_count(),
        loaded.history.len(),
        loaded.current_day
    );

    let state = ServerState {
        state_path,
        mutable: Arc::new(Mutex::new(MutableState::new(
            loaded.buckets,
            loaded.history,
            loaded.current_day,
        ))),
    };
    let app = Router::new();
    let app = app.route("/api/practice", get(practice_handler));
    let app = app.route("/api/update", post(update_handler));
    let app = app.route("/api/hint", get(hint_handler));
    let app = app.route("/api/progress", get(progress_handler));
    let app = app.route("/api/day", post(day_handler));
    let app = app.fallback(not_found_handler);
    let app = app.with_state(state);
    let bind = format!("0.0.0.0:{port}");

    log::debug!("Starting server on {bind}");
    let listener = TcpListener::bind(bind).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

async fn not_found_handler() -> (StatusCode, Json<Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "not found" })),
    )
}
