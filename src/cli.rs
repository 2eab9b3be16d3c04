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

use clap::Parser;

use crate::cmd::init::init_state;
use crate::cmd::stats::print_progress_stats;
use crate::error::Fallible;
use crate::server::server::start_server;

#[derive(Parser)]
#[command(version, about, long_about = None)]
enum Command {
    /// Create a new state file from a deck of cards.
    Init {
        /// Path of the state file to create.
        state_file: PathBuf,
        /// Path to a JSON deck file (a list of cards).
        deck_file: PathBuf,
    },
    /// Serve the practice API.
    Serve {
        /// Path to the state file.
        state_file: PathBuf,
        /// Port to listen on.
        #[arg(long, default_value_t = 8000)]
        port: u16,
    },
    /// Print progress statistics.
    Stats {
        /// Path to the state file.
        state_file: PathBuf,
    },
}

pub async fn entrypoint() -> Fallible<()> {
    let cli: Command = Command::parse();
    match cli {
        Command::Init {
            state_file,
            deck_file,
        } => init_state(&state_file, &deck_file),
        Command::Serve { state_file, port } => start_server(state_file, port).await,
        Command::Stats { state_file } => print_progress_stats(&state_file),
    }
}
