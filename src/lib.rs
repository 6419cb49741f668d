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

//! kanadrill: a flashcard drill built around a study-session state machine.
//!
//! - `session`: the store, reducer, controller, and provider
//! - `deck`: building decks from TOML deck files
//! - `db`: learner profiles
//! - `cmd`: the command-line commands, including the web drill

pub mod cli;
pub mod cmd;
pub mod collection;
pub mod config;
pub mod db;
pub mod deck;
pub mod error;
#[cfg(test)]
mod helper;
pub mod markdown;
pub mod session;
pub mod types;

pub use error::ErrorReport;
pub use error::Fallible;
pub use session::controller::Controller;
pub use session::controller::Progress;
pub use session::provider::SessionProvider;
pub use session::state::Session;
pub use session::store::Store;
