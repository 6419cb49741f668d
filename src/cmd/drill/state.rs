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

use std::sync::Arc;
use std::sync::Mutex;
use std::sync::MutexGuard;

use crate::deck::source::DeckSource;
use crate::error::ErrorReport;
use crate::error::Fallible;
use crate::session::provider::SessionProvider;
use crate::types::user::User;

#[derive(Clone)]
pub struct ServerState {
    pub source: Arc<dyn DeckSource>,
    pub user: Option<User>,
    pub mutable: Arc<Mutex<MutableState>>,
}

/// Everything a request may change. Requests take the lock for their whole
/// duration, so session intents never interleave.
pub struct MutableState {
    pub reveal: bool,
    pub provider: SessionProvider,
}

impl ServerState {
    pub fn lock(&self) -> Fallible<MutexGuard<'_, MutableState>> {
        self.mutable
            .lock()
            .map_err(|_| ErrorReport::new("drill state lock poisoned"))
    }
}
