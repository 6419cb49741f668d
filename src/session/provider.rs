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

use crate::error::ErrorReport;
use crate::error::Fallible;
use crate::session::controller::Controller;
use crate::session::state::Session;
use crate::session::store::Store;

const UNMOUNTED: &str = "session used outside of a mounted provider";

/// Scopes one session store to one active game screen. Handing out a
/// controller before the screen is mounted is a wiring bug and fails loudly.
#[derive(Default)]
pub struct SessionProvider {
    store: Option<Store>,
}

impl SessionProvider {
    pub fn new() -> Self {
        Self { store: None }
    }

    /// Mount a fresh store, replacing any previous one.
    pub fn mount(&mut self, initial: Session) -> &mut Store {
        self.store.insert(Store::new(initial))
    }

    pub fn unmount(&mut self) -> Option<Store> {
        self.store.take()
    }

    pub fn is_mounted(&self) -> bool {
        self.store.is_some()
    }

    pub fn state(&self) -> Fallible<&Session> {
        self.store
            .as_ref()
            .map(Store::state)
            .ok_or_else(|| ErrorReport::new(UNMOUNTED))
    }

    pub fn use_session(&mut self) -> Fallible<Controller<'_>> {
        self.store
            .as_mut()
            .map(Controller::new)
            .ok_or_else(|| ErrorReport::new(UNMOUNTED))
    }
}
