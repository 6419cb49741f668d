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

use crate::session::action::Action;
use crate::session::reducer::reduce;
use crate::session::state::Session;

type Listener = Box<dyn Fn(&Session) + Send>;

/// Owns the session state. All changes go through `dispatch`.
pub struct Store {
    state: Session,
    listeners: Vec<Listener>,
}

impl Store {
    pub fn new(initial: Session) -> Self {
        Self {
            state: initial,
            listeners: Vec::new(),
        }
    }

    pub fn state(&self) -> &Session {
        &self.state
    }

    /// Register a callback invoked with the new state after every dispatch.
    pub fn subscribe(&mut self, listener: impl Fn(&Session) + Send + 'static) {
        self.listeners.push(Box::new(listener));
    }

    pub fn dispatch(&mut self, action: Action) {
        log::debug!("dispatch {}", action.kind());
        if let Action::NextCard { current_card, .. } = &action {
            let expected = self.state.next_card.as_ref().map(|card| card.card_id());
            if expected != Some(current_card.card_id()) {
                log::warn!(
                    "NEXT_CARD moves to {} but the previous next card was {:?}",
                    current_card.card_id(),
                    expected
                );
            }
        }
        self.state = reduce(&self.state, &action);
        for listener in &self.listeners {
            listener(&self.state);
        }
    }
}
