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

use crate::error::Fallible;
use crate::error::fail;
use crate::session::action::Action;
use crate::session::state::Session;
use crate::session::store::Store;
use crate::types::deck::Deck;
use crate::types::game_mode::GameMode;

/// What happened when an outcome was recorded.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Progress {
    /// The answered card became the current card and the next one is up.
    Advanced,
    /// The answered card was the last one, and the session is over.
    Finished,
    /// There was no card to answer. Nothing was dispatched.
    Ignored,
}

/// Turns learner intents into actions on a store.
pub struct Controller<'a> {
    store: &'a mut Store,
}

impl<'a> Controller<'a> {
    pub fn new(store: &'a mut Store) -> Self {
        Self { store }
    }

    pub fn state(&self) -> &Session {
        self.store.state()
    }

    /// Start a new game. Outcomes already on the deck's cards are discarded.
    pub fn start_game(&mut self, deck: Deck, game_mode: GameMode) -> Fallible<()> {
        ensure_unique_ids(&deck)?;
        let deck = deck.cleared();
        log::debug!("Starting {game_mode} game with {} cards", deck.len());
        self.store.dispatch(Action::StartGame { deck, game_mode });
        Ok(())
    }

    pub fn set_deck(&mut self, deck: Deck) -> Fallible<()> {
        ensure_unique_ids(&deck)?;
        self.store.dispatch(Action::SetDeck(deck));
        Ok(())
    }

    pub fn set_game_mode(&mut self, game_mode: GameMode) {
        self.store.dispatch(Action::SetGameMode(game_mode));
    }

    /// Record the learner's answer for the card awaiting one.
    pub fn record_outcome(&mut self, success: bool) -> Progress {
        let state = self.store.state();
        let answered = match &state.next_card {
            Some(card) if !state.is_game_over => card.with_success(success),
            _ => {
                log::debug!("No card awaiting an answer; ignoring outcome.");
                return Progress::Ignored;
            }
        };
        let id = answered.card_id();
        let deck = state.deck.with_outcome(id, success);
        // Prefer the deck's copy so the current card matches the deck exactly.
        let current_card = deck.find(id).cloned().unwrap_or_else(|| answered.clone());
        let following = deck.card_after(id).cloned();
        match following {
            None => {
                log::debug!("Answered last card {id}; ending game.");
                self.store.dispatch(Action::EndGame { deck });
                Progress::Finished
            }
            Some(following) => {
                self.store.dispatch(Action::NextCard {
                    current_card,
                    next_card: Some(following),
                    deck,
                });
                Progress::Advanced
            }
        }
    }

    /// End the game early. Without a deck, the current deck is kept, along
    /// with every outcome recorded so far.
    pub fn end_game(&mut self, deck: Option<Deck>) {
        let deck = deck.unwrap_or_else(|| self.store.state().deck.clone());
        self.store.dispatch(Action::EndGame { deck });
    }
}

/// Progression looks cards up by ID, so an ID may occur only once per deck.
fn ensure_unique_ids(deck: &Deck) -> Fallible<()> {
    let duplicates = deck.duplicate_ids();
    if duplicates.is_empty() {
        return Ok(());
    }
    let ids: Vec<&str> = duplicates.iter().map(|id| id.as_str()).collect();
    fail(format!("deck has duplicate card IDs: {}", ids.join(", ")))
}
