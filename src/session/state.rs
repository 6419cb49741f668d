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

use serde::Serialize;

use crate::types::card::Card;
use crate::types::deck::Deck;
use crate::types::game_mode::GameMode;

/// The state of one study session.
///
/// `next_card` is the card awaiting an answer. `current_card` is the card
/// answered most recently, carrying its outcome, so it can be shown as
/// feedback while `next_card` is prompted.
#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub deck: Deck,
    pub current_card: Option<Card>,
    pub next_card: Option<Card>,
    pub is_game_over: bool,
    pub game_mode: GameMode,
}

impl Session {
    pub fn new(game_mode: GameMode) -> Self {
        Self {
            deck: Deck::empty(),
            current_card: None,
            next_card: None,
            is_game_over: false,
            game_mode,
        }
    }

    /// Whether there is a card the learner can answer right now.
    pub fn awaiting_answer(&self) -> bool {
        !self.is_game_over && self.next_card.is_some()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(GameMode::default())
    }
}
