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

use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde::de::Error;
use serde_json::Value;

use crate::types::card::Card;
use crate::types::deck::Deck;
use crate::types::game_mode::GameMode;

/// An instruction to the session reducer. Each variant carries exactly the
/// fields its transition needs.
#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    SetGameMode(GameMode),
    SetDeck(Deck),
    #[serde(rename_all = "camelCase")]
    StartGame { deck: Deck, game_mode: GameMode },
    #[serde(rename_all = "camelCase")]
    NextCard {
        current_card: Card,
        next_card: Option<Card>,
        deck: Deck,
    },
    EndGame { deck: Deck },
    /// Any action kind this version does not know about.
    Unknown,
}

impl Action {
    pub fn kind(&self) -> &'static str {
        match self {
            Action::SetGameMode(_) => "SET_GAME_MODE",
            Action::SetDeck(_) => "SET_DECK",
            Action::StartGame { .. } => "START_GAME",
            Action::NextCard { .. } => "NEXT_CARD",
            Action::EndGame { .. } => "END_GAME",
            Action::Unknown => "UNKNOWN",
        }
    }
}

/// The envelope every action arrives in. The payload is only interpreted once
/// the kind is known, so unknown kinds may carry anything.
#[derive(Deserialize)]
struct RawAction {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    payload: Value,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct StartGamePayload {
    deck: Deck,
    game_mode: GameMode,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct NextCardPayload {
    current_card: Card,
    next_card: Option<Card>,
    deck: Deck,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct EndGamePayload {
    deck: Deck,
}

fn payload<T: DeserializeOwned, E: Error>(kind: &str, value: Value) -> Result<T, E> {
    serde_json::from_value(value).map_err(|e| E::custom(format!("{kind} payload: {e}")))
}

impl<'de> Deserialize<'de> for Action {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let RawAction { kind, payload: value } = RawAction::deserialize(deserializer)?;
        let action = match kind.as_str() {
            "SET_GAME_MODE" => Action::SetGameMode(payload(&kind, value)?),
            "SET_DECK" => Action::SetDeck(payload(&kind, value)?),
            "START_GAME" => {
                let p: StartGamePayload = payload(&kind, value)?;
                Action::StartGame {
                    deck: p.deck,
                    game_mode: p.game_mode,
                }
            }
            "NEXT_CARD" => {
                let p: NextCardPayload = payload(&kind, value)?;
                Action::NextCard {
                    current_card: p.current_card,
                    next_card: p.next_card,
                    deck: p.deck,
                }
            }
            "END_GAME" => {
                let p: EndGamePayload = payload(&kind, value)?;
                Action::EndGame { deck: p.deck }
            }
            _ => Action::Unknown,
        };
        Ok(action)
    }
}
