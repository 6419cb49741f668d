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

use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;

use crate::error::ErrorReport;
use crate::error::Fallible;
use crate::types::card::Card;
use crate::types::card_id::CardId;
use crate::types::game_mode::GameMode;

/// The cards of one deck file, tagged with the mode they belong to.
#[derive(Debug, PartialEq)]
pub struct DeckFile {
    pub path: PathBuf,
    pub mode: GameMode,
    pub cards: Vec<Card>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawDeckFile {
    mode: String,
    #[serde(default)]
    cards: Vec<RawCard>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawCard {
    id: String,
    front: String,
    back: String,
}

pub fn parse_deck_file(path: &Path, contents: &str) -> Fallible<DeckFile> {
    let context = |message: String| ErrorReport::new(format!("{}: {message}", path.display()));
    let raw: RawDeckFile =
        toml::from_str(contents).map_err(|e| context(e.message().to_string()))?;
    let mode = raw.mode.trim();
    if mode.is_empty() {
        return Err(context("mode must not be empty.".to_string()));
    }
    let mut cards = Vec::with_capacity(raw.cards.len());
    for (index, card) in raw.cards.into_iter().enumerate() {
        let card_id =
            CardId::parse(&card.id).map_err(|e| context(format!("card {}: {}", index + 1, e.message())))?;
        if card.front.trim().is_empty() || card.back.trim().is_empty() {
            return Err(context(format!(
                "card {card_id} must have a front and a back."
            )));
        }
        cards.push(Card::new(card_id, card.front, card.back));
    }
    Ok(DeckFile {
        path: path.to_path_buf(),
        mode: GameMode::new(mode),
        cards,
    })
}
