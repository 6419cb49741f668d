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

use maud::Markup;
use maud::PreEscaped;
use maud::html;
use serde::Deserialize;
use serde::Serialize;

use crate::markdown::markdown_to_html;
use crate::markdown::markdown_to_html_inline;
use crate::types::card_id::CardId;

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    card_id: CardId,
    /// The prompt side of the card.
    front: String,
    /// The answer side of the card, in Markdown.
    back: String,
    /// Whether the learner recalled the card. Absent until answered.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    success: Option<bool>,
}

impl Card {
    pub fn new(card_id: CardId, front: impl Into<String>, back: impl Into<String>) -> Self {
        Self {
            card_id,
            front: front.into().trim().to_string(),
            back: back.into().trim().to_string(),
            success: None,
        }
    }

    pub fn card_id(&self) -> &CardId {
        &self.card_id
    }

    pub fn front(&self) -> &str {
        &self.front
    }

    pub fn back(&self) -> &str {
        &self.back
    }

    pub fn success(&self) -> Option<bool> {
        self.success
    }

    pub fn is_answered(&self) -> bool {
        self.success.is_some()
    }

    /// Return a copy of this card with the given outcome recorded.
    pub fn with_success(&self, success: bool) -> Self {
        Self {
            success: Some(success),
            ..self.clone()
        }
    }

    /// Return a copy of this card with any recorded outcome removed.
    pub fn cleared(&self) -> Self {
        Self {
            success: None,
            ..self.clone()
        }
    }

    pub fn html_front(&self) -> Markup {
        html! {
            (PreEscaped(markdown_to_html_inline(&self.front)))
        }
    }

    pub fn html_back(&self) -> Markup {
        html! {
            (PreEscaped(markdown_to_html(&self.back)))
        }
    }
}
