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

use std::collections::BTreeSet;
use std::collections::HashSet;

use serde::Deserialize;
use serde::Serialize;

use crate::types::card::Card;
use crate::types::card_id::CardId;

/// An ordered sequence of cards. Never mutated in place: recording an outcome
/// produces a new deck.
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    pub fn new(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn first(&self) -> Option<&Card> {
        self.cards.first()
    }

    /// The position of the first card with the given ID.
    pub fn position(&self, id: &CardId) -> Option<usize> {
        self.cards.iter().position(|card| card.card_id() == id)
    }

    pub fn find(&self, id: &CardId) -> Option<&Card> {
        self.position(id).map(|index| &self.cards[index])
    }

    /// The card immediately after the card with the given ID, if any.
    pub fn card_after(&self, id: &CardId) -> Option<&Card> {
        self.position(id).and_then(|index| self.cards.get(index + 1))
    }

    /// Return a new deck where every card with the given ID has its outcome
    /// set. Order and all other cards are untouched.
    pub fn with_outcome(&self, id: &CardId, success: bool) -> Self {
        let cards = self
            .cards
            .iter()
            .map(|card| {
                if card.card_id() == id {
                    card.with_success(success)
                } else {
                    card.clone()
                }
            })
            .collect();
        Self { cards }
    }

    /// Return a copy of the deck with every outcome removed.
    pub fn cleared(&self) -> Self {
        Self {
            cards: self.cards.iter().map(Card::cleared).collect(),
        }
    }

    pub fn answered_count(&self) -> usize {
        self.cards.iter().filter(|card| card.is_answered()).count()
    }

    pub fn correct_count(&self) -> usize {
        self.cards
            .iter()
            .filter(|card| card.success() == Some(true))
            .count()
    }

    /// The IDs that occur more than once, in sorted order.
    pub fn duplicate_ids(&self) -> Vec<CardId> {
        let mut seen: HashSet<&CardId> = HashSet::new();
        let mut duplicates: BTreeSet<CardId> = BTreeSet::new();
        for card in &self.cards {
            if !seen.insert(card.card_id()) {
                duplicates.insert(card.card_id().clone());
            }
        }
        duplicates.into_iter().collect()
    }
}

impl FromIterator<Card> for Deck {
    fn from_iter<T: IntoIterator<Item = Card>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(id: &str) -> Card {
        Card::new(CardId::new(id), id.to_uppercase(), id)
    }

    fn abc() -> Deck {
        Deck::new(vec![card("a"), card("b"), card("c")])
    }

    #[test]
    fn test_card_after() {
        let deck = abc();
        assert_eq!(deck.card_after(&"a".into()), Some(&card("b")));
        assert_eq!(deck.card_after(&"b".into()), Some(&card("c")));
        assert_eq!(deck.card_after(&"c".into()), None);
        assert_eq!(deck.card_after(&"z".into()), None);
    }

    #[test]
    fn test_lookup_ignores_outcome() {
        // A card that has been answered is still found by its ID.
        let deck = abc().with_outcome(&"b".into(), true);
        assert_eq!(deck.position(&"b".into()), Some(1));
        assert_eq!(deck.card_after(&"b".into()).map(Card::card_id), Some(&"c".into()));
    }

    #[test]
    fn test_with_outcome_is_copy_on_write() {
        let deck = abc();
        let updated = deck.with_outcome(&"b".into(), false);
        assert_eq!(deck.answered_count(), 0);
        assert_eq!(updated.answered_count(), 1);
        let outcomes: Vec<Option<bool>> = updated.cards().iter().map(Card::success).collect();
        assert_eq!(outcomes, vec![None, Some(false), None]);
        assert_eq!(updated.cleared(), deck);
    }

    #[test]
    fn test_with_outcome_unknown_id() {
        let deck = abc();
        assert_eq!(deck.with_outcome(&"z".into(), true), deck);
    }

    #[test]
    fn test_counts() {
        let deck = abc()
            .with_outcome(&"a".into(), true)
            .with_outcome(&"b".into(), false);
        assert_eq!(deck.answered_count(), 2);
        assert_eq!(deck.correct_count(), 1);
    }

    #[test]
    fn test_duplicate_ids() {
        let deck = Deck::new(vec![card("a"), card("b"), card("a"), card("b"), card("c")]);
        assert_eq!(deck.duplicate_ids(), vec![CardId::new("a"), CardId::new("b")]);
        assert!(abc().duplicate_ids().is_empty());
    }
}
