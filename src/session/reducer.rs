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
use crate::session::state::Session;

/// Compute the session that follows `state` under `action`. Never fails and
/// never touches `state`.
pub fn reduce(state: &Session, action: &Action) -> Session {
    match action {
        Action::SetGameMode(mode) => Session {
            game_mode: mode.clone(),
            ..state.clone()
        },
        Action::SetDeck(deck) => Session {
            deck: deck.clone(),
            ..state.clone()
        },
        Action::StartGame { deck, game_mode } => Session {
            deck: deck.clone(),
            current_card: None,
            next_card: deck.first().cloned(),
            is_game_over: false,
            game_mode: game_mode.clone(),
        },
        Action::NextCard {
            current_card,
            next_card,
            deck,
        } => {
            // A finished session only restarts.
            if state.is_game_over {
                return state.clone();
            }
            Session {
                deck: deck.clone(),
                current_card: Some(current_card.clone()),
                next_card: next_card.clone(),
                ..state.clone()
            }
        }
        Action::EndGame { deck } => Session {
            deck: deck.clone(),
            current_card: None,
            next_card: None,
            is_game_over: true,
            ..state.clone()
        },
        Action::Unknown => state.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::card::Card;
    use crate::types::card_id::CardId;
    use crate::types::deck::Deck;
    use crate::types::game_mode::GameMode;

    fn card(id: &str) -> Card {
        Card::new(CardId::new(id), id, id)
    }

    fn abc() -> Deck {
        Deck::new(vec![card("A"), card("B"), card("C")])
    }

    fn started() -> Session {
        reduce(
            &Session::default(),
            &Action::StartGame {
                deck: abc(),
                game_mode: GameMode::new("hiragana"),
            },
        )
    }

    #[test]
    fn test_start_game() {
        let state = started();
        assert_eq!(state.deck, abc());
        assert_eq!(state.current_card, None);
        assert_eq!(state.next_card, Some(card("A")));
        assert!(!state.is_game_over);
        assert_eq!(state.game_mode, GameMode::new("hiragana"));
    }

    #[test]
    fn test_start_game_empty_deck() {
        let state = reduce(
            &started(),
            &Action::StartGame {
                deck: Deck::empty(),
                game_mode: GameMode::new("katakana"),
            },
        );
        assert_eq!(state.current_card, None);
        assert_eq!(state.next_card, None);
        assert!(!state.is_game_over);
        assert_eq!(state.game_mode, GameMode::new("katakana"));
    }

    #[test]
    fn test_start_game_supersedes_terminal_session() {
        let over = reduce(&started(), &Action::EndGame { deck: abc() });
        assert!(over.is_game_over);
        let restarted = reduce(
            &over,
            &Action::StartGame {
                deck: abc(),
                game_mode: GameMode::new("hiragana"),
            },
        );
        assert_eq!(restarted, started());
    }

    #[test]
    fn test_set_game_mode_only_touches_mode() {
        let before = started();
        let after = reduce(&before, &Action::SetGameMode(GameMode::new("katakana")));
        assert_eq!(after.game_mode, GameMode::new("katakana"));
        assert_eq!(
            Session {
                game_mode: before.game_mode.clone(),
                ..after
            },
            before
        );
    }

    #[test]
    fn test_set_game_mode_is_idempotent() {
        let action = Action::SetGameMode(GameMode::new("katakana"));
        let once = reduce(&started(), &action);
        let twice = reduce(&once, &action);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_set_deck_leaves_pointers() {
        let before = started();
        let deck = Deck::new(vec![card("X")]);
        let after = reduce(&before, &Action::SetDeck(deck.clone()));
        assert_eq!(after.deck, deck);
        assert_eq!(after.next_card, before.next_card);
        assert_eq!(after.current_card, before.current_card);
        assert_eq!(after.is_game_over, before.is_game_over);
    }

    #[test]
    fn test_next_card() {
        let deck = abc().with_outcome(&"A".into(), true);
        let after = reduce(
            &started(),
            &Action::NextCard {
                current_card: card("A").with_success(true),
                next_card: Some(card("B")),
                deck: deck.clone(),
            },
        );
        assert_eq!(after.current_card, Some(card("A").with_success(true)));
        assert_eq!(after.next_card, Some(card("B")));
        assert_eq!(after.deck, deck);
        assert!(!after.is_game_over);
    }

    #[test]
    fn test_next_card_ignored_when_over() {
        let over = reduce(&started(), &Action::EndGame { deck: abc() });
        let after = reduce(
            &over,
            &Action::NextCard {
                current_card: card("A"),
                next_card: Some(card("B")),
                deck: abc(),
            },
        );
        assert_eq!(after, over);
    }

    #[test]
    fn test_end_game() {
        let deck = abc().with_outcome(&"A".into(), false);
        let after = reduce(&started(), &Action::EndGame { deck: deck.clone() });
        assert!(after.is_game_over);
        assert_eq!(after.current_card, None);
        assert_eq!(after.next_card, None);
        assert_eq!(after.deck, deck);
        assert_eq!(after.game_mode, GameMode::new("hiragana"));
    }

    #[test]
    fn test_unknown_action_is_identity() {
        let before = started();
        assert_eq!(reduce(&before, &Action::Unknown), before);
    }

    #[test]
    fn test_input_is_not_mutated() {
        let before = started();
        let snapshot = before.clone();
        let _ = reduce(&before, &Action::EndGame { deck: Deck::empty() });
        assert_eq!(before, snapshot);
    }
}
