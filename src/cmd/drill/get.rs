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

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Html;
use maud::Markup;
use maud::html;

use crate::cmd::drill::state::ServerState;
use crate::cmd::drill::template::page_template;
use crate::error::Fallible;
use crate::session::state::Session;
use crate::types::card::Card;
use crate::types::user::User;

pub async fn get_handler(State(state): State<ServerState>) -> (StatusCode, Html<String>) {
    match render_page(&state) {
        Ok(body) => (StatusCode::OK, Html(page_template(body).into_string())),
        Err(e) => {
            log::error!("{e}");
            (StatusCode::INTERNAL_SERVER_ERROR, Html(e.to_string()))
        }
    }
}

/// A read-only snapshot of the session, for clients other than the HTML view.
pub async fn session_handler(
    State(state): State<ServerState>,
) -> Result<Json<Session>, (StatusCode, String)> {
    let snapshot = state
        .lock()
        .and_then(|mutable| mutable.provider.state().cloned());
    match snapshot {
        Ok(session) => Ok(Json(session)),
        Err(e) => {
            log::error!("{e}");
            Err((StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))
        }
    }
}

fn render_page(state: &ServerState) -> Fallible<Markup> {
    let mutable = state.lock()?;
    let session = mutable.provider.state()?;
    let body = if session.is_game_over {
        render_completion(session)
    } else {
        match &session.next_card {
            Some(card) => render_prompt(session, card, mutable.reveal),
            None => render_empty(session),
        }
    };
    Ok(html! {
        div.root {
            (render_header(session, state.user.as_ref()))
            (body)
        }
    })
}

fn render_header(session: &Session, user: Option<&User>) -> Markup {
    let progress = format!("{} / {}", session.deck.answered_count(), session.deck.len());
    html! {
        div.header {
            h1 { (session.game_mode) }
            @if let Some(user) = user {
                div.user { "Studying as " (user.name) }
            }
            div.progress { (progress) }
        }
    }
}

fn render_prompt(session: &Session, card: &Card, reveal: bool) -> Markup {
    html! {
        @if let Some(previous) = &session.current_card {
            (render_feedback(previous))
        }
        div.card {
            div.question { (card.html_front()) }
            @if reveal {
                div.answer { (card.html_back()) }
            } @else {
                div.answer {}
            }
        }
        div.controls {
            form action="/" method="post" {
                @if reveal {
                    input id="incorrect" type="submit" name="action" value="Incorrect";
                    input id="correct" type="submit" name="action" value="Correct";
                } @else {
                    input id="reveal" type="submit" name="action" value="Reveal";
                }
                div.spacer {}
                input id="end" type="submit" name="action" value="End";
            }
        }
    }
}

fn render_feedback(card: &Card) -> Markup {
    html! {
        @match card.success() {
            Some(true) => {
                div.feedback.correct {
                    span.front { (card.html_front()) }
                    " Correct"
                }
            }
            Some(false) => {
                div.feedback.incorrect {
                    span.front { (card.html_front()) }
                    " Incorrect: " (card.html_back())
                }
            }
            None => {}
        }
    }
}

fn render_empty(session: &Session) -> Markup {
    html! {
        div.empty {
            p { "No cards in " (session.game_mode) "." }
        }
        div.controls {
            form action="/" method="post" {
                input id="end" type="submit" name="action" value="End";
            }
        }
    }
}

fn render_completion(session: &Session) -> Markup {
    let summary = format!(
        "{} / {} correct",
        session.deck.correct_count(),
        session.deck.len()
    );
    html! {
        div.finished {
            h1 { "Session Completed" }
            p.summary { (summary) }
            table.results {
                @for card in session.deck.cards() {
                    tr {
                        td { (card.html_front()) }
                        td { (card.html_back()) }
                        td {
                            @match card.success() {
                                Some(true) => "✓",
                                Some(false) => "✗",
                                None => "-",
                            }
                        }
                    }
                }
            }
            form action="/" method="post" {
                input id="restart" type="submit" name="action" value="Restart";
            }
        }
    }
}
