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

use axum::Form;
use axum::extract::State;
use axum::response::Redirect;
use serde::Deserialize;

use crate::cmd::drill::state::MutableState;
use crate::cmd::drill::state::ServerState;
use crate::error::Fallible;

/// A button press in the drill view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
enum FormAction {
    Reveal,
    Correct,
    Incorrect,
    End,
    Restart,
}

impl FormAction {
    /// The outcome this button records, if it is an answer.
    fn outcome(self) -> Option<bool> {
        match self {
            FormAction::Correct => Some(true),
            FormAction::Incorrect => Some(false),
            _ => None,
        }
    }
}

#[derive(Deserialize)]
pub struct FormData {
    action: FormAction,
}

pub async fn post_handler(
    State(state): State<ServerState>,
    Form(form): Form<FormData>,
) -> Redirect {
    match action_handler(&state, form.action) {
        Ok(_) => {}
        Err(e) => {
            log::error!("{e}");
        }
    }
    Redirect::to("/")
}

fn action_handler(state: &ServerState, action: FormAction) -> Fallible<()> {
    let mut mutable = state.lock()?;
    let MutableState { reveal, provider } = &mut *mutable;
    match action {
        FormAction::Reveal => {
            if provider.state()?.awaiting_answer() {
                *reveal = true;
            }
        }
        FormAction::Correct | FormAction::Incorrect => {
            if !*reveal {
                log::error!("Answering a card that is not revealed.");
            } else if let Some(success) = action.outcome() {
                let progress = provider.use_session()?.record_outcome(success);
                log::debug!("Recorded {action:?}: {progress:?}");
                *reveal = false;
            }
        }
        FormAction::End => {
            log::debug!("Session ended early");
            provider.use_session()?.end_game(None);
            *reveal = false;
        }
        FormAction::Restart => {
            let mode = provider.state()?.game_mode.clone();
            let deck = state.source.build_deck(&mode)?;
            provider.use_session()?.start_game(deck, mode)?;
            *reveal = false;
        }
    }
    Ok(())
}
