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

use std::sync::Arc;
use std::sync::Mutex;
use std::time::Duration;

use axum::Router;
use axum::http::HeaderName;
use axum::http::StatusCode;
use axum::http::header::CACHE_CONTROL;
use axum::http::header::CONTENT_TYPE;
use axum::response::Html;
use axum::routing::get;
use tokio::net::TcpListener;
use tokio::net::TcpStream;
use tokio::signal;
use tokio::time::sleep;

use crate::cmd::drill::get::get_handler;
use crate::cmd::drill::get::session_handler;
use crate::cmd::drill::post::post_handler;
use crate::cmd::drill::state::MutableState;
use crate::cmd::drill::state::ServerState;
use crate::deck::source::DeckSource;
use crate::error::Fallible;
use crate::session::provider::SessionProvider;
use crate::session::state::Session;
use crate::types::game_mode::GameMode;
use crate::types::user::User;

pub struct DrillOptions {
    pub mode: GameMode,
    pub port: u16,
    pub open_browser: bool,
    pub user: Option<User>,
}

pub async fn start_server(source: Arc<dyn DeckSource>, options: DrillOptions) -> Fallible<()> {
    let DrillOptions {
        mode,
        port,
        open_browser,
        user,
    } = options;

    let deck = source.build_deck(&mode)?;
    if deck.is_empty() {
        println!("No cards in mode {mode}.");
        return Ok(());
    }
    let total_cards = deck.len();

    let mut provider = SessionProvider::new();
    let store = provider.mount(Session::new(mode.clone()));
    store.subscribe(|session| {
        log::debug!(
            "{} / {} answered, game over: {}",
            session.deck.answered_count(),
            session.deck.len(),
            session.is_game_over
        );
    });
    provider.use_session()?.start_game(deck, mode.clone())?;

    let state = ServerState {
        source,
        user,
        mutable: Arc::new(Mutex::new(MutableState {
            reveal: false,
            provider,
        })),
    };
    let app = Router::new();
    let app = app.route("/", get(get_handler).post(post_handler));
    let app = app.route("/api/session", get(session_handler));
    let app = app.route("/style.css", get(stylesheet));
    let app = app.fallback(not_found_handler);
    let app = app.with_state(state);
    let bind = format!("127.0.0.1:{port}");

    if open_browser {
        // Start a separate task to open the browser.
        let url = format!("http://{bind}/");
        let target = bind.clone();
        tokio::spawn(async move {
            loop {
                if let Ok(stream) = TcpStream::connect(target.as_str()).await {
                    drop(stream);
                    break;
                }
                sleep(Duration::from_millis(1)).await;
            }
            let _ = open::that(url);
        });
    }

    log::info!("Drilling {total_cards} {mode} cards on http://{bind}/");
    let listener = TcpListener::bind(bind.as_str()).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        log::error!("failed to listen for Ctrl-C: {e}");
        std::future::pending::<()>().await;
    }
}

async fn stylesheet() -> (StatusCode, [(HeaderName, &'static str); 2], &'static [u8]) {
    let bytes = include_bytes!("style.css");
    (
        StatusCode::OK,
        [
            (CONTENT_TYPE, "text/css"),
            (CACHE_CONTROL, "public, max-age=604800, immutable"),
        ],
        bytes,
    )
}

async fn not_found_handler() -> (StatusCode, Html<String>) {
    (StatusCode::NOT_FOUND, Html("Not Found".to_string()))
}
