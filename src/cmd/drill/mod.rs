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

mod get;
mod post;
pub mod server;
mod state;
mod template;

use std::sync::Arc;

use crate::cmd::drill::server::DrillOptions;
use crate::cmd::drill::server::start_server;
use crate::collection::Collection;
use crate::error::Fallible;
use crate::types::game_mode::GameMode;

/// Command-line overrides for the collection's config.
pub struct DrillArgs {
    pub directory: Option<String>,
    pub mode: Option<String>,
    pub port: Option<u16>,
    pub user: Option<String>,
    pub no_open: bool,
}

pub async fn drill(args: DrillArgs) -> Fallible<()> {
    let coll = Collection::new(args.directory)?;
    let user = match &args.user {
        Some(username) => Some(coll.db.get_user(username)?),
        None => None,
    };
    let options = DrillOptions {
        mode: args
            .mode
            .map(GameMode::new)
            .unwrap_or(coll.config.default_mode),
        port: args.port.unwrap_or(coll.config.port),
        open_browser: coll.config.open_browser && !args.no_open,
        user,
    };
    start_server(Arc::new(coll.source), options).await
}
