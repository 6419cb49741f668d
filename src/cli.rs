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

use clap::Parser;
use clap::Subcommand;

use crate::cmd::check::check_collection;
use crate::cmd::drill::DrillArgs;
use crate::cmd::drill::drill;
use crate::cmd::user::create_user;
use crate::cmd::user::print_user;
use crate::error::Fallible;

#[derive(Parser)]
#[command(version, about, long_about = None)]
enum Command {
    /// Drill the cards of one game mode.
    Drill {
        /// Path to the collection directory. By default, the current working directory is used.
        directory: Option<String>,
        /// The game mode to drill. Defaults to the collection's `default_mode`.
        #[arg(long)]
        mode: Option<String>,
        /// The port to serve the drill on.
        #[arg(long)]
        port: Option<u16>,
        /// Username of the learner studying.
        #[arg(long)]
        user: Option<String>,
        /// Don't open the browser.
        #[arg(long)]
        no_open: bool,
    },
    /// Check that every deck file parses and has unique card IDs.
    Check {
        /// Path to the collection directory. By default, the current working directory is used.
        directory: Option<String>,
    },
    /// Manage learner profiles.
    User {
        #[command(subcommand)]
        command: UserCommand,
    },
}

#[derive(Subcommand)]
enum UserCommand {
    /// Create a learner profile.
    Create {
        username: String,
        name: String,
        email: String,
        /// Path to the collection directory.
        #[arg(long)]
        directory: Option<String>,
    },
    /// Print a learner profile as JSON.
    Get {
        username: String,
        /// Path to the collection directory.
        #[arg(long)]
        directory: Option<String>,
    },
}

pub async fn entrypoint() -> Fallible<()> {
    let cli: Command = Command::parse();
    match cli {
        Command::Drill {
            directory,
            mode,
            port,
            user,
            no_open,
        } => {
            drill(DrillArgs {
                directory,
                mode,
                port,
                user,
                no_open,
            })
            .await
        }
        Command::Check { directory } => check_collection(directory),
        Command::User { command } => match command {
            UserCommand::Create {
                username,
                name,
                email,
                directory,
            } => create_user(directory, &username, &name, &email),
            UserCommand::Get {
                username,
                directory,
            } => print_user(directory, &username),
        },
    }
}
