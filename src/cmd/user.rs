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

use crate::collection::Collection;
use crate::error::Fallible;

pub fn create_user(
    directory: Option<String>,
    username: &str,
    name: &str,
    email: &str,
) -> Fallible<()> {
    let mut coll = Collection::new(directory)?;
    let user = coll.db.create_user(username, name, email)?;
    println!("Created user {}.", user.username);
    Ok(())
}

pub fn print_user(directory: Option<String>, username: &str) -> Fallible<()> {
    let coll = Collection::new(directory)?;
    let user = coll.db.get_user(username)?;
    println!("{}", serde_json::to_string_pretty(&user)?);
    Ok(())
}
