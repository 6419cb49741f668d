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
use crate::deck::source::DeckSource;
use crate::error::Fallible;

pub fn check_collection(directory: Option<String>) -> Fallible<()> {
    let coll = Collection::new(directory)?;
    for mode in coll.source.modes()? {
        let deck = coll.source.build_deck(&mode)?;
        println!("{mode}: {} cards", deck.len());
    }
    println!("ok");
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs::write;

    use super::check_collection;
    use crate::error::Fallible;
    use crate::helper::create_tmp_collection;

    #[test]
    fn test_non_existent_directory() {
        assert!(check_collection(Some("./derpherp".to_string())).is_err());
    }

    #[test]
    fn test_directory() -> Fallible<()> {
        let dir = create_tmp_collection()?;
        assert!(check_collection(Some(dir.display().to_string())).is_ok());
        Ok(())
    }

    #[test]
    fn test_duplicate_ids() -> Fallible<()> {
        let dir = create_tmp_collection()?;
        write(
            dir.join("extra.toml"),
            "mode = \"hiragana\"\n[[cards]]\nid = \"ka\"\nfront = \"カ\"\nback = \"ka\"\n",
        )?;
        assert!(check_collection(Some(dir.display().to_string())).is_err());
        Ok(())
    }
}
