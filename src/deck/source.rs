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
use std::fs::read_to_string;
use std::path::Path;
use std::path::PathBuf;
use std::time::Instant;

use walkdir::WalkDir;

use crate::config::CONFIG_FILE_NAME;
use crate::deck::parser::DeckFile;
use crate::deck::parser::parse_deck_file;
use crate::error::Fallible;
use crate::error::fail;
use crate::types::deck::Deck;
use crate::types::game_mode::GameMode;

/// Builds the ordered deck a session is started with.
pub trait DeckSource: Send + Sync {
    fn build_deck(&self, mode: &GameMode) -> Fallible<Deck>;
}

/// Reads `*.toml` deck files from a directory tree.
pub struct DirectoryDeckSource {
    directory: PathBuf,
}

impl DirectoryDeckSource {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Parse every deck file, in file-name order.
    pub fn load(&self) -> Fallible<Vec<DeckFile>> {
        if !self.directory.exists() {
            return fail("directory does not exist.");
        }
        log::debug!("Loading decks...");
        let start = Instant::now();
        let mut files = Vec::new();
        for entry in WalkDir::new(&self.directory).sort_by_file_name() {
            let entry = entry?;
            let path = entry.path();
            if path.is_file() && is_deck_file(path) {
                let contents = read_to_string(path)?;
                files.push(parse_deck_file(path, &contents)?);
            }
        }
        let duration = start.elapsed().as_millis();
        log::debug!("Loaded {} deck files in {duration}ms.", files.len());
        Ok(files)
    }

    /// The modes that at least one deck file provides.
    pub fn modes(&self) -> Fallible<Vec<GameMode>> {
        let modes: BTreeSet<GameMode> = self.load()?.into_iter().map(|file| file.mode).collect();
        Ok(modes.into_iter().collect())
    }
}

impl DeckSource for DirectoryDeckSource {
    fn build_deck(&self, mode: &GameMode) -> Fallible<Deck> {
        let deck: Deck = self
            .load()?
            .into_iter()
            .filter(|file| &file.mode == mode)
            .flat_map(|file| file.cards)
            .collect();
        let duplicates = deck.duplicate_ids();
        if let Some(id) = duplicates.first() {
            return fail(format!("duplicate card ID in mode {mode}: {id}"));
        }
        Ok(deck)
    }
}

fn is_deck_file(path: &Path) -> bool {
    let is_toml = path.extension().is_some_and(|ext| ext == "toml");
    let is_config = path.file_name().is_some_and(|name| name == CONFIG_FILE_NAME);
    is_toml && !is_config
}

#[cfg(test)]
mod tests {
    use std::fs::create_dir_all;
    use std::fs::write;

    use super::*;
    use crate::helper::create_tmp_directory;
    use crate::types::card::Card;

    fn ids(deck: &Deck) -> Vec<&str> {
        deck.cards().iter().map(|c: &Card| c.card_id().as_str()).collect()
    }

    #[test]
    fn test_non_existent_directory() {
        let source = DirectoryDeckSource::new("./derpherp");
        let err = source.build_deck(&GameMode::default()).err().unwrap();
        assert_eq!(err.to_string(), "error: directory does not exist.");
    }

    #[test]
    fn test_build_deck_filters_and_orders() -> Fallible<()> {
        let dir = create_tmp_directory()?;
        create_dir_all(dir.join("nested"))?;
        write(
            dir.join("a.toml"),
            "mode = \"hiragana\"\n[[cards]]\nid = \"a\"\nfront = \"あ\"\nback = \"a\"\n",
        )?;
        write(
            dir.join("b.toml"),
            "mode = \"katakana\"\n[[cards]]\nid = \"A\"\nfront = \"ア\"\nback = \"a\"\n",
        )?;
        write(
            dir.join("nested").join("c.toml"),
            "mode = \"hiragana\"\n[[cards]]\nid = \"ka\"\nfront = \"か\"\nback = \"ka\"\n",
        )?;
        write(dir.join("notes.md"), "not a deck")?;
        write(dir.join(CONFIG_FILE_NAME), "port = 1234\n")?;

        let source = DirectoryDeckSource::new(&dir);
        let hiragana = source.build_deck(&GameMode::new("hiragana"))?;
        assert_eq!(ids(&hiragana), vec!["a", "ka"]);
        let katakana = source.build_deck(&GameMode::new("katakana"))?;
        assert_eq!(ids(&katakana), vec!["A"]);
        let none = source.build_deck(&GameMode::new("kanji"))?;
        assert!(none.is_empty());
        assert_eq!(
            source.modes()?,
            vec![GameMode::new("hiragana"), GameMode::new("katakana")]
        );
        Ok(())
    }

    #[test]
    fn test_duplicate_ids_across_files() -> Fallible<()> {
        let dir = create_tmp_directory()?;
        let contents = "mode = \"hiragana\"\n[[cards]]\nid = \"a\"\nfront = \"あ\"\nback = \"a\"\n";
        write(dir.join("one.toml"), contents)?;
        write(dir.join("two.toml"), contents)?;
        let source = DirectoryDeckSource::new(&dir);
        let err = source.build_deck(&GameMode::new("hiragana")).err().unwrap();
        assert_eq!(err.message(), "duplicate card ID in mode hiragana: a");
        Ok(())
    }

    #[test]
    fn test_parse_error_names_file() -> Fallible<()> {
        let dir = create_tmp_directory()?;
        write(dir.join("broken.toml"), "mode = ")?;
        let source = DirectoryDeckSource::new(&dir);
        let err = source.load().err().unwrap();
        assert!(err.message().contains("broken.toml"));
        Ok(())
    }
}
