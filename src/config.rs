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

use std::fs::read_to_string;
use std::path::Path;

use serde::Deserialize;

use crate::error::ErrorReport;
use crate::error::Fallible;
use crate::types::game_mode::GameMode;

pub const CONFIG_FILE_NAME: &str = "kanadrill.toml";

const DEFAULT_PORT: u16 = 8000;

/// Per-collection settings. Every key is optional.
#[derive(Debug, PartialEq)]
pub struct Config {
    pub default_mode: GameMode,
    pub port: u16,
    pub open_browser: bool,
}

#[derive(Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    default_mode: Option<String>,
    port: Option<u16>,
    open_browser: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_mode: GameMode::default(),
            port: DEFAULT_PORT,
            open_browser: true,
        }
    }
}

impl Config {
    /// Load the config file from the collection directory, falling back to
    /// the defaults if there is none.
    pub fn load(directory: &Path) -> Fallible<Self> {
        let path = directory.join(CONFIG_FILE_NAME);
        if !path.exists() {
            log::debug!("No {CONFIG_FILE_NAME}, using defaults.");
            return Ok(Self::default());
        }
        let contents = read_to_string(&path)?;
        Self::parse(&contents)
            .map_err(|e| ErrorReport::new(format!("{}: {}", path.display(), e.message())))
    }

    pub fn parse(contents: &str) -> Fallible<Self> {
        let raw: RawConfig = toml::from_str(contents)?;
        let defaults = Self::default();
        Ok(Self {
            default_mode: raw
                .default_mode
                .map(GameMode::new)
                .unwrap_or(defaults.default_mode),
            port: raw.port.unwrap_or(defaults.port),
            open_browser: raw.open_browser.unwrap_or(defaults.open_browser),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::fs::write;

    use super::*;
    use crate::helper::create_tmp_directory;

    #[test]
    fn test_missing_file_uses_defaults() -> Fallible<()> {
        let dir = create_tmp_directory()?;
        assert_eq!(Config::load(&dir)?, Config::default());
        Ok(())
    }

    #[test]
    fn test_partial_file() -> Fallible<()> {
        let dir = create_tmp_directory()?;
        write(dir.join(CONFIG_FILE_NAME), "default_mode = \"katakana\"\n")?;
        let config = Config::load(&dir)?;
        assert_eq!(config.default_mode, GameMode::new("katakana"));
        assert_eq!(config.port, 8000);
        assert!(config.open_browser);
        Ok(())
    }

    #[test]
    fn test_full_file() -> Fallible<()> {
        let config = Config::parse("default_mode = \"hiragana\"\nport = 9001\nopen_browser = false\n")?;
        assert_eq!(config.port, 9001);
        assert!(!config.open_browser);
        Ok(())
    }

    #[test]
    fn test_unknown_key() -> Fallible<()> {
        let dir = create_tmp_directory()?;
        write(dir.join(CONFIG_FILE_NAME), "shuffle = true\n")?;
        let err = Config::load(&dir).err().unwrap();
        assert!(err.message().contains(CONFIG_FILE_NAME));
        Ok(())
    }
}
