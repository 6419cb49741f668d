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

use std::fs::write;
use std::path::PathBuf;

use tempfile::tempdir;

use crate::error::Fallible;

pub fn create_tmp_directory() -> Fallible<PathBuf> {
    let dir: PathBuf = tempdir()?.keep().canonicalize()?;
    Ok(dir)
}

/// A scratch collection with a three-card hiragana deck and an empty
/// katakana deck.
pub fn create_tmp_collection() -> Fallible<PathBuf> {
    let dir = create_tmp_directory()?;
    write(
        dir.join("hiragana.toml"),
        r#"mode = "hiragana"

[[cards]]
id = "a"
front = "あ"
back = "a"

[[cards]]
id = "ka"
front = "か"
back = "ka"

[[cards]]
id = "sa"
front = "さ"
back = "sa"
"#,
    )?;
    write(dir.join("katakana.toml"), "mode = \"katakana\"\n")?;
    Ok(dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_tmp_collection() -> Fallible<()> {
        let dir = create_tmp_collection()?;
        assert!(dir.join("hiragana.toml").exists());
        assert!(dir.join("katakana.toml").exists());
        Ok(())
    }
}
