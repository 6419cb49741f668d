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

use rusqlite::Connection;
use rusqlite::OptionalExtension;
use rusqlite::Transaction;

use crate::error::Fallible;
use crate::error::fail;
use crate::types::timestamp::Timestamp;
use crate::types::user::User;

/// Stores learner profiles.
pub struct Database {
    conn: Connection,
}

impl Database {
    pub fn new(database_path: &str) -> Fallible<Self> {
        let conn = Connection::open(database_path)?;
        Self::init(conn)
    }

    #[cfg(test)]
    pub fn in_memory() -> Fallible<Self> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(mut conn: Connection) -> Fallible<Self> {
        {
            let tx = conn.transaction()?;
            if !probe_schema_exists(&tx)? {
                tx.execute_batch(include_str!("schema.sql"))?;
                tx.commit()?;
            }
        }
        Ok(Self { conn })
    }

    /// Insert a new user.
    ///
    /// If a user with the given username exists, returns an error.
    pub fn create_user(&mut self, username: &str, name: &str, email: &str) -> Fallible<User> {
        let user = User {
            username: username.to_string(),
            name: name.to_string(),
            email: email.to_string(),
            created_at: Timestamp::now(),
        };
        let tx = self.conn.transaction()?;
        if find_user(&tx, username)?.is_some() {
            return fail(format!("user already exists: \"{username}\""));
        }
        let sql = "insert into users (username, name, email, created_at) values (?, ?, ?, ?);";
        tx.execute(
            sql,
            (&user.username, &user.name, &user.email, user.created_at),
        )?;
        tx.commit()?;
        log::debug!("Created user {username}");
        Ok(user)
    }

    /// Look up a user.
    ///
    /// If no user with the given username exists, returns an error.
    pub fn get_user(&self, username: &str) -> Fallible<User> {
        match find_user(&self.conn, username)? {
            Some(user) => Ok(user),
            None => fail(format!("failed to retrieve user: \"{username}\"")),
        }
    }

    pub fn user_count(&self) -> Fallible<usize> {
        let sql = "select count(*) from users;";
        let count: i64 = self.conn.query_row(sql, [], |row| row.get(0))?;
        Ok(count as usize)
    }
}

fn find_user(conn: &Connection, username: &str) -> Fallible<Option<User>> {
    let sql = "select username, name, email, created_at from users where username = ?;";
    let user = conn
        .query_row(sql, [username], |row| {
            Ok(User {
                username: row.get(0)?,
                name: row.get(1)?,
                email: row.get(2)?,
                created_at: row.get(3)?,
            })
        })
        .optional()?;
    Ok(user)
}

fn probe_schema_exists(tx: &Transaction) -> Fallible<bool> {
    let sql = "select count(*) from sqlite_master where type='table' AND name=?;";
    let count: i64 = tx.query_row(sql, ["users"], |row| row.get(0))?;
    Ok(count > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::helper::create_tmp_directory;

    #[test]
    fn test_create_and_get() -> Fallible<()> {
        let mut db = Database::in_memory()?;
        let created = db.create_user("hanako", "Hanako", "hanako@example.com")?;
        let fetched = db.get_user("hanako")?;
        assert_eq!(created, fetched);
        assert_eq!(db.user_count()?, 1);
        Ok(())
    }

    #[test]
    fn test_create_existing_user() -> Fallible<()> {
        let mut db = Database::in_memory()?;
        db.create_user("taro", "Taro", "taro@example.com")?;
        let err = db.create_user("taro", "Other", "other@example.com").err().unwrap();
        assert_eq!(err.to_string(), "error: user already exists: \"taro\"");
        assert_eq!(db.get_user("taro")?.name, "Taro");
        Ok(())
    }

    #[test]
    fn test_get_missing_user() -> Fallible<()> {
        let db = Database::in_memory()?;
        let err = db.get_user("nobody").err().unwrap();
        assert_eq!(err.to_string(), "error: failed to retrieve user: \"nobody\"");
        Ok(())
    }

    #[test]
    fn test_reopen_keeps_users() -> Fallible<()> {
        let dir = create_tmp_directory()?;
        let path = dir.join("kanadrill.db");
        let path = path.to_str().unwrap();
        {
            let mut db = Database::new(path)?;
            db.create_user("yuki", "Yuki", "yuki@example.com")?;
        }
        let db = Database::new(path)?;
        assert_eq!(db.get_user("yuki")?.email, "yuki@example.com");
        Ok(())
    }
}
