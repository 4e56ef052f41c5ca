// SPDX-License-Identifier: Apache-2.0

//! SQL injection via string concatenation (CWE-89).
//!
//! WARNING: `lookup_user_vulnerable` is intentionally injectable. It exists
//! to be flagged by the scanner and demonstrated in training sessions.
//! DO NOT copy it into production code. The paired `lookup_user_safe` shows
//! the parameterized form.

use rusqlite::{Connection, OptionalExtension, params};
use serde::Serialize;

use crate::error::PitfallError;

/// Schema and seed rows for the throwaway demo database.
const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS users (
    id INTEGER PRIMARY KEY,
    username TEXT NOT NULL UNIQUE,
    email TEXT NOT NULL
);
";

const SEED_USERS: &[(&str, &str)] = &[
    ("alice", "alice@example.com"),
    ("bob", "bob@example.com"),
    ("carol", "carol@example.com"),
];

/// A row from the demo `users` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserRecord {
    /// Primary key.
    pub id: i64,
    /// Login name, the lookup key in both demo queries.
    pub username: String,
    /// Contact address, returned to show data exposure on injection.
    pub email: String,
}

/// Opens (and seeds, if empty) the trivial local demo database.
///
/// The original teaching script used a bare `example.db` file next to the
/// script; the path is a parameter here so tests and the CLI can point it at
/// a temp file.
pub fn demo_database(path: &str) -> Result<Connection, PitfallError> {
    let conn = Connection::open(path)?;
    conn.execute_batch(SCHEMA)?;

    let count: i64 = conn.query_row("SELECT COUNT(*) FROM users", [], |row| row.get(0))?;
    if count == 0 {
        let mut stmt = conn.prepare("INSERT INTO users (username, email) VALUES (?1, ?2)")?;
        for (username, email) in SEED_USERS {
            stmt.execute(params![username, email])?;
        }
        tracing::debug!(path, rows = SEED_USERS.len(), "Seeded demo database");
    }

    Ok(conn)
}

/// Looks up a user by building the query through string concatenation.
///
/// Untrusted input is pasted directly between the quotes, so a payload like
/// `' OR '1'='1` rewrites the WHERE clause and returns a row the caller never
/// asked for. A payload with an unbalanced quote instead surfaces as a SQL
/// syntax error.
pub fn lookup_user_vulnerable(
    conn: &Connection,
    username: &str,
) -> Result<Option<UserRecord>, PitfallError> {
    // Vulnerable to SQL injection
    let query = format!("SELECT id, username, email FROM users WHERE username = '{username}'");
    tracing::debug!(%query, "Executing concatenated query");

    let record = conn
        .query_row(&query, [], |row| {
            Ok(UserRecord {
                id: row.get(0)?,
                username: row.get(1)?,
                email: row.get(2)?,
            })
        })
        .optional()?;

    Ok(record)
}

/// Looks up a user with a bound parameter.
///
/// The placeholder keeps the input in the data plane: the injection payload
/// is compared literally against the `username` column and matches nothing.
pub fn lookup_user_safe(
    conn: &Connection,
    username: &str,
) -> Result<Option<UserRecord>, PitfallError> {
    let record = conn
        .query_row(
            "SELECT id, username, email FROM users WHERE username = ?1",
            params![username],
            |row| {
                Ok(UserRecord {
                    id: row.get(0)?,
                    username: row.get(1)?,
                    email: row.get(2)?,
                })
            },
        )
        .optional()?;

    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_db() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(SCHEMA).unwrap();
        let mut stmt = conn
            .prepare("INSERT INTO users (username, email) VALUES (?1, ?2)")
            .unwrap();
        for (username, email) in SEED_USERS {
            stmt.execute(params![username, email]).unwrap();
        }
        drop(stmt);
        conn
    }

    #[test]
    fn test_demo_database_seeds_once() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("example.db");
        let path = path.to_str().unwrap();

        let conn = demo_database(path).unwrap();
        drop(conn);

        // Reopening must not duplicate the seed rows.
        let conn = demo_database(path).unwrap();
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM users", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, SEED_USERS.len() as i64);
    }

    #[test]
    fn test_both_lookups_agree_on_honest_input() {
        let conn = test_db();

        let vulnerable = lookup_user_vulnerable(&conn, "alice").unwrap();
        let safe = lookup_user_safe(&conn, "alice").unwrap();

        assert_eq!(vulnerable, safe);
        assert_eq!(vulnerable.unwrap().email, "alice@example.com");
    }

    #[test]
    fn test_unknown_user_returns_none() {
        let conn = test_db();

        assert!(lookup_user_vulnerable(&conn, "mallory").unwrap().is_none());
        assert!(lookup_user_safe(&conn, "mallory").unwrap().is_none());
        assert!(lookup_user_safe(&conn, "").unwrap().is_none());
    }

    #[test]
    fn test_injection_alters_query_semantics() {
        let conn = test_db();
        let payload = "' OR '1'='1";

        // The concatenated query degenerates to WHERE username = '' OR '1'='1'
        // and leaks the first row in the table.
        let leaked = lookup_user_vulnerable(&conn, payload).unwrap();
        assert_eq!(leaked.unwrap().username, "alice");

        // The bound parameter compares the payload literally.
        assert!(lookup_user_safe(&conn, payload).unwrap().is_none());
    }

    #[test]
    fn test_unbalanced_quote_breaks_vulnerable_query_only() {
        let conn = test_db();

        let result = lookup_user_vulnerable(&conn, "o'brien");
        assert!(matches!(result, Err(PitfallError::Database(_))));

        // Safe lookup handles the quote as data.
        assert!(lookup_user_safe(&conn, "o'brien").unwrap().is_none());
    }
}
