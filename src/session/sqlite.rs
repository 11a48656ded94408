use rusqlite::{Connection, params, OptionalExtension};
use std::sync::{Arc, Mutex, MutexGuard};
use async_trait::async_trait;
use chrono::Utc;

use crate::session::SessionStore;
use crate::error::{Result, SearchError};

/// SQLite-backed session store
///
/// Schema:
/// ```sql
/// CREATE TABLE session_store (
///     key TEXT PRIMARY KEY,
///     value TEXT NOT NULL,
///     updated_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
/// );
/// ```
pub struct SqliteSessionStore {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteSessionStore {
    /// Open (or create) the store; `":memory:"` for a throwaway one
    pub async fn new(db_path: &str) -> Result<Self> {
        let conn = Connection::open(db_path)
            .map_err(SearchError::Database)?;

        conn.execute(
            "CREATE TABLE IF NOT EXISTS session_store (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL,
                updated_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
            )",
            [],
        )?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    fn conn(&self) -> Result<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|_| SearchError::Store("sqlite connection lock poisoned".to_string()))
    }

    /// Number of stored keys
    pub async fn len(&self) -> Result<u64> {
        let conn = self.conn()?;
        let count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM session_store",
            [],
            |row| row.get(0),
        )?;
        Ok(count as u64)
    }
}

#[async_trait]
impl SessionStore for SqliteSessionStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let conn = self.conn()?;

        let value = conn
            .query_row(
                "SELECT value FROM session_store WHERE key = ?",
                params![key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;

        Ok(value)
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let conn = self.conn()?;

        conn.execute(
            "INSERT OR REPLACE INTO session_store (key, value, updated_at) VALUES (?1, ?2, ?3)",
            params![key, value, Utc::now().to_rfc3339()],
        )?;

        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        let conn = self.conn()?;
        conn.execute("DELETE FROM session_store WHERE key = ?", params![key])?;
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        let conn = self.conn()?;
        let deleted = conn.execute("DELETE FROM session_store", [])?;
        tracing::debug!("Cleared {} session keys", deleted);
        Ok(())
    }
}
