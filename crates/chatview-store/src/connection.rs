//! Store connection management

use rusqlite::{Connection, OpenFlags, OptionalExtension};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Store errors
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Store error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Store version mismatch: expected {expected}, found {found}")]
    VersionMismatch { expected: i32, found: i32 },
}

/// Expected store version
pub const STORE_VERSION: i32 = 1;

/// Default store path
pub fn default_store_path() -> PathBuf {
    let home = std::env::var("HOME").unwrap_or_else(|_| "~".to_string());
    PathBuf::from(home).join(".chatview").join("chats.db")
}

/// Read-write blob store connection
pub struct ChatStore {
    pub(crate) conn: Connection,
    path: PathBuf,
}

impl ChatStore {
    /// Open or create the store at the default path
    pub fn open_or_create_default() -> Result<Self, StoreError> {
        Self::open_or_create(&default_store_path())
    }

    /// Open or create the store at a specific path
    pub fn open_or_create<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();

        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open_with_flags(
            &path,
            OpenFlags::SQLITE_OPEN_READ_WRITE
                | OpenFlags::SQLITE_OPEN_CREATE
                | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous = NORMAL;",
        )?;

        let store = Self { conn, path };
        store.init_schema()?;

        Ok(store)
    }

    fn init_schema(&self) -> Result<(), StoreError> {
        self.conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS blobs (
                 key TEXT PRIMARY KEY,
                 value TEXT NOT NULL,
                 updated_at TEXT NOT NULL
             );
             CREATE TABLE IF NOT EXISTS metadata (
                 key TEXT PRIMARY KEY,
                 value TEXT NOT NULL
             );",
        )?;

        let version: Option<i32> = self
            .conn
            .query_row(
                "SELECT CAST(value AS INTEGER) FROM metadata WHERE key = 'version'",
                [],
                |row| row.get(0),
            )
            .optional()?;

        match version {
            None => {
                self.conn.execute(
                    "INSERT INTO metadata (key, value) VALUES ('version', ?1)",
                    [STORE_VERSION.to_string()],
                )?;
                Ok(())
            }
            Some(v) if v != STORE_VERSION => Err(StoreError::VersionMismatch {
                expected: STORE_VERSION,
                found: v,
            }),
            Some(_) => Ok(()),
        }
    }

    /// Read a blob by key; absent keys are `None`
    pub fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let value = self
            .conn
            .query_row("SELECT value FROM blobs WHERE key = ?1", [key], |row| {
                row.get(0)
            })
            .optional()?;
        Ok(value)
    }

    /// Write a blob, replacing any previous value in one statement
    pub fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let updated_at = chrono::Utc::now().to_rfc3339();
        self.conn.execute(
            "INSERT OR REPLACE INTO blobs (key, value, updated_at) VALUES (?1, ?2, ?3)",
            [key, value, updated_at.as_str()],
        )?;
        Ok(())
    }

    /// Get the store path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get store statistics
    pub fn stats(&self) -> Result<StoreStats, StoreError> {
        let version: i32 = self
            .conn
            .query_row(
                "SELECT CAST(value AS INTEGER) FROM metadata WHERE key = 'version'",
                [],
                |row| row.get(0),
            )
            .unwrap_or(0);

        let blob_count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM blobs", [], |row| row.get(0))?;

        let last_updated: Option<String> = self
            .conn
            .query_row("SELECT MAX(updated_at) FROM blobs", [], |row| row.get(0))
            .unwrap_or(None);

        let size_bytes = std::fs::metadata(&self.path).map(|m| m.len()).unwrap_or(0);

        Ok(StoreStats {
            version,
            blob_count,
            last_updated,
            store_path: self.path.clone(),
            size_bytes,
        })
    }
}

/// Store statistics
#[derive(Debug, Clone)]
pub struct StoreStats {
    pub version: i32,
    pub blob_count: i64,
    pub last_updated: Option<String>,
    pub store_path: PathBuf,
    pub size_bytes: u64,
}

impl StoreStats {
    /// Format store size as human-readable string
    pub fn format_size(&self) -> String {
        let bytes = self.size_bytes as f64;
        if bytes < 1024.0 {
            format!("{} B", bytes)
        } else if bytes < 1024.0 * 1024.0 {
            format!("{:.1} KB", bytes / 1024.0)
        } else {
            format!("{:.1} MB", bytes / (1024.0 * 1024.0))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_path() {
        let path = default_store_path();
        assert!(path.to_string_lossy().contains(".chatview"));
        assert!(path.to_string_lossy().ends_with("chats.db"));
    }

    #[test]
    fn test_get_set_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = ChatStore::open_or_create(dir.path().join("chats.db")).unwrap();

        assert!(store.get("missing").unwrap().is_none());

        store.set("greeting", "hello").unwrap();
        assert_eq!(store.get("greeting").unwrap().as_deref(), Some("hello"));

        store.set("greeting", "replaced").unwrap();
        assert_eq!(store.get("greeting").unwrap().as_deref(), Some("replaced"));
    }

    #[test]
    fn test_reopen_keeps_data_and_version() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chats.db");

        {
            let store = ChatStore::open_or_create(&path).unwrap();
            store.set("key", "value").unwrap();
        }

        let store = ChatStore::open_or_create(&path).unwrap();
        assert_eq!(store.get("key").unwrap().as_deref(), Some("value"));

        let stats = store.stats().unwrap();
        assert_eq!(stats.version, STORE_VERSION);
        assert_eq!(stats.blob_count, 1);
    }
}
