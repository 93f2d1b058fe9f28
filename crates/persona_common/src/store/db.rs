//! Database connection management for the diagnosis store.

use anyhow::{Context, Result};
use rusqlite::Connection;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::info;

/// Database location based on execution mode.
#[derive(Debug, Clone)]
pub enum DbLocation {
    /// User mode: $XDG_DATA_HOME/persona/diagnoses.db or
    /// ~/.local/share/persona/diagnoses.db
    User,
    /// Custom path, used by tests and the --db override.
    Custom(PathBuf),
}

impl DbLocation {
    pub fn path(&self) -> Result<PathBuf> {
        match self {
            DbLocation::User => {
                // Try XDG_DATA_HOME first, fall back to ~/.local/share
                let base_dir = if let Ok(xdg_data) = std::env::var("XDG_DATA_HOME") {
                    PathBuf::from(xdg_data)
                } else if let Ok(home) = std::env::var("HOME") {
                    PathBuf::from(home).join(".local/share")
                } else {
                    anyhow::bail!("Could not determine user data directory");
                };
                Ok(base_dir.join("persona").join("diagnoses.db"))
            }
            DbLocation::Custom(path) => Ok(path.clone()),
        }
    }
}

/// SQLite connection behind a mutex (single connection is plenty: every
/// diagnosis run is independent and writes are tiny).
pub struct PersonaDb {
    conn: Arc<Mutex<Connection>>,
}

impl PersonaDb {
    /// Open or create the database at the specified location.
    pub async fn open(location: DbLocation) -> Result<Self> {
        let db_path = location.path()?;

        // Ensure parent directory exists
        if let Some(parent) = db_path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .context("Failed to create database directory")?;
        }

        info!("Opening diagnosis database at: {}", db_path.display());

        let conn = tokio::task::spawn_blocking(move || -> Result<Connection> {
            let conn = Connection::open(&db_path).context("Failed to open SQLite database")?;

            // WAL mode for better concurrency
            conn.pragma_update(None, "journal_mode", "WAL")
                .context("Failed to enable WAL mode")?;
            conn.pragma_update(None, "synchronous", "NORMAL")
                .context("Failed to set synchronous mode")?;
            conn.pragma_update(None, "foreign_keys", "ON")
                .context("Failed to enable foreign keys")?;

            Ok(conn)
        })
        .await??;

        let db = Self {
            conn: Arc::new(Mutex::new(conn)),
        };

        db.initialize_schema().await?;

        Ok(db)
    }

    /// Shared connection handle for blocking closures.
    pub fn conn(&self) -> Arc<Mutex<Connection>> {
        Arc::clone(&self.conn)
    }

    /// Create tables and indexes if they do not exist yet.
    async fn initialize_schema(&self) -> Result<()> {
        let conn = self.conn();

        tokio::task::spawn_blocking(move || -> Result<()> {
            let conn = conn.blocking_lock();

            conn.execute(
                "CREATE TABLE IF NOT EXISTS diagnoses (
                    id INTEGER PRIMARY KEY AUTOINCREMENT,
                    user_id TEXT NOT NULL,
                    robot_id TEXT NOT NULL,
                    location TEXT NOT NULL,
                    gender TEXT NOT NULL,
                    age_group TEXT NOT NULL,
                    occupation TEXT NOT NULL,
                    responses TEXT NOT NULL,
                    category TEXT NOT NULL,
                    tally TEXT NOT NULL,
                    created_at DATETIME NOT NULL
                )",
                [],
            )?;

            conn.execute(
                "CREATE INDEX IF NOT EXISTS idx_diagnoses_user_robot
                 ON diagnoses(user_id, robot_id)",
                [],
            )?;
            conn.execute(
                "CREATE INDEX IF NOT EXISTS idx_diagnoses_created
                 ON diagnoses(created_at)",
                [],
            )?;

            conn.execute(
                "CREATE TABLE IF NOT EXISTS robots (
                    id INTEGER PRIMARY KEY AUTOINCREMENT,
                    user_id TEXT NOT NULL,
                    name TEXT NOT NULL,
                    description TEXT NOT NULL DEFAULT '',
                    created_at DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP,
                    UNIQUE(user_id, name)
                )",
                [],
            )?;

            Ok(())
        })
        .await??;

        Ok(())
    }
}
