use std::path::Path;
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use rusqlite::{Connection, params};

use super::schema::SCHEMA;
use crate::error::Result;
use crate::types::{Asset, Component};

/// SQLite store for mirrored metadata.
///
/// Append-only: each save is a plain INSERT returning the new surrogate
/// key, with no natural-key lookup first. Mirroring the same remote
/// state twice therefore produces duplicate rows — run it against an
/// empty database.
pub struct MirrorStore {
    conn: Mutex<Connection>,
}

impl MirrorStore {
    pub fn new<P: AsRef<Path>>(db_path: P) -> Result<Self> {
        let conn = Connection::open(db_path)?;

        conn.pragma_update(None, "foreign_keys", "ON")?;
        conn.pragma_update(None, "journal_mode", "WAL")?;

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn conn(&self) -> std::sync::MutexGuard<'_, Connection> {
        self.conn.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Returns a guard to the underlying database connection so callers
    /// can run their own queries against the mirrored data.
    pub fn connection(&self) -> std::sync::MutexGuard<'_, Connection> {
        self.conn()
    }

    /// Creates the three tables if absent. No migration logic; schema
    /// changes require manual intervention.
    pub fn initialize(&self) -> Result<()> {
        self.conn().execute_batch(SCHEMA)?;
        Ok(())
    }

    pub fn save_repository(&self, name: &str, format: &str) -> Result<i64> {
        let conn = self.conn();
        conn.execute(
            "INSERT INTO repositories (name, format) VALUES (?1, ?2)",
            params![name, format],
        )?;
        Ok(conn.last_insert_rowid())
    }

    pub fn save_component(&self, component: &Component, repository_id: i64) -> Result<i64> {
        let conn = self.conn();
        conn.execute(
            "INSERT INTO components (name, format, \"group\", version, repository_id)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                component.name,
                component.format,
                component.group,
                component.version,
                repository_id,
            ],
        )?;
        Ok(conn.last_insert_rowid())
    }

    pub fn save_asset(&self, asset: &Asset, repository_id: i64) -> Result<i64> {
        let conn = self.conn();
        conn.execute(
            "INSERT INTO assets (name, asset_id, file_size, last_modified, last_downloaded,
                                 uploaded_by, blob_created, blob_store_name, format, path,
                                 download_url, content_type, repository_id)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)",
            params![
                asset.path.as_deref().unwrap_or(&asset.id),
                asset.id,
                asset.file_size,
                asset.last_modified.as_ref().map(format_datetime),
                asset.last_downloaded.as_ref().map(format_datetime),
                asset.uploader,
                asset.blob_created.as_ref().map(format_datetime),
                asset.blob_store_name,
                asset.format,
                asset.path,
                asset.download_url,
                asset.content_type,
                repository_id,
            ],
        )?;
        Ok(conn.last_insert_rowid())
    }
}

fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339()
}
