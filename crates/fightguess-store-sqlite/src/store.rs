//! [`SqliteSaveStore`] — the SQLite implementation of [`SaveStore`].

use std::path::Path;

use chrono::Utc;
use rusqlite::OptionalExtension as _;

use fightguess_core::{select::DateKey, session::Snapshot, store::SaveStore};

use crate::{
  Error, Result,
  encode::{decode_snapshot, encode_dt, encode_snapshot},
  schema::SCHEMA,
};

/// A Fight Guess save store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteSaveStore {
  pub(crate) conn: tokio_rusqlite::Connection,
}

impl SqliteSaveStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

// ─── SaveStore impl ──────────────────────────────────────────────────────────

impl SaveStore for SqliteSaveStore {
  type Error = Error;

  async fn load(&self, key: &DateKey) -> Result<Option<Snapshot>> {
    let key_str = key.as_str().to_owned();

    let raw: Option<String> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              "SELECT snapshot FROM saves WHERE date_key = ?1",
              rusqlite::params![key_str],
              |row| row.get(0),
            )
            .optional()?,
        )
      })
      .await?;

    // An unreadable stored snapshot is equivalent to no snapshot at all.
    Ok(raw.as_deref().and_then(decode_snapshot))
  }

  async fn save(&self, key: &DateKey, snapshot: &Snapshot) -> Result<()> {
    let key_str = key.as_str().to_owned();
    let snapshot_json = encode_snapshot(snapshot)?;
    let updated_at = encode_dt(Utc::now());

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT OR REPLACE INTO saves (date_key, snapshot, updated_at)
           VALUES (?1, ?2, ?3)",
          rusqlite::params![key_str, snapshot_json, updated_at],
        )?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  async fn delete(&self, key: &DateKey) -> Result<bool> {
    let key_str = key.as_str().to_owned();

    let affected = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "DELETE FROM saves WHERE date_key = ?1",
          rusqlite::params![key_str],
        )?)
      })
      .await?;

    Ok(affected > 0)
  }
}
