//! The `SaveStore` trait and supporting in-memory implementation.
//!
//! The trait is implemented by storage backends (e.g.
//! `fightguess-store-sqlite`). Higher layers depend on this abstraction,
//! not on any concrete backend.

use std::{
  collections::HashMap,
  convert::Infallible,
  future::Future,
  sync::{PoisonError, RwLock},
};

use crate::{select::DateKey, session::Snapshot};

// ─── Trait ───────────────────────────────────────────────────────────────────

/// Abstraction over daily-session persistence, keyed by [`DateKey`].
///
/// Loading is fail-soft: a key that was never written, and a key whose
/// stored bytes cannot be decoded, both load as `None` — a fresh day.
/// Saving is a plain upsert; concurrent writers race and the last write
/// wins, which the game accepts for its single-player deployments.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait SaveStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Retrieve the snapshot for `key`, if one is stored and readable.
  fn load<'a>(
    &'a self,
    key: &'a DateKey,
  ) -> impl Future<Output = Result<Option<Snapshot>, Self::Error>> + Send + 'a;

  /// Store `snapshot` under `key`, replacing any previous value.
  fn save<'a>(
    &'a self,
    key: &'a DateKey,
    snapshot: &'a Snapshot,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + 'a;

  /// Remove the snapshot for `key`. Idempotent; returns `true` if a
  /// snapshot existed.
  fn delete<'a>(
    &'a self,
    key: &'a DateKey,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + 'a;
}

// ─── In-memory implementation ────────────────────────────────────────────────

/// A [`SaveStore`] over a guarded map, for tests and in-process embedding.
#[derive(Debug, Default)]
pub struct MemoryStore {
  saves: RwLock<HashMap<String, Snapshot>>,
}

impl MemoryStore {
  pub fn new() -> Self { Self::default() }
}

impl SaveStore for MemoryStore {
  type Error = Infallible;

  async fn load(&self, key: &DateKey) -> Result<Option<Snapshot>, Infallible> {
    let saves = self.saves.read().unwrap_or_else(PoisonError::into_inner);
    Ok(saves.get(key.as_str()).cloned())
  }

  async fn save(
    &self,
    key: &DateKey,
    snapshot: &Snapshot,
  ) -> Result<(), Infallible> {
    let mut saves = self.saves.write().unwrap_or_else(PoisonError::into_inner);
    saves.insert(key.as_str().to_owned(), snapshot.clone());
    Ok(())
  }

  async fn delete(&self, key: &DateKey) -> Result<bool, Infallible> {
    let mut saves = self.saves.write().unwrap_or_else(PoisonError::into_inner);
    Ok(saves.remove(key.as_str()).is_some())
  }
}
