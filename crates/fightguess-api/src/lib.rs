//! JSON/plain-text HTTP layer for Fight Guess.
//!
//! Exposes an axum [`Router`] over the daily game, backed by any
//! [`SaveStore`]. One save slot per calendar date; the session endpoints all
//! accept an optional `date` parameter for clients whose local date differs
//! from the server's.

pub mod error;
pub mod roster;
pub mod session;

pub use error::ApiError;

use std::{path::PathBuf, sync::Arc};

use axum::{
  Router,
  routing::{get, post},
};
use fightguess_core::{roster::Roster, store::SaveStore};
use serde::Deserialize;
use tower_http::trace::TraceLayer;

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` and
/// `FIGHTGUESS_*` environment variables. Every field has a default, so the
/// server starts without a config file.
#[derive(Deserialize, Clone)]
pub struct ServerConfig {
  #[serde(default = "default_host")]
  pub host:        String,
  #[serde(default = "default_port")]
  pub port:        u16,
  #[serde(default = "default_roster_path")]
  pub roster_path: PathBuf,
  #[serde(default = "default_store_path")]
  pub store_path:  PathBuf,
}

fn default_host() -> String { "127.0.0.1".to_string() }
fn default_port() -> u16 { 8080 }
fn default_roster_path() -> PathBuf { PathBuf::from("data/fighters.json") }
fn default_store_path() -> PathBuf { PathBuf::from("fightguess.db") }

// ─── Application state ────────────────────────────────────────────────────────

/// Shared state threaded through all axum handlers.
pub struct AppState<S: SaveStore> {
  pub store:  Arc<S>,
  pub roster: Arc<Roster>,
}

// Manual impl: `derive(Clone)` would demand `S: Clone`, which the Arc
// fields never need.
impl<S: SaveStore> Clone for AppState<S> {
  fn clone(&self) -> Self {
    Self {
      store:  self.store.clone(),
      roster: self.roster.clone(),
    }
  }
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build an axum [`Router`] for the game server.
pub fn router<S>(state: AppState<S>) -> Router
where
  S: SaveStore + 'static,
{
  Router::new()
    .route("/session", get(session::view::<S>))
    .route("/guess",   post(session::guess::<S>))
    .route("/reset",   post(session::reset::<S>))
    .route("/share",   get(session::share::<S>))
    .route("/roster",  get(roster::list::<S>))
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}

// ─── Integration tests ────────────────────────────────────────────────────────
