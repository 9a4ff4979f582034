//! Error types for `fightguess-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// A roster with zero fighters cannot host a game; there is nothing to
  /// select a daily secret from.
  #[error("roster is empty")]
  EmptyRoster,

  #[error("serialization error: {0}")]
  Serialization(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
