//! Encoding and decoding between the in-memory snapshot and the plain-text
//! representations stored in SQLite columns.
//!
//! Snapshots are stored as compact JSON; timestamps as RFC 3339 strings.
//! Decoding is deliberately tolerant: a row this build cannot read is
//! logged and treated as absent, so a corrupt save can never wedge a day.

use chrono::{DateTime, Utc};
use fightguess_core::session::Snapshot;

use crate::Result;

pub fn encode_snapshot(snapshot: &Snapshot) -> Result<String> {
  Ok(serde_json::to_string(snapshot)?)
}

/// Decode a stored snapshot, or `None` if the stored text is unreadable.
pub fn decode_snapshot(raw: &str) -> Option<Snapshot> {
  match serde_json::from_str(raw) {
    Ok(snapshot) => Some(snapshot),
    Err(e) => {
      tracing::warn!("discarding unreadable session snapshot: {e}");
      None
    }
  }
}

pub fn encode_dt(dt: DateTime<Utc>) -> String { dt.to_rfc3339() }
