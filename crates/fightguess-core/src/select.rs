//! Daily secret selection — a date key hashed onto a roster index.
//!
//! The hash is 32-bit FNV-1a over the key's UTF-8 bytes. It is byte-stable
//! across processes and platforms, so every player sees the same secret for
//! the same calendar day without any coordination.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

// ─── Hash ────────────────────────────────────────────────────────────────────

const FNV_SEED: u32 = 0x811C_9DC5;
const FNV_PRIME: u32 = 0x0100_0193;

/// 32-bit FNV-1a: xor each byte into the state, then multiply by the FNV
/// prime with wrapping arithmetic.
pub fn fnv1a_32(bytes: &[u8]) -> u32 {
  let mut hash = FNV_SEED;
  for &byte in bytes {
    hash ^= u32::from(byte);
    hash = hash.wrapping_mul(FNV_PRIME);
  }
  hash
}

/// Map a date key onto an index into a roster of `len` fighters.
///
/// An empty roster is a configuration error, never a panic.
pub fn pick_index(key: &str, len: usize) -> Result<usize> {
  if len == 0 {
    return Err(Error::EmptyRoster);
  }
  Ok(fnv1a_32(key.as_bytes()) as usize % len)
}

// ─── DateKey ─────────────────────────────────────────────────────────────────

/// The string addressing one calendar day of play: `fightguess_YYYY-MM-DD`.
///
/// The same key drives both secret selection and save persistence, so a save
/// can never pair with the wrong day's secret. Keys are built from the
/// player's local calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DateKey(String);

impl DateKey {
  pub const PREFIX: &'static str = "fightguess_";

  pub fn for_date(date: NaiveDate) -> Self {
    Self(format!("{}{}", Self::PREFIX, date.format("%Y-%m-%d")))
  }

  pub fn as_str(&self) -> &str { &self.0 }

  /// The bare `YYYY-MM-DD` part, used in share headers.
  pub fn date_label(&self) -> &str {
    self.0.strip_prefix(Self::PREFIX).unwrap_or(&self.0)
  }
}

impl fmt::Display for DateKey {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}
