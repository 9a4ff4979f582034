//! Fighter — one roster entry, the unit both guesses and secrets refer to.
//!
//! Fighters are immutable once loaded. All comparison feedback is derived
//! from the five attributes here; nothing about a fighter is ever persisted
//! by the game, only their [`FighterId`].

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ─── FighterId ───────────────────────────────────────────────────────────────

/// Stable identifier for a fighter, unique within a roster and stable across
/// days. Saved sessions record these, never names.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FighterId(String);

impl FighterId {
  pub fn new(id: impl Into<String>) -> Self { Self(id.into()) }

  pub fn as_str(&self) -> &str { &self.0 }
}

impl fmt::Display for FighterId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

impl From<&str> for FighterId {
  fn from(s: &str) -> Self { Self(s.to_owned()) }
}

// ─── Gender ──────────────────────────────────────────────────────────────────

/// Nominal category; compared by equality only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
  Male,
  Female,
}

impl fmt::Display for Gender {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(match self {
      Self::Male => "Male",
      Self::Female => "Female",
    })
  }
}

// ─── WeightClass ─────────────────────────────────────────────────────────────

/// Weight division, ordered lightest to heaviest.
///
/// The nine named divisions carry an ordinal used for directional hints.
/// Roster files may contain divisions outside that vocabulary (exhibition
/// classes, historic names); those decode to [`WeightClass::Other`] and
/// compare by plain equality, with no direction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum WeightClass {
  Strawweight,
  Flyweight,
  Bantamweight,
  Featherweight,
  Lightweight,
  Welterweight,
  Middleweight,
  LightHeavyweight,
  Heavyweight,
  /// A division outside the ordered vocabulary, kept verbatim.
  Other(String),
}

impl WeightClass {
  /// Position in the lightest-to-heaviest order, or `None` for a division
  /// outside the vocabulary.
  pub fn ordinal(&self) -> Option<usize> {
    match self {
      Self::Strawweight => Some(0),
      Self::Flyweight => Some(1),
      Self::Bantamweight => Some(2),
      Self::Featherweight => Some(3),
      Self::Lightweight => Some(4),
      Self::Welterweight => Some(5),
      Self::Middleweight => Some(6),
      Self::LightHeavyweight => Some(7),
      Self::Heavyweight => Some(8),
      Self::Other(_) => None,
    }
  }

  /// Display name, matching the roster wire format.
  pub fn label(&self) -> &str {
    match self {
      Self::Strawweight => "Strawweight",
      Self::Flyweight => "Flyweight",
      Self::Bantamweight => "Bantamweight",
      Self::Featherweight => "Featherweight",
      Self::Lightweight => "Lightweight",
      Self::Welterweight => "Welterweight",
      Self::Middleweight => "Middleweight",
      Self::LightHeavyweight => "Light Heavyweight",
      Self::Heavyweight => "Heavyweight",
      Self::Other(name) => name,
    }
  }
}

impl From<String> for WeightClass {
  fn from(s: String) -> Self {
    match s.as_str() {
      "Strawweight" => Self::Strawweight,
      "Flyweight" => Self::Flyweight,
      "Bantamweight" => Self::Bantamweight,
      "Featherweight" => Self::Featherweight,
      "Lightweight" => Self::Lightweight,
      "Welterweight" => Self::Welterweight,
      "Middleweight" => Self::Middleweight,
      "Light Heavyweight" => Self::LightHeavyweight,
      "Heavyweight" => Self::Heavyweight,
      _ => Self::Other(s),
    }
  }
}

impl From<WeightClass> for String {
  fn from(w: WeightClass) -> Self {
    match w {
      WeightClass::Other(name) => name,
      named => named.label().to_owned(),
    }
  }
}

impl fmt::Display for WeightClass {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.label())
  }
}

// ─── Fighter ─────────────────────────────────────────────────────────────────

/// One roster entry. Field names follow the roster JSON wire format
/// (camelCase keys, ISO date of birth).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fighter {
  pub id:            FighterId,
  /// Display name; guesses resolve against this, case-insensitively.
  pub name:          String,
  /// Date of birth. Ages are derived from this at comparison time and are
  /// never stored.
  pub dob:           NaiveDate,
  pub weight_class:  WeightClass,
  pub gender:        Gender,
  /// Whether the fighter has ever held a title.
  pub ever_champion: bool,
  pub birth_country: String,
}
