//! Verdicts — the per-attribute feedback a guess earns against the secret.

use serde::{Deserialize, Serialize};

// ─── Verdict ─────────────────────────────────────────────────────────────────

/// The outcome of comparing one attribute of a guess against the secret.
///
/// Ordered attributes (age, weight) yield `Up`/`Down` hints; nominal
/// attributes (gender, champion, country) only ever yield `Match`/`Mismatch`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
  /// The guessed value equals the secret's.
  Match,
  /// The secret's value is higher than the guessed one.
  Up,
  /// The secret's value is lower than the guessed one.
  Down,
  /// The values differ and no direction applies.
  Mismatch,
}

impl Verdict {
  pub fn is_match(self) -> bool { matches!(self, Self::Match) }
}

// ─── Attribute ───────────────────────────────────────────────────────────────

/// The five compared attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Attribute {
  Age,
  Weight,
  Gender,
  Champion,
  Country,
}

impl Attribute {
  /// Comparison order. This order is a wire contract: share lines, rendered
  /// rows, and API payloads all follow it.
  pub const ORDER: [Attribute; 5] = [
    Self::Age,
    Self::Weight,
    Self::Gender,
    Self::Champion,
    Self::Country,
  ];

  /// Column heading for table rendering.
  pub fn label(self) -> &'static str {
    match self {
      Self::Age => "Age",
      Self::Weight => "Weight",
      Self::Gender => "Gender",
      Self::Champion => "Champion",
      Self::Country => "Country",
    }
  }
}

// ─── AttributeVerdict ────────────────────────────────────────────────────────

/// A verdict paired with the guessed value it was computed from, so callers
/// can display a cell without re-deriving anything.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeVerdict {
  pub verdict: Verdict,
  /// Display form of the guessed attribute, e.g. "34", "Lightweight", "Yes".
  pub value:   String,
}

// ─── VerdictRow ──────────────────────────────────────────────────────────────

/// Exactly one verdict per attribute, in [`Attribute::ORDER`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerdictRow {
  pub age:      AttributeVerdict,
  pub weight:   AttributeVerdict,
  pub gender:   AttributeVerdict,
  pub champion: AttributeVerdict,
  pub country:  AttributeVerdict,
}

impl VerdictRow {
  /// Iterate the cells in the fixed attribute order.
  pub fn iter(&self) -> impl Iterator<Item = (Attribute, &AttributeVerdict)> {
    [
      (Attribute::Age, &self.age),
      (Attribute::Weight, &self.weight),
      (Attribute::Gender, &self.gender),
      (Attribute::Champion, &self.champion),
      (Attribute::Country, &self.country),
    ]
    .into_iter()
  }

  /// The five verdicts alone, in order.
  pub fn verdicts(&self) -> [Verdict; 5] {
    [
      self.age.verdict,
      self.weight.verdict,
      self.gender.verdict,
      self.champion.verdict,
      self.country.verdict,
    ]
  }

  /// True when every attribute matched; holds exactly for a winning guess.
  pub fn all_match(&self) -> bool {
    self.verdicts().iter().all(|v| v.is_match())
  }
}
