//! Roster — the fixed, non-empty list of fighters a day's game draws from.

use crate::{
  Error, Result,
  fighter::{Fighter, FighterId},
  select::{DateKey, fnv1a_32},
};

/// All fighters available for guessing. Non-empty by construction, which
/// makes daily selection total.
#[derive(Debug, Clone)]
pub struct Roster {
  fighters: Vec<Fighter>,
}

impl Roster {
  /// Wrap a fighter list. Fails on an empty list; any further validation
  /// (unique ids, unique names) is the roster author's responsibility.
  pub fn new(fighters: Vec<Fighter>) -> Result<Self> {
    if fighters.is_empty() {
      return Err(Error::EmptyRoster);
    }
    Ok(Self { fighters })
  }

  /// Decode a roster from its JSON wire format: an array of camelCase
  /// fighter records.
  pub fn from_json_str(raw: &str) -> Result<Self> {
    let fighters: Vec<Fighter> = serde_json::from_str(raw)?;
    Self::new(fighters)
  }

  pub fn len(&self) -> usize { self.fighters.len() }

  pub fn is_empty(&self) -> bool { self.fighters.is_empty() }

  pub fn fighters(&self) -> &[Fighter] { &self.fighters }

  /// Look up a fighter by id. Saves reference ids; an id that has left the
  /// roster simply resolves to `None`.
  pub fn get(&self, id: &FighterId) -> Option<&Fighter> {
    self.fighters.iter().find(|f| &f.id == id)
  }

  /// Resolve player input to a fighter: trim, case-fold, then exact name
  /// match. First match wins. No fuzzy or prefix matching.
  pub fn resolve(&self, input: &str) -> Option<&Fighter> {
    let needle = input.trim().to_lowercase();
    self
      .fighters
      .iter()
      .find(|f| f.name.to_lowercase() == needle)
  }

  /// Display names in alphabetical order, for pick lists.
  pub fn names_sorted(&self) -> Vec<String> {
    let mut names: Vec<String> =
      self.fighters.iter().map(|f| f.name.clone()).collect();
    names.sort_unstable();
    names
  }

  /// The fighter this date key selects. Total because the roster is
  /// non-empty.
  pub fn secret_for(&self, key: &DateKey) -> &Fighter {
    let idx = fnv1a_32(key.as_str().as_bytes()) as usize % self.fighters.len();
    &self.fighters[idx]
  }
}
