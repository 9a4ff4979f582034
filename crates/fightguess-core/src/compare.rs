//! The comparison engine — pure functions from fighter attributes to
//! verdicts.
//!
//! Nothing here touches state or the clock: ages are derived from a
//! caller-supplied date, so the same inputs always score the same way.

use std::cmp::Ordering;

use chrono::NaiveDate;

use crate::{
  fighter::{Fighter, WeightClass},
  verdict::{AttributeVerdict, Verdict, VerdictRow},
};

// ─── Age ─────────────────────────────────────────────────────────────────────

/// Whole years between `dob` and `today`, one less if the birthday has not
/// yet occurred this year. A `dob` on or after `today` counts as 0.
pub fn age_on(dob: NaiveDate, today: NaiveDate) -> u32 {
  today.years_since(dob).unwrap_or(0)
}

// ─── Sub-comparators ─────────────────────────────────────────────────────────

/// Compare two ordered values. `Up` means the secret's value is higher than
/// the guess, i.e. the player should aim up.
pub fn compare_ordered<T: Ord>(guess: T, secret: T) -> Verdict {
  match guess.cmp(&secret) {
    Ordering::Equal => Verdict::Match,
    Ordering::Less => Verdict::Up,
    Ordering::Greater => Verdict::Down,
  }
}

/// Compare two nominal values; never yields a direction.
pub fn compare_equal<T: PartialEq>(guess: T, secret: T) -> Verdict {
  if guess == secret { Verdict::Match } else { Verdict::Mismatch }
}

/// Compare weight classes by their position in the division order.
///
/// A division outside the known vocabulary has no position, so the
/// comparison degrades to plain equality and cannot hint a direction.
pub fn compare_weight(guess: &WeightClass, secret: &WeightClass) -> Verdict {
  match (guess.ordinal(), secret.ordinal()) {
    (Some(g), Some(s)) => compare_ordered(g, s),
    _ => compare_equal(guess, secret),
  }
}

// ─── Scoring ─────────────────────────────────────────────────────────────────

fn yes_no(flag: bool) -> &'static str {
  if flag { "Yes" } else { "No" }
}

/// Score one guess against the secret: all five attributes, in the fixed
/// order. Both ages are derived from `today` at call time.
pub fn score_guess(
  guess: &Fighter,
  secret: &Fighter,
  today: NaiveDate,
) -> VerdictRow {
  let guess_age  = age_on(guess.dob, today);
  let secret_age = age_on(secret.dob, today);

  VerdictRow {
    age:      AttributeVerdict {
      verdict: compare_ordered(guess_age, secret_age),
      value:   guess_age.to_string(),
    },
    weight:   AttributeVerdict {
      verdict: compare_weight(&guess.weight_class, &secret.weight_class),
      value:   guess.weight_class.label().to_owned(),
    },
    gender:   AttributeVerdict {
      verdict: compare_equal(guess.gender, secret.gender),
      value:   guess.gender.to_string(),
    },
    champion: AttributeVerdict {
      verdict: compare_equal(guess.ever_champion, secret.ever_champion),
      value:   yes_no(guess.ever_champion).to_owned(),
    },
    country:  AttributeVerdict {
      verdict: compare_equal(&guess.birth_country, &secret.birth_country),
      value:   guess.birth_country.clone(),
    },
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::fighter::{FighterId, Gender};

  fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
  }

  fn fighter(
    id: &str,
    dob: NaiveDate,
    weight: &str,
    gender: Gender,
    champion: bool,
    country: &str,
  ) -> Fighter {
    Fighter {
      id:            FighterId::from(id),
      name:          id.to_owned(),
      dob,
      weight_class:  WeightClass::from(weight.to_owned()),
      gender,
      ever_champion: champion,
      birth_country: country.to_owned(),
    }
  }

  // ── Age derivation ──────────────────────────────────────────────────────

  #[test]
  fn age_counts_whole_years() {
    assert_eq!(age_on(d(1987, 7, 19), d(2024, 1, 1)), 36);
  }

  #[test]
  fn age_decrements_before_birthday_and_bumps_on_it() {
    let dob = d(2000, 5, 10);
    assert_eq!(age_on(dob, d(2024, 5, 9)), 23);
    assert_eq!(age_on(dob, d(2024, 5, 10)), 24);
    assert_eq!(age_on(dob, d(2024, 5, 11)), 24);
  }

  #[test]
  fn age_handles_leap_day_birthdays() {
    let dob = d(2000, 2, 29);
    // In a leap year the birthday is Feb 29 itself.
    assert_eq!(age_on(dob, d(2024, 2, 28)), 23);
    assert_eq!(age_on(dob, d(2024, 2, 29)), 24);
    // In a common year it has passed by Mar 1.
    assert_eq!(age_on(dob, d(2023, 3, 1)), 23);
  }

  #[test]
  fn age_clamps_future_dob_to_zero() {
    assert_eq!(age_on(d(2030, 1, 1), d(2024, 1, 1)), 0);
    assert_eq!(age_on(d(2024, 1, 1), d(2024, 1, 1)), 0);
  }

  // ── Sub-comparators ─────────────────────────────────────────────────────

  #[test]
  fn ordered_comparison_points_toward_the_secret() {
    assert_eq!(compare_ordered(30, 34), Verdict::Up);
    assert_eq!(compare_ordered(34, 30), Verdict::Down);
    assert_eq!(compare_ordered(34, 34), Verdict::Match);
  }

  #[test]
  fn nominal_comparison_never_hints_direction() {
    assert_eq!(compare_equal("Brazil", "Brazil"), Verdict::Match);
    assert_eq!(compare_equal("Brazil", "Russia"), Verdict::Mismatch);
    assert_eq!(compare_equal(true, false), Verdict::Mismatch);
  }

  #[test]
  fn lighter_guess_points_up_heavier_points_down() {
    let light = WeightClass::Featherweight;
    let heavy = WeightClass::Welterweight;
    assert_eq!(compare_weight(&light, &heavy), Verdict::Up);
    assert_eq!(compare_weight(&heavy, &light), Verdict::Down);
    assert_eq!(compare_weight(&light, &light), Verdict::Match);
  }

  #[test]
  fn unknown_division_falls_back_to_equality() {
    let odd = WeightClass::from("Super Heavyweight".to_owned());
    let known = WeightClass::Lightweight;
    assert_eq!(compare_weight(&odd, &known), Verdict::Mismatch);
    assert_eq!(compare_weight(&known, &odd), Verdict::Mismatch);
    assert_eq!(compare_weight(&odd, &odd.clone()), Verdict::Match);
  }

  // ── Full row ────────────────────────────────────────────────────────────

  #[test]
  fn score_guess_populates_all_five_cells_in_order() {
    let secret = fighter(
      "secret",
      d(1991, 10, 27),
      "Lightweight",
      Gender::Male,
      true,
      "Russia",
    );
    let guess = fighter(
      "guess",
      d(1988, 9, 29),
      "Featherweight",
      Gender::Male,
      true,
      "Australia",
    );

    let row = score_guess(&guess, &secret, d(2024, 1, 1));

    // Guess is 35 against a 32-year-old secret: aim down.
    assert_eq!(row.age.verdict, Verdict::Down);
    assert_eq!(row.age.value, "35");
    // Featherweight sits below Lightweight: aim up.
    assert_eq!(row.weight.verdict, Verdict::Up);
    assert_eq!(row.weight.value, "Featherweight");
    assert_eq!(row.gender.verdict, Verdict::Match);
    assert_eq!(row.champion.verdict, Verdict::Match);
    assert_eq!(row.champion.value, "Yes");
    assert_eq!(row.country.verdict, Verdict::Mismatch);
    assert_eq!(row.country.value, "Australia");

    assert!(!row.all_match());
  }

  #[test]
  fn guessing_the_secret_itself_matches_everywhere() {
    let secret = fighter(
      "secret",
      d(1994, 10, 24),
      "Bantamweight",
      Gender::Male,
      true,
      "United States",
    );
    let row = score_guess(&secret, &secret, d(2024, 6, 1));
    assert!(row.all_match());
  }
}
