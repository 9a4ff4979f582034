//! The daily guess session — snapshot, rejections, and the state machine
//! that advances a session one guess at a time.
//!
//! All operations are pure functions of their inputs: callers load a
//! [`Snapshot`], call [`DailyGame::submit`], and persist the snapshot the
//! outcome carries. Nothing here blocks or reads the clock.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
  compare::score_guess,
  fighter::{Fighter, FighterId},
  roster::Roster,
  select::DateKey,
  share,
  verdict::VerdictRow,
};

/// The guess budget. The eighth guess is still scored in full; a correct
/// eighth guess wins.
pub const MAX_GUESSES: usize = 8;

// ─── Snapshot ────────────────────────────────────────────────────────────────

/// Everything persisted about one day of play.
///
/// Fields default individually so a snapshot written by an older build (or
/// trimmed by hand) still decodes; anything unreadable beyond that is the
/// store's problem and loads as absent.
///
/// Invariants, maintained by [`DailyGame::submit`]:
/// - `guesses` holds at most [`MAX_GUESSES`] ids, pairwise distinct, in
///   submission order;
/// - `win` implies `done`, and that the final guess is the secret;
/// - `done` without `win` implies the budget is exhausted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
  #[serde(default)]
  pub guesses: Vec<FighterId>,
  #[serde(default)]
  pub done:    bool,
  #[serde(default)]
  pub win:     bool,
}

impl Snapshot {
  pub fn phase(&self) -> SessionPhase {
    match (self.done, self.win) {
      (true, true) => SessionPhase::Won,
      (true, false) => SessionPhase::Lost,
      (false, _) if self.guesses.is_empty() => SessionPhase::NotStarted,
      (false, _) => SessionPhase::InProgress,
    }
  }
}

/// Where a session stands — derived from a [`Snapshot`], never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionPhase {
  NotStarted,
  InProgress,
  Won,
  Lost,
}

// ─── Rejection ───────────────────────────────────────────────────────────────

/// Why a submitted guess was not accepted.
///
/// Rejections are expected user input, not errors: the session state is
/// untouched and the caller surfaces the reason. The serialized form is
/// tagged so transports can hand clients a machine-readable code.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum Rejection {
  /// The day is already decided; further guesses are ignored.
  #[error("the session for this day is already finished")]
  SessionAlreadyFinished,

  /// The input resolved to no roster fighter. Carries the (trimmed) input
  /// so callers can echo it back.
  #[error("no fighter named {input:?} is on the roster")]
  UnknownFighter { input: String },

  /// The fighter was already guessed this session.
  #[error("{name} has already been guessed")]
  DuplicateGuess { name: String },
}

// ─── Outcome ─────────────────────────────────────────────────────────────────

/// An accepted guess: the resolved fighter, its verdicts, and the snapshot
/// the caller should persist.
#[derive(Debug, Clone, Serialize)]
pub struct GuessOutcome {
  pub fighter:  Fighter,
  pub verdicts: VerdictRow,
  pub snapshot: Snapshot,
}

// ─── DailyGame ───────────────────────────────────────────────────────────────

/// One day's game: the roster, the secret that day selects, and the date
/// key addressing its save. Cheap to construct; build one per request.
pub struct DailyGame<'r> {
  roster:   &'r Roster,
  secret:   &'r Fighter,
  date_key: DateKey,
}

impl<'r> DailyGame<'r> {
  /// Set up the game for `date`. The secret is re-derived from the date
  /// key on every call, never stored anywhere.
  pub fn new(roster: &'r Roster, date: NaiveDate) -> Self {
    let date_key = DateKey::for_date(date);
    let secret = roster.secret_for(&date_key);
    Self { roster, secret, date_key }
  }

  pub fn date_key(&self) -> &DateKey { &self.date_key }

  pub fn roster(&self) -> &'r Roster { self.roster }

  /// The day's answer. Callers reveal it only once a session is done.
  pub fn secret(&self) -> &'r Fighter { self.secret }

  /// Submit one guess against `snapshot`.
  ///
  /// The snapshot is taken by reference and never mutated; an accepted
  /// guess returns the successor snapshot inside the outcome. Checks run in
  /// a fixed order: finished session, name resolution, duplicate, then
  /// scoring and the win/loss transition.
  pub fn submit(
    &self,
    snapshot: &Snapshot,
    raw_name: &str,
    today: NaiveDate,
  ) -> Result<GuessOutcome, Rejection> {
    if snapshot.done {
      return Err(Rejection::SessionAlreadyFinished);
    }

    let fighter = self.roster.resolve(raw_name).ok_or_else(|| {
      Rejection::UnknownFighter { input: raw_name.trim().to_owned() }
    })?;

    if snapshot.guesses.contains(&fighter.id) {
      return Err(Rejection::DuplicateGuess { name: fighter.name.clone() });
    }

    let verdicts = score_guess(fighter, self.secret, today);

    let mut next = snapshot.clone();
    next.guesses.push(fighter.id.clone());

    if fighter.id == self.secret.id {
      next.win = true;
      next.done = true;
    } else if next.guesses.len() >= MAX_GUESSES {
      next.done = true;
    }

    Ok(GuessOutcome { fighter: fighter.clone(), verdicts, snapshot: next })
  }

  /// Re-derive the verdict rows for every guess a snapshot records, in
  /// guess order. Ids that are no longer on the roster are skipped; the
  /// snapshot itself is left alone.
  pub fn replay(
    &self,
    snapshot: &Snapshot,
    today: NaiveDate,
  ) -> Vec<(&'r Fighter, VerdictRow)> {
    snapshot
      .guesses
      .iter()
      .filter_map(|id| self.roster.get(id))
      .map(|f| (f, score_guess(f, self.secret, today)))
      .collect()
  }

  /// One-line session summary, suitable for a status bar.
  pub fn status_line(&self, snapshot: &Snapshot) -> String {
    if snapshot.win {
      format!("You got it in {}!", snapshot.guesses.len())
    } else if snapshot.done {
      format!("Out of guesses. The answer was: {}", self.secret.name)
    } else {
      format!("Guesses: {}/{MAX_GUESSES}", snapshot.guesses.len())
    }
  }

  /// The paste-ready share block for this session. See [`share`].
  pub fn share_text(&self, snapshot: &Snapshot, today: NaiveDate) -> String {
    share::share_text(self, snapshot, today)
  }
}

#[cfg(test)]
mod tests {
  use std::collections::HashSet;

  use super::*;
  use crate::{
    fighter::{Gender, WeightClass},
    verdict::Verdict,
  };

  fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
  }

  fn fighter(
    id: &str,
    name: &str,
    dob: NaiveDate,
    weight: &str,
    gender: Gender,
    champion: bool,
    country: &str,
  ) -> Fighter {
    Fighter {
      id:            FighterId::from(id),
      name:          name.to_owned(),
      dob,
      weight_class:  WeightClass::from(weight.to_owned()),
      gender,
      ever_champion: champion,
      birth_country: country.to_owned(),
    }
  }

  /// Five-fighter roster. For 2024-01-01 the date key hashes to
  /// 4093672375, and 4093672375 % 5 == 0, so the secret is Makhachev.
  fn roster_five() -> Roster {
    Roster::new(vec![
      fighter("makhachev", "Islam Makhachev", d(1991, 10, 27), "Lightweight", Gender::Male, true, "Russia"),
      fighter("volkanovski", "Alexander Volkanovski", d(1988, 9, 29), "Featherweight", Gender::Male, true, "Australia"),
      fighter("nunes", "Amanda Nunes", d(1988, 5, 30), "Bantamweight", Gender::Female, true, "Brazil"),
      fighter("omalley", "Sean O'Malley", d(1994, 10, 24), "Bantamweight", Gender::Male, true, "United States"),
      fighter("nickal", "Bo Nickal", d(1996, 1, 14), "Middleweight", Gender::Male, false, "United States"),
    ])
    .unwrap()
  }

  /// Ten-fighter roster for budget-exhaustion paths. For 2024-01-01,
  /// 4093672375 % 10 == 5, so the secret is index 5 (Pereira).
  fn roster_ten() -> Roster {
    Roster::new(vec![
      fighter("f0", "Fighter Zero", d(1990, 1, 1), "Flyweight", Gender::Male, false, "Brazil"),
      fighter("f1", "Fighter One", d(1991, 2, 2), "Bantamweight", Gender::Male, false, "Brazil"),
      fighter("f2", "Fighter Two", d(1992, 3, 3), "Featherweight", Gender::Male, false, "Brazil"),
      fighter("f3", "Fighter Three", d(1993, 4, 4), "Lightweight", Gender::Male, false, "Brazil"),
      fighter("f4", "Fighter Four", d(1994, 5, 5), "Welterweight", Gender::Male, false, "Brazil"),
      fighter("pereira", "Alex Pereira", d(1987, 7, 7), "Light Heavyweight", Gender::Male, true, "Brazil"),
      fighter("f6", "Fighter Six", d(1995, 6, 6), "Middleweight", Gender::Male, false, "Brazil"),
      fighter("f7", "Fighter Seven", d(1996, 7, 7), "Heavyweight", Gender::Male, false, "Brazil"),
      fighter("f8", "Fighter Eight", d(1997, 8, 8), "Strawweight", Gender::Female, false, "Brazil"),
      fighter("f9", "Fighter Nine", d(1998, 9, 9), "Flyweight", Gender::Female, false, "Brazil"),
    ])
    .unwrap()
  }

  fn today() -> NaiveDate {
    d(2024, 1, 1)
  }

  fn assert_invariants(snapshot: &Snapshot, game: &DailyGame<'_>) {
    assert!(snapshot.guesses.len() <= MAX_GUESSES);
    let distinct: HashSet<_> = snapshot.guesses.iter().collect();
    assert_eq!(distinct.len(), snapshot.guesses.len(), "duplicate ids");
    if snapshot.win {
      assert!(snapshot.done, "win without done");
      assert_eq!(snapshot.guesses.last(), Some(&game.secret().id));
    }
    if snapshot.done && !snapshot.win {
      assert_eq!(snapshot.guesses.len(), MAX_GUESSES);
      assert!(!snapshot.guesses.contains(&game.secret().id));
    }
  }

  // ── Selection ───────────────────────────────────────────────────────────

  #[test]
  fn the_date_key_selects_the_expected_secret() {
    let roster = roster_five();
    let game = DailyGame::new(&roster, today());
    assert_eq!(game.secret().id.as_str(), "makhachev");
    assert_eq!(game.date_key().as_str(), "fightguess_2024-01-01");
  }

  // ── Submit: happy path ──────────────────────────────────────────────────

  #[test]
  fn wrong_guess_appends_and_scores() {
    let roster = roster_five();
    let game = DailyGame::new(&roster, today());

    let outcome = game
      .submit(&Snapshot::default(), "  alexander VOLKANOVSKI ", today())
      .unwrap();

    assert_eq!(outcome.fighter.id.as_str(), "volkanovski");
    assert_eq!(outcome.snapshot.guesses.len(), 1);
    assert_eq!(outcome.snapshot.phase(), SessionPhase::InProgress);
    assert!(!outcome.snapshot.done);

    // 35 vs 32, Featherweight vs Lightweight, male/male, champ/champ,
    // Australia vs Russia.
    assert_eq!(
      outcome.verdicts.verdicts(),
      [
        Verdict::Down,
        Verdict::Up,
        Verdict::Match,
        Verdict::Match,
        Verdict::Mismatch,
      ]
    );

    assert_invariants(&outcome.snapshot, &game);
  }

  #[test]
  fn correct_guess_wins_and_finishes() {
    let roster = roster_five();
    let game = DailyGame::new(&roster, today());

    let first = game
      .submit(&Snapshot::default(), "Amanda Nunes", today())
      .unwrap();
    let second = game
      .submit(&first.snapshot, "Islam Makhachev", today())
      .unwrap();

    assert!(second.verdicts.all_match());
    assert_eq!(second.snapshot.phase(), SessionPhase::Won);
    assert!(second.snapshot.done && second.snapshot.win);
    assert_eq!(game.status_line(&second.snapshot), "You got it in 2!");
    assert_invariants(&second.snapshot, &game);
  }

  #[test]
  fn submitting_does_not_mutate_the_input_snapshot() {
    let roster = roster_five();
    let game = DailyGame::new(&roster, today());

    let empty = Snapshot::default();
    let _ = game.submit(&empty, "Amanda Nunes", today()).unwrap();
    assert_eq!(empty, Snapshot::default());
  }

  // ── Submit: rejections ──────────────────────────────────────────────────

  #[test]
  fn unknown_name_is_rejected_with_the_input_preserved() {
    let roster = roster_five();
    let game = DailyGame::new(&roster, today());

    let err = game
      .submit(&Snapshot::default(), "  Jon Jones  ", today())
      .unwrap_err();
    assert_eq!(err, Rejection::UnknownFighter { input: "Jon Jones".into() });
  }

  #[test]
  fn duplicate_guess_is_rejected_and_state_untouched() {
    let roster = roster_five();
    let game = DailyGame::new(&roster, today());

    let first = game
      .submit(&Snapshot::default(), "Amanda Nunes", today())
      .unwrap();
    let err = game
      .submit(&first.snapshot, "amanda nunes", today())
      .unwrap_err();

    assert_eq!(err, Rejection::DuplicateGuess { name: "Amanda Nunes".into() });
    assert_eq!(first.snapshot.guesses.len(), 1);
  }

  #[test]
  fn finished_session_rejects_everything_first() {
    let roster = roster_five();
    let game = DailyGame::new(&roster, today());

    let won = game
      .submit(&Snapshot::default(), "Islam Makhachev", today())
      .unwrap();

    // Finished wins over unknown-name and duplicate checks alike.
    for input in ["Islam Makhachev", "Amanda Nunes", "nobody at all"] {
      let err = game.submit(&won.snapshot, input, today()).unwrap_err();
      assert_eq!(err, Rejection::SessionAlreadyFinished);
    }
  }

  // ── Budget ──────────────────────────────────────────────────────────────

  #[test]
  fn eighth_wrong_guess_exhausts_the_budget() {
    let roster = roster_ten();
    let game = DailyGame::new(&roster, today());
    assert_eq!(game.secret().id.as_str(), "pereira");

    let wrong = [
      "Fighter Zero", "Fighter One", "Fighter Two", "Fighter Three",
      "Fighter Four", "Fighter Six", "Fighter Seven", "Fighter Eight",
    ];

    let mut snapshot = Snapshot::default();
    for (i, name) in wrong.iter().enumerate() {
      let outcome = game.submit(&snapshot, name, today()).unwrap();
      snapshot = outcome.snapshot;
      assert_invariants(&snapshot, &game);
      if i + 1 < MAX_GUESSES {
        assert_eq!(snapshot.phase(), SessionPhase::InProgress);
        assert_eq!(
          game.status_line(&snapshot),
          format!("Guesses: {}/8", i + 1)
        );
      }
    }

    assert_eq!(snapshot.phase(), SessionPhase::Lost);
    assert_eq!(
      game.status_line(&snapshot),
      "Out of guesses. The answer was: Alex Pereira"
    );
  }

  #[test]
  fn correct_eighth_guess_still_wins() {
    let roster = roster_ten();
    let game = DailyGame::new(&roster, today());

    let wrong = [
      "Fighter Zero", "Fighter One", "Fighter Two", "Fighter Three",
      "Fighter Four", "Fighter Six", "Fighter Seven",
    ];

    let mut snapshot = Snapshot::default();
    for name in wrong {
      snapshot = game.submit(&snapshot, name, today()).unwrap().snapshot;
    }
    assert_eq!(snapshot.guesses.len(), 7);

    let last = game.submit(&snapshot, "Alex Pereira", today()).unwrap();
    assert_eq!(last.snapshot.phase(), SessionPhase::Won);
    assert_eq!(last.snapshot.guesses.len(), MAX_GUESSES);
    assert_eq!(game.status_line(&last.snapshot), "You got it in 8!");
    assert_invariants(&last.snapshot, &game);
  }

  // ── Replay ──────────────────────────────────────────────────────────────

  #[test]
  fn replay_rebuilds_rows_in_guess_order() {
    let roster = roster_five();
    let game = DailyGame::new(&roster, today());

    let a = game
      .submit(&Snapshot::default(), "Amanda Nunes", today())
      .unwrap();
    let b = game.submit(&a.snapshot, "Bo Nickal", today()).unwrap();

    let rows = game.replay(&b.snapshot, today());
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].0.id.as_str(), "nunes");
    assert_eq!(rows[1].0.id.as_str(), "nickal");
    assert_eq!(rows[0].1, a.verdicts);
    assert_eq!(rows[1].1, b.verdicts);
  }

  #[test]
  fn replay_skips_ids_that_left_the_roster() {
    let roster = roster_five();
    let game = DailyGame::new(&roster, today());

    let snapshot = Snapshot {
      guesses: vec![FighterId::from("ghost"), FighterId::from("nunes")],
      done:    false,
      win:     false,
    };

    let rows = game.replay(&snapshot, today());
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].0.id.as_str(), "nunes");
  }

  // ── Phase and decoding ──────────────────────────────────────────────────

  #[test]
  fn phase_follows_the_snapshot() {
    assert_eq!(Snapshot::default().phase(), SessionPhase::NotStarted);
    let in_progress = Snapshot {
      guesses: vec![FighterId::from("a")],
      ..Default::default()
    };
    assert_eq!(in_progress.phase(), SessionPhase::InProgress);
    let lost = Snapshot { done: true, ..Default::default() };
    assert_eq!(lost.phase(), SessionPhase::Lost);
    let won = Snapshot { done: true, win: true, ..Default::default() };
    assert_eq!(won.phase(), SessionPhase::Won);
  }

  #[test]
  fn snapshot_decodes_with_missing_fields_defaulted() {
    let partial: Snapshot =
      serde_json::from_str(r#"{"guesses":["nunes"]}"#).unwrap();
    assert_eq!(partial.guesses.len(), 1);
    assert!(!partial.done);
    assert!(!partial.win);

    let empty: Snapshot = serde_json::from_str("{}").unwrap();
    assert_eq!(empty, Snapshot::default());
  }

  #[test]
  fn rejection_serializes_with_a_reason_tag() {
    let r = Rejection::UnknownFighter { input: "Jon Jones".into() };
    let v = serde_json::to_value(&r).unwrap();
    assert_eq!(v["reason"], "unknown_fighter");
    assert_eq!(v["input"], "Jon Jones");

    let f = serde_json::to_value(Rejection::SessionAlreadyFinished).unwrap();
    assert_eq!(f["reason"], "session_already_finished");
  }
}
