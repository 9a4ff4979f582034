//! Command implementations over the roster and the local save store.

use std::{
  io::{self, BufRead as _, Write as _},
  path::Path,
};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use colored::Colorize;
use fightguess_core::{
  roster::Roster,
  session::{DailyGame, MAX_GUESSES, Rejection, Snapshot},
  store::SaveStore,
};
use fightguess_store_sqlite::SqliteSaveStore;
use fuzzy_matcher::{FuzzyMatcher, skim::SkimMatcherV2};

use crate::render;

pub struct App {
  roster: Roster,
  store:  SqliteSaveStore,
  today:  NaiveDate,
}

impl App {
  pub async fn open(
    roster_path: &Path,
    store_path: &Path,
    today: NaiveDate,
  ) -> Result<Self> {
    let raw = std::fs::read_to_string(roster_path)
      .with_context(|| format!("reading roster {}", roster_path.display()))?;
    let roster = Roster::from_json_str(&raw)
      .with_context(|| format!("parsing roster {}", roster_path.display()))?;
    let store = SqliteSaveStore::open(store_path)
      .await
      .with_context(|| format!("opening save store {}", store_path.display()))?;

    Ok(Self { roster, store, today })
  }

  async fn load(&self, game: &DailyGame<'_>) -> Result<Snapshot> {
    let snapshot = self.store.load(game.date_key()).await?;
    Ok(snapshot.unwrap_or_default())
  }

  // ─── Commands ───────────────────────────────────────────────────────────

  pub async fn status(&self) -> Result<()> {
    let game = DailyGame::new(&self.roster, self.today);
    let snapshot = self.load(&game).await?;

    let rows = game.replay(&snapshot, self.today);
    if !rows.is_empty() {
      render::print_board(&rows);
    }
    println!("{}", game.status_line(&snapshot));
    Ok(())
  }

  pub async fn guess(&self, raw: &str) -> Result<()> {
    let game = DailyGame::new(&self.roster, self.today);
    let snapshot = self.load(&game).await?;

    match game.submit(&snapshot, raw, self.today) {
      Ok(outcome) => {
        self.store.save(game.date_key(), &outcome.snapshot).await?;
        render::print_header();
        render::print_row(&outcome.fighter.name, &outcome.verdicts);
        println!("{}", game.status_line(&outcome.snapshot));
        if outcome.snapshot.done {
          println!();
          println!("{}", game.share_text(&outcome.snapshot, self.today));
        }
      }
      Err(rejection) => self.print_rejection(&game, &snapshot, &rejection),
    }
    Ok(())
  }

  pub async fn play(&self) -> Result<()> {
    let game = DailyGame::new(&self.roster, self.today);
    let mut snapshot = self.load(&game).await?;

    let title = format!("Fight Guess — {}", game.date_key().date_label());
    println!("{}", title.bold());
    println!("Guess the fighter. Type a name, or \"quit\" to leave.");
    println!();

    let rows = game.replay(&snapshot, self.today);
    if !rows.is_empty() {
      render::print_board(&rows);
    }
    println!("{}", game.status_line(&snapshot));

    let stdin = io::stdin();
    while !snapshot.done {
      print!("> ");
      io::stdout().flush()?;

      let mut line = String::new();
      if stdin.lock().read_line(&mut line)? == 0 {
        break;
      }
      let input = line.trim();
      if input.is_empty() {
        continue;
      }
      if input.eq_ignore_ascii_case("quit") || input.eq_ignore_ascii_case("exit") {
        break;
      }

      match game.submit(&snapshot, input, self.today) {
        Ok(outcome) => {
          self.store.save(game.date_key(), &outcome.snapshot).await?;
          snapshot = outcome.snapshot;
          render::print_board(&game.replay(&snapshot, self.today));
          println!("{}", game.status_line(&snapshot));
        }
        Err(rejection) => self.print_rejection(&game, &snapshot, &rejection),
      }
    }

    if snapshot.done {
      println!();
      println!("{}", game.share_text(&snapshot, self.today));
    }
    Ok(())
  }

  pub async fn share(&self) -> Result<()> {
    let game = DailyGame::new(&self.roster, self.today);
    let snapshot = self.load(&game).await?;
    println!("{}", game.share_text(&snapshot, self.today));
    Ok(())
  }

  pub fn roster_names(&self) {
    for name in self.roster.names_sorted() {
      println!("{name}");
    }
  }

  pub async fn reset(&self) -> Result<()> {
    let game = DailyGame::new(&self.roster, self.today);
    self.store.delete(game.date_key()).await?;
    println!("Reset. Guesses: 0/{MAX_GUESSES}");
    Ok(())
  }

  // ─── Helpers ────────────────────────────────────────────────────────────

  fn print_rejection(
    &self,
    game: &DailyGame<'_>,
    snapshot: &Snapshot,
    rejection: &Rejection,
  ) {
    match rejection {
      Rejection::SessionAlreadyFinished => {
        println!("{}", game.status_line(snapshot));
      }
      Rejection::UnknownFighter { input } => {
        println!(
          "{}",
          "Pick a name from the list (no creative spelling today).".red()
        );
        if let Some(suggestion) = self.closest_name(input) {
          println!("Did you mean {}?", suggestion.bold());
        }
      }
      Rejection::DuplicateGuess { .. } => {
        println!(
          "{}",
          "You already guessed that fighter. Try someone else.".red()
        );
      }
    }
  }

  /// Best fuzzy match for an input that resolved to nobody.
  fn closest_name(&self, input: &str) -> Option<String> {
    let matcher = SkimMatcherV2::default();
    self
      .roster
      .fighters()
      .iter()
      .filter_map(|f| {
        matcher.fuzzy_match(&f.name, input).map(|score| (score, &f.name))
      })
      .max_by_key(|(score, _)| *score)
      .map(|(_, name)| name.clone())
  }
}
