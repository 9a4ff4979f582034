//! `fightguess` — play the daily fighter guessing game in a terminal.
//!
//! # Usage
//!
//! ```
//! fightguess                     # interactive play for today
//! fightguess guess Alex Pereira  # one guess, then back to the shell
//! fightguess status              # board so far
//! fightguess share               # paste-ready result block
//! ```

mod app;
mod render;

use std::path::PathBuf;

use anyhow::{Context, Result};
use app::App;
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use serde::Deserialize;

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "fightguess", about = "Daily fighter guessing game")]
struct Args {
  /// Path to a TOML config file (roster, store).
  #[arg(short, long, value_name = "FILE")]
  config: Option<PathBuf>,

  /// Path to the roster JSON (default: data/fighters.json).
  #[arg(long, env = "FIGHTGUESS_ROSTER")]
  roster: Option<PathBuf>,

  /// Path to the SQLite save database (default: fightguess.db).
  #[arg(long, env = "FIGHTGUESS_STORE")]
  store: Option<PathBuf>,

  /// Play a specific date (YYYY-MM-DD) instead of today.
  #[arg(long)]
  date: Option<NaiveDate>,

  #[command(subcommand)]
  command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
  /// Show the day's board and status.
  Status,
  /// Submit a single guess.
  Guess {
    /// Fighter name; multiple words are joined with spaces.
    name: Vec<String>,
  },
  /// Guess interactively until the day is decided (the default).
  Play,
  /// Print the paste-ready share block.
  Share,
  /// List every fighter name on the roster.
  Roster,
  /// Wipe the day's save and start over.
  Reset,
}

// ─── Config file ──────────────────────────────────────────────────────────────

/// Shape of the optional TOML config file.
#[derive(Deserialize, Default)]
struct ConfigFile {
  #[serde(default)]
  roster: String,
  #[serde(default)]
  store:  String,
}

// ─── Entry point ──────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
  let args = Args::parse();

  // Load config file if provided.
  let file_cfg: ConfigFile = if let Some(path) = &args.config {
    let raw = std::fs::read_to_string(path)
      .with_context(|| format!("reading config file {}", path.display()))?;
    toml::from_str(&raw).context("parsing config file")?
  } else {
    ConfigFile::default()
  };

  // CLI flags override config file, which overrides defaults.
  let roster_path = args
    .roster
    .or_else(|| (!file_cfg.roster.is_empty()).then(|| PathBuf::from(&file_cfg.roster)))
    .unwrap_or_else(|| PathBuf::from("data/fighters.json"));
  let store_path = args
    .store
    .or_else(|| (!file_cfg.store.is_empty()).then(|| PathBuf::from(&file_cfg.store)))
    .unwrap_or_else(|| PathBuf::from("fightguess.db"));

  // The date is the player's local calendar date unless pinned with --date.
  let today = args.date.unwrap_or_else(|| Local::now().date_naive());

  let app = App::open(&roster_path, &store_path, today).await?;

  match args.command.unwrap_or(Command::Play) {
    Command::Status => app.status().await,
    Command::Guess { name } => app.guess(&name.join(" ")).await,
    Command::Play => app.play().await,
    Command::Share => app.share().await,
    Command::Roster => {
      app.roster_names();
      Ok(())
    }
    Command::Reset => app.reset().await,
  }
}
