//! Share projection — the emoji grid players paste after a session.
//!
//! This is the game's only byte-exact external format. The grid is
//! re-derived from the persisted snapshot by re-running the comparator, so
//! its content never depends on how (or whether) rows were rendered.

use chrono::NaiveDate;

use crate::{
  session::{DailyGame, MAX_GUESSES, Snapshot},
  verdict::Verdict,
};

/// Display name of the game, as it appears in share headers.
pub const GAME_NAME: &str = "Fight Guess";

/// The share glyph for one verdict.
pub fn glyph(verdict: Verdict) -> &'static str {
  match verdict {
    Verdict::Match => "🟩",
    Verdict::Mismatch => "🟥",
    Verdict::Up => "🟨",
    Verdict::Down => "🟦",
  }
}

/// Render the full share block: a header line, then one five-glyph line per
/// guess, joined with `\n` and no trailing newline.
///
/// The score shows the guess count only for a win; losses and unfinished
/// sessions show `X`.
pub fn share_text(
  game: &DailyGame<'_>,
  snapshot: &Snapshot,
  today: NaiveDate,
) -> String {
  let score = if snapshot.win {
    snapshot.guesses.len().to_string()
  } else {
    "X".to_owned()
  };
  let header = format!(
    "{GAME_NAME} {} — {score}/{MAX_GUESSES}",
    game.date_key().date_label()
  );

  let mut lines = vec![header];
  for (_, row) in game.replay(snapshot, today) {
    lines.push(row.verdicts().iter().map(|&v| glyph(v)).collect());
  }
  lines.join("\n")
}
