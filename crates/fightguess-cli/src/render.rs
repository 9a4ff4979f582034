//! Plain-table rendering for scored guesses.

use colored::{ColoredString, Colorize};
use fightguess_core::{
  fighter::Fighter,
  verdict::{Attribute, Verdict, VerdictRow},
};

const NAME_WIDTH: usize = 24;
/// Per-attribute column widths, in [`Attribute::ORDER`].
const WIDTHS: [usize; 5] = [6, 20, 9, 11, 14];

fn symbol(verdict: Verdict) -> &'static str {
  match verdict {
    Verdict::Match => "✓",
    Verdict::Up => "↑",
    Verdict::Down => "↓",
    Verdict::Mismatch => "✗",
  }
}

fn paint(verdict: Verdict, text: &str) -> ColoredString {
  match verdict {
    Verdict::Match => text.green(),
    Verdict::Up => text.yellow(),
    Verdict::Down => text.blue(),
    Verdict::Mismatch => text.red(),
  }
}

pub fn print_header() {
  let mut line = format!("{:<width$}", "Fighter", width = NAME_WIDTH);
  for (attribute, width) in Attribute::ORDER.into_iter().zip(WIDTHS) {
    line.push_str(&format!("{:<width$}", attribute.label()));
  }
  println!("{}", line.dimmed());
}

/// Print one scored row. Cells are padded before they are coloured, so the
/// escape codes do not throw the column widths off.
pub fn print_row(name: &str, row: &VerdictRow) {
  print!("{:<width$}", name, width = NAME_WIDTH);
  for ((_, cell), width) in row.iter().zip(WIDTHS) {
    let text = format!("{} {}", symbol(cell.verdict), cell.value);
    print!("{}", paint(cell.verdict, &format!("{text:<width$}")));
  }
  println!();
}

pub fn print_board(rows: &[(&Fighter, VerdictRow)]) {
  print_header();
  for (fighter, row) in rows {
    print_row(&fighter.name, row);
  }
}
