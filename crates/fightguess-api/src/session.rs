//! Handlers for the daily session endpoints.
//!
//! Every endpoint takes an optional `date` (`YYYY-MM-DD`), which stands in
//! for the player's local calendar date. When absent, the server's local
//! date is used. The date picks both the day's secret and the save slot, so
//! clients in different timezones can play "their" day by sending it
//! explicitly.

use axum::{
  Json,
  extract::{Query, State},
  http::StatusCode,
};
use chrono::{Local, NaiveDate};
use fightguess_core::{
  select::DateKey,
  session::{DailyGame, MAX_GUESSES, SessionPhase, Snapshot},
  store::SaveStore,
  verdict::VerdictRow,
};
use serde::{Deserialize, Serialize};

use crate::{AppState, error::ApiError};

// ─── Views ───────────────────────────────────────────────────────────────

/// The session read model: everything a client needs to render a day.
#[derive(Debug, Serialize)]
pub struct SessionView {
  pub date_key:    String,
  pub date_label:  String,
  pub phase:       SessionPhase,
  pub status:      String,
  pub guess_count: usize,
  pub max_guesses: usize,
  /// The secret's display name, revealed only once the session is done.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub answer:      Option<String>,
  pub rows:        Vec<RowView>,
}

/// One scored guess, in submission order.
#[derive(Debug, Serialize)]
pub struct RowView {
  pub name:     String,
  pub verdicts: VerdictRow,
}

impl SessionView {
  fn project(game: &DailyGame<'_>, snapshot: &Snapshot, today: NaiveDate) -> Self {
    let rows = game
      .replay(snapshot, today)
      .into_iter()
      .map(|(fighter, verdicts)| RowView {
        name: fighter.name.clone(),
        verdicts,
      })
      .collect();

    Self {
      date_key: game.date_key().to_string(),
      date_label: game.date_key().date_label().to_owned(),
      phase: snapshot.phase(),
      status: game.status_line(snapshot),
      guess_count: snapshot.guesses.len(),
      max_guesses: MAX_GUESSES,
      answer: snapshot.done.then(|| game.secret().name.clone()),
      rows,
    }
  }
}

// ─── Parameters ──────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct DateParams {
  pub date: Option<NaiveDate>,
}

#[derive(Debug, Deserialize)]
pub struct GuessBody {
  pub name: String,
  pub date: Option<NaiveDate>,
}

#[derive(Debug, Serialize)]
pub struct GuessResponse {
  pub name:     String,
  pub verdicts: VerdictRow,
  pub session:  SessionView,
}

fn resolve_date(date: Option<NaiveDate>) -> NaiveDate {
  date.unwrap_or_else(|| Local::now().date_naive())
}

async fn load_snapshot<S: SaveStore>(
  state: &AppState<S>,
  key: &DateKey,
) -> Result<Snapshot, ApiError> {
  let snapshot = state
    .store
    .load(key)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok(snapshot.unwrap_or_default())
}

// ─── Handlers ────────────────────────────────────────────────────────────

/// `GET /session` — the current state of the day's game.
pub async fn view<S: SaveStore>(
  State(state): State<AppState<S>>,
  Query(params): Query<DateParams>,
) -> Result<Json<SessionView>, ApiError> {
  let today = resolve_date(params.date);
  let game = DailyGame::new(&state.roster, today);
  let snapshot = load_snapshot(&state, game.date_key()).await?;

  Ok(Json(SessionView::project(&game, &snapshot, today)))
}

/// `POST /guess` — submit a fighter name for the day.
pub async fn guess<S: SaveStore>(
  State(state): State<AppState<S>>,
  Json(body): Json<GuessBody>,
) -> Result<Json<GuessResponse>, ApiError> {
  let today = resolve_date(body.date);
  let game = DailyGame::new(&state.roster, today);
  let snapshot = load_snapshot(&state, game.date_key()).await?;

  let outcome = game.submit(&snapshot, &body.name, today)?;

  state
    .store
    .save(game.date_key(), &outcome.snapshot)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;

  tracing::info!(
    date_key = %game.date_key(),
    guess = %outcome.fighter.name,
    phase = ?outcome.snapshot.phase(),
    "guess scored"
  );

  Ok(Json(GuessResponse {
    name:     outcome.fighter.name.clone(),
    verdicts: outcome.verdicts,
    session:  SessionView::project(&game, &outcome.snapshot, today),
  }))
}

/// `POST /reset` — discard the day's save. Idempotent.
pub async fn reset<S: SaveStore>(
  State(state): State<AppState<S>>,
  Query(params): Query<DateParams>,
) -> Result<StatusCode, ApiError> {
  let today = resolve_date(params.date);
  let key = DateKey::for_date(today);

  state
    .store
    .delete(&key)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;

  Ok(StatusCode::NO_CONTENT)
}

/// `GET /share` — the paste-ready share block as plain text.
pub async fn share<S: SaveStore>(
  State(state): State<AppState<S>>,
  Query(params): Query<DateParams>,
) -> Result<String, ApiError> {
  let today = resolve_date(params.date);
  let game = DailyGame::new(&state.roster, today);
  let snapshot = load_snapshot(&state, game.date_key()).await?;

  Ok(game.share_text(&snapshot, today))
}
