//! Handler for the roster listing.

use axum::{Json, extract::State};
use fightguess_core::store::SaveStore;

use crate::AppState;

/// `GET /roster` — display names in alphabetical order, for pick lists.
pub async fn list<S: SaveStore>(State(state): State<AppState<S>>) -> Json<Vec<String>> {
  Json(state.roster.names_sorted())
}
