//! fightguess-server binary.
//!
//! Reads `config.toml` (or the path specified with `--config`), loads the
//! fighter roster from JSON, opens an in-process SQLite save store, and
//! serves the game over HTTP.

use std::{
  path::{Path, PathBuf},
  sync::Arc,
};

use anyhow::Context as _;
use clap::Parser;
use fightguess_api::{AppState, ServerConfig};
use fightguess_core::roster::Roster;
use fightguess_store_sqlite::SqliteSaveStore;
use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Fight Guess game server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  // Initialise tracing.
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  // Load configuration.
  let settings = config::Config::builder()
    .add_source(config::File::from(cli.config).required(false))
    .add_source(config::Environment::with_prefix("FIGHTGUESS"))
    .build()
    .context("failed to read config file")?;

  let server_cfg: ServerConfig = settings
    .try_deserialize()
    .context("failed to deserialise ServerConfig")?;

  // Load the roster.
  let roster_path = expand_tilde(&server_cfg.roster_path);
  let raw = std::fs::read_to_string(&roster_path)
    .with_context(|| format!("failed to read roster at {roster_path:?}"))?;
  let roster = Roster::from_json_str(&raw)
    .with_context(|| format!("failed to parse roster at {roster_path:?}"))?;
  tracing::info!("loaded {} fighters from {roster_path:?}", roster.len());

  // Open the SQLite save store.
  let store_path = expand_tilde(&server_cfg.store_path);
  let store = SqliteSaveStore::open(&store_path)
    .await
    .with_context(|| format!("failed to open store at {store_path:?}"))?;
  tracing::info!("saves stored at {store_path:?}");

  // Build application state.
  let state = AppState {
    store:  Arc::new(store),
    roster: Arc::new(roster),
  };

  let app = fightguess_api::router(state);
  let address = format!("{}:{}", server_cfg.host, server_cfg.port);

  tracing::info!("Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app).await.context("server error")?;

  Ok(())
}

/// Expand a leading `~` to the user's home directory.
fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}
