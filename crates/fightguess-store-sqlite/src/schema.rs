//! SQL schema for the Fight Guess save store.
//!
//! Executed once at connection startup. Future migrations will be gated on
//! `PRAGMA user_version`.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

-- One row per calendar day of play. Rows are replaced wholesale on save;
-- the snapshot column is the single source of truth for a session.
CREATE TABLE IF NOT EXISTS saves (
    date_key    TEXT PRIMARY KEY,   -- 'fightguess_YYYY-MM-DD'
    snapshot    TEXT NOT NULL,      -- JSON session snapshot
    updated_at  TEXT NOT NULL       -- ISO 8601 UTC; set on every write
);

PRAGMA user_version = 1;
";
