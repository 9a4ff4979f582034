//! Core types and game logic for Fight Guess, a daily fighter-guessing game.
//!
//! This crate is deliberately free of HTTP and database dependencies.
//! All other crates depend on it; it depends on nothing proprietary.

// We intentionally use native `async fn` in trait impls (stabilised in Rust
// 1.75). Suppress the advisory lint about `Send` bounds on returned futures.
#![allow(async_fn_in_trait)]

pub mod compare;
pub mod error;
pub mod fighter;
pub mod roster;
pub mod select;
pub mod session;
pub mod share;
pub mod store;
pub mod verdict;

pub use error::{Error, Result};
