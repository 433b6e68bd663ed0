//! Top-level module for the Markov chain generation system.
//!
//! This crate provides a word-level Markov chain text generator, including:
//! - The sliding prefix window (`PrefixWindow`)
//! - The prefix-to-continuations table (`StateTable`)
//! - Internal state management (`State`)
//! - A bounded generation walk (`Generator`)

/// Bounded generation walk over a completed `StateTable`.
///
/// Exposes incremental token production and a driver loop that writes
/// a capped sequence to any `Write` sink.
pub mod generator;

/// Prefix-to-continuations mapping built from a token stream.
///
/// Handles line and token ingestion, continuation recording, and
/// probabilistic next-token prediction.
pub mod state_table;

/// Fixed-size sliding window of the most recently seen tokens.
///
/// Holds the chain order and sentinel constants and serves as the
/// lookup key into the state table.
pub mod window;

/// Internal representation of a single chain state (prefix).
///
/// Tracks observed continuations and supports uniform random sampling.
/// This module is not exposed publicly.
mod state;
