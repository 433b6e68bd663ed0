//! Markov-chain text generation library.
//!
//! This crate provides an order-N Markov chain over whitespace-delimited
//! tokens, including:
//! - State-table construction from a token stream
//! - Bounded pseudo-random sequence generation
//! - Injectable randomness for reproducible output
//!
//! Only the high-level API is exposed publicly. Low-level components
//! are kept internal to ensure consistency and prevent misuse.

/// Core chain model and generation logic.
///
/// This module exposes the state table and generator interface while
/// keeping internal state representations private.
pub mod model;
