//! Calendar use-case services.
//!
//! # Responsibility
//! - Own the per-category state a calendar screen renders.
//! - Keep normalization and marking derivation behind one entry point.

pub mod schedule_board;
