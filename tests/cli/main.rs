//! CLI integration tests for atmention.
//!
//! These tests execute the compiled binary and verify CLI behavior including:
//! - Subcommand behavior (transform, mentions, parse)
//! - Stdin/stdout handling
//! - Exit codes
//! - File I/O operations

mod common;
mod mentions;
mod parse;
mod transform;
