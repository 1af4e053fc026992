//! Error types and error handling for the interpreter.
//!
//! This module defines the two error channels, which never merge:
//!
//! - Syntax errors (`Error`/`ErrorImpl`), accumulated by the parser with
//!   source position information and surfaced before evaluation
//! - Runtime errors (`RuntimeError`), produced *as values* during
//!   evaluation and propagated through normal return paths
//!
//! Both render their human-readable message through `Display`.

pub mod errors;

#[cfg(test)]
mod tests;
