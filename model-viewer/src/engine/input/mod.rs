//! Pointer and touch tracking that drives the model's target orientation.

/// Cursor and first-touch normalization into the -1..1 container space.
pub mod pointer;
