//! Core application setup and state management.
//!
//! Builds the Bevy app for native and WASM targets, owns the viewer's
//! context resource and configuration, and drives the running/stopped
//! lifecycle.

/// App construction and plugin wiring.
pub mod app_setup;

/// Running/stopped states and the commands that switch between them.
pub mod app_state;

/// Tunable viewer settings with defaults from the `constants` crate.
pub mod config;

/// Shared viewer context: orientation, pointer, model and load state.
pub mod viewer_state;

/// Platform-specific window configuration for native and WASM builds.
pub mod window_config;
