//! Asynchronous GLB loading and post-load model preparation.
//!
//! The load is polled each frame and never blocks rendering. When it
//! resolves, the scene is spawned hidden, fitted to the view once its
//! instance is ready, and every animation clip is started.

/// Animation graph construction and clip playback for the loaded model.
pub mod animation;

/// Bounding-box measurement, uniform scaling and centring of the model.
pub mod model_fit;

/// Load state machine, scene spawning and outcome reporting.
pub mod model_loader;
