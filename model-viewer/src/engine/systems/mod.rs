//! Per-frame runtime systems and viewer lifecycle.

/// FPS notifications pushed to the hosting page.
pub mod fps_tracking;

/// Orientation smoothing and floating motion applied each frame.
pub mod frame;

/// Start/stop handling and teardown of the viewer scene.
pub mod lifecycle;
