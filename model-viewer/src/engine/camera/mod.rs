//! Viewer camera: fixed perspective looking at the origin, kept in step
//! with the surface size.

/// Camera spawn and window resize handling.
pub mod viewer_camera;
