//! Host page integration: locating the container, attaching the drawing
//! surface, and gating start-up on document readiness.
//!
//! On the web the container is a DOM element and the surface is a canvas
//! appended into it. Natively the desktop window plays both roles.

#[cfg(not(target_arch = "wasm32"))]
pub mod native;
#[cfg(target_arch = "wasm32")]
pub mod web;

use bevy::prelude::*;

use crate::error::ViewerResult;

/// Pixel size of the region the viewer renders into.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct Container {
    pub width: f32,
    pub height: f32,
}

impl Container {
    /// Width over height, falling back to square for a collapsed container.
    pub fn aspect_ratio(&self) -> f32 {
        aspect_ratio(self.width, self.height)
    }
}

pub fn aspect_ratio(width: f32, height: f32) -> f32 {
    if width > 0.0 && height > 0.0 {
        width / height
    } else {
        1.0
    }
}

/// Access to the environment hosting the viewer.
pub trait ContainerHost {
    /// Current size of the container with the given id, if it exists.
    fn find_container(&self, id: &str) -> Option<Container>;

    /// Create the drawing surface inside the container.
    ///
    /// Returns the CSS selector of the surface, or `None` when the host
    /// provides its own window.
    fn attach_surface(&self, id: &str) -> ViewerResult<Option<String>>;
}

/// Milliseconds since the Unix epoch, as the page clock reports it.
pub fn wall_clock_millis() -> f64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now()
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|elapsed| elapsed.as_secs_f64() * 1000.0)
            .unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aspect_ratio_is_width_over_height() {
        let container = Container {
            width: 1200.0,
            height: 600.0,
        };
        assert_eq!(container.aspect_ratio(), 2.0);
    }

    #[test]
    fn collapsed_container_is_square() {
        assert_eq!(aspect_ratio(640.0, 0.0), 1.0);
        assert_eq!(aspect_ratio(0.0, 0.0), 1.0);
    }

    #[test]
    fn wall_clock_is_after_epoch() {
        assert!(wall_clock_millis() > 0.0);
    }
}
