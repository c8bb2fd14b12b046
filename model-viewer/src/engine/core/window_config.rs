use bevy::prelude::*;
use bevy::window::{PresentMode, WindowResolution};

use crate::engine::host::Container;

pub fn create_window_config(container: &Container, canvas: Option<String>) -> Window {
    let resolution = WindowResolution::new(container.width.max(1.0), container.height.max(1.0));

    #[cfg(target_arch = "wasm32")]
    {
        Window {
            canvas,
            resolution,
            fit_canvas_to_parent: true,
            prevent_default_event_handling: false,
            transparent: true,
            present_mode: PresentMode::AutoVsync,
            ..default()
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = canvas;
        Window {
            title: "Model Viewer".to_string(),
            resolution,
            transparent: true,
            present_mode: PresentMode::AutoVsync,
            ..default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_matches_container_size() {
        let window = create_window_config(
            &Container {
                width: 720.0,
                height: 480.0,
            },
            None,
        );
        assert_eq!(window.width(), 720.0);
        assert_eq!(window.height(), 480.0);
        assert_eq!(window.present_mode, PresentMode::AutoVsync);
        assert!(window.transparent);
    }

    #[test]
    fn collapsed_container_still_gets_a_surface() {
        let window = create_window_config(
            &Container {
                width: 0.0,
                height: 0.0,
            },
            None,
        );
        assert_eq!(window.width(), 1.0);
        assert_eq!(window.height(), 1.0);
    }
}
