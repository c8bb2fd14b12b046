use bevy::prelude::*;
use bevy::window::{PrimaryWindow, WindowResized};

use crate::engine::core::config::ViewerConfig;
use crate::engine::core::viewer_state::ViewerState;
use crate::engine::host::{Container, aspect_ratio};

#[derive(Component)]
pub struct ViewerCamera;

pub fn perspective(config: &ViewerConfig, aspect: f32) -> Projection {
    Projection::Perspective(PerspectiveProjection {
        fov: config.fov_degrees.to_radians(),
        near: config.near,
        far: config.far,
        aspect_ratio: aspect,
    })
}

/// Spawn the camera sized to the surface, falling back to the container size
/// before the window exists.
pub fn spawn_viewer_camera(
    mut commands: Commands,
    mut state: ResMut<ViewerState>,
    config: Res<ViewerConfig>,
    container: Res<Container>,
    windows: Query<&Window, With<PrimaryWindow>>,
) {
    let (size, aspect) = match windows.single() {
        Ok(window) => (
            Vec2::new(window.width(), window.height()),
            aspect_ratio(window.width(), window.height()),
        ),
        Err(_) => (
            Vec2::new(container.width, container.height),
            container.aspect_ratio(),
        ),
    };

    let camera = commands
        .spawn((
            Camera3d::default(),
            Camera {
                // Transparent so the page shows through around the model.
                clear_color: ClearColorConfig::Custom(Color::NONE),
                ..default()
            },
            perspective(&config, aspect),
            Transform::from_translation(config.camera_position()).looking_at(Vec3::ZERO, Vec3::Y),
            ViewerCamera,
        ))
        .id();

    state.camera = Some(camera);
    state.surface = size;
}

/// Keep the projection aspect and recorded surface size in step with the window.
pub fn handle_resize(
    mut resized: EventReader<WindowResized>,
    windows: Query<Entity, With<PrimaryWindow>>,
    mut projections: Query<&mut Projection, With<ViewerCamera>>,
    mut state: ResMut<ViewerState>,
) {
    let Ok(primary) = windows.single() else {
        resized.clear();
        return;
    };

    for event in resized.read() {
        if event.window != primary {
            continue;
        }

        let aspect = aspect_ratio(event.width, event.height);
        for mut projection in &mut projections {
            if let Projection::Perspective(perspective) = projection.as_mut() {
                perspective.aspect_ratio = aspect;
            }
        }
        state.surface = Vec2::new(event.width, event.height);
    }
}
