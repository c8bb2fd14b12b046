use bevy::prelude::*;
use constants::lighting::*;

use crate::engine::core::viewer_state::ViewerState;

#[derive(Component)]
pub struct ViewerLight;

/// Ambient fill plus a key light in front and a fill light behind, both aimed at the origin.
pub fn spawn_lighting(mut commands: Commands, mut state: ResMut<ViewerState>) {
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: AMBIENT_INTENSITY * AMBIENT_BRIGHTNESS_SCALE,
        ..default()
    });

    for (intensity, position) in [
        (KEY_LIGHT_INTENSITY, KEY_LIGHT_POSITION),
        (FILL_LIGHT_INTENSITY, FILL_LIGHT_POSITION),
    ] {
        let light = commands
            .spawn((
                DirectionalLight {
                    color: Color::WHITE,
                    illuminance: intensity * DIRECTIONAL_ILLUMINANCE_SCALE,
                    shadows_enabled: false,
                    ..default()
                },
                Transform::from_translation(position).looking_at(Vec3::ZERO, Vec3::Y),
                ViewerLight,
            ))
            .id();
        state.lights.push(light);
    }
}
