use bevy::prelude::*;

use crate::engine::core::viewer_state::ViewerState;
use crate::engine::input::pointer::ActiveTouches;
use crate::engine::loading::model_fit::ViewerModel;

/// Release everything the running viewer spawned and forget its state.
///
/// Runs when leaving [`ViewerPhase::Running`](crate::engine::core::app_state::ViewerPhase).
/// Despawning the camera stops rendering; input and frame systems are gated
/// on the running phase so nothing else touches the scene afterwards.
pub fn teardown_viewer(
    mut commands: Commands,
    mut state: ResMut<ViewerState>,
    mut touches: ResMut<ActiveTouches>,
    models: Query<Entity, With<ViewerModel>>,
) {
    let mut released = Vec::with_capacity(state.lights.len() + 2);
    released.extend(state.camera.take());
    released.append(&mut state.lights);
    released.extend(models.iter());

    for entity in released {
        if let Ok(mut entity_commands) = commands.get_entity(entity) {
            entity_commands.despawn();
        }
    }

    *state = ViewerState::default();
    *touches = ActiveTouches::default();
    info!("Viewer stopped; scene released");
}
