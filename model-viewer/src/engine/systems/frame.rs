use bevy::prelude::*;

use crate::engine::core::config::ViewerConfig;
use crate::engine::core::viewer_state::ViewerState;
use crate::engine::host::wall_clock_millis;
use crate::engine::loading::model_fit::ViewerModel;

/// Vertical step added to the model each frame for the floating motion.
pub fn float_step(wall_clock_ms: f64, frequency: f64, amplitude: f32) -> f32 {
    (wall_clock_ms * frequency).sin() as f32 * amplitude
}

/// Ease the model towards the pointer target and bob it.
///
/// The float step is added to the current height every frame, so the model
/// drifts rather than oscillating around a fixed point.
pub fn animate_model(
    mut state: ResMut<ViewerState>,
    config: Res<ViewerConfig>,
    mut models: Query<&mut Transform, With<ViewerModel>>,
) {
    let Some(model) = state.model else {
        return;
    };
    let Ok(mut transform) = models.get_mut(model) else {
        return;
    };

    let target = state.target;
    state.current.approach(target, config.smoothing);

    transform.rotation = state.current.to_quat();
    transform.translation.y += float_step(
        wall_clock_millis(),
        config.float_frequency,
        config.float_amplitude,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::core::viewer_state::Orientation;

    #[test]
    fn float_step_follows_sine_of_wall_clock() {
        assert_eq!(float_step(0.0, 0.001, 0.001), 0.0);
        let quarter_turn_ms = std::f64::consts::FRAC_PI_2 / 0.001;
        assert!((float_step(quarter_turn_ms, 0.001, 0.001) - 0.001).abs() < 1e-9);
        assert!((float_step(-quarter_turn_ms, 0.001, 0.001) + 0.001).abs() < 1e-9);
    }

    fn frame_app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .init_resource::<ViewerState>()
            .insert_resource(ViewerConfig::default())
            .add_systems(Update, animate_model);
        app
    }

    #[test]
    fn without_model_nothing_moves() {
        let mut app = frame_app();
        app.world_mut().resource_mut::<ViewerState>().target = Orientation::new(0.3, 0.5);
        app.update();

        let state = app.world().resource::<ViewerState>();
        assert_eq!(state.current, Orientation::ZERO);
    }

    #[test]
    fn model_eases_towards_target() {
        let mut app = frame_app();
        let model = app
            .world_mut()
            .spawn((Transform::default(), ViewerModel))
            .id();
        {
            let mut state = app.world_mut().resource_mut::<ViewerState>();
            state.model = Some(model);
            state.target = Orientation::new(0.3, 0.5);
        }

        app.update();

        let state = app.world().resource::<ViewerState>();
        assert!((state.current.pitch - 0.015).abs() < 1e-6);
        assert!((state.current.yaw - 0.025).abs() < 1e-6);

        let transform = app.world().get::<Transform>(model).unwrap();
        let expected = Orientation::new(0.015, 0.025).to_quat();
        assert!(transform.rotation.angle_between(expected) < 1e-5);
        assert!(transform.translation.y.abs() <= 0.001 + 1e-6);
    }

    #[test]
    fn rotation_error_shrinks_every_frame() {
        let mut app = frame_app();
        let model = app
            .world_mut()
            .spawn((Transform::default(), ViewerModel))
            .id();
        let target = Orientation::new(-0.3, 0.5);
        {
            let mut state = app.world_mut().resource_mut::<ViewerState>();
            state.model = Some(model);
            state.target = target;
        }

        let mut previous = f32::INFINITY;
        for _ in 0..50 {
            app.update();
            let distance = app.world().resource::<ViewerState>().current.distance(target);
            assert!(distance < previous);
            previous = distance;
        }
    }
}
