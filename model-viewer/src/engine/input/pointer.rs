use bevy::input::touch::{TouchInput, TouchPhase};
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::engine::core::config::ViewerConfig;
use crate::engine::core::viewer_state::ViewerState;

/// Map a position inside `rect` to -1..1 on both axes, with +y towards the top.
///
/// Returns `None` for a collapsed rectangle.
pub fn normalize_pointer(position: Vec2, rect: Rect) -> Option<Vec2> {
    let size = rect.size();
    if size.x <= 0.0 || size.y <= 0.0 {
        return None;
    }

    Some(Vec2::new(
        ((position.x - rect.min.x) / size.x) * 2.0 - 1.0,
        -((position.y - rect.min.y) / size.y) * 2.0 + 1.0,
    ))
}

/// Touch ids in the order they went down. The first entry is the only one tracked.
#[derive(Resource, Debug, Default)]
pub struct ActiveTouches {
    order: Vec<u64>,
}

impl ActiveTouches {
    pub fn begin(&mut self, id: u64) {
        if !self.order.contains(&id) {
            self.order.push(id);
        }
    }

    pub fn end(&mut self, id: u64) {
        self.order.retain(|&active| active != id);
    }

    pub fn first(&self) -> Option<u64> {
        self.order.first().copied()
    }
}

fn window_rect(window: &Window) -> Rect {
    Rect::new(0.0, 0.0, window.width(), window.height())
}

pub fn track_cursor(
    mut cursor: EventReader<CursorMoved>,
    windows: Query<&Window, With<PrimaryWindow>>,
    config: Res<ViewerConfig>,
    mut state: ResMut<ViewerState>,
) {
    for event in cursor.read() {
        let Ok(window) = windows.get(event.window) else {
            continue;
        };
        if let Some(pointer) = normalize_pointer(event.position, window_rect(window)) {
            state.track_pointer(pointer, config.yaw_gain, config.pitch_gain);
        }
    }
}

pub fn track_touch(
    mut touches: EventReader<TouchInput>,
    mut active: ResMut<ActiveTouches>,
    windows: Query<&Window, With<PrimaryWindow>>,
    config: Res<ViewerConfig>,
    mut state: ResMut<ViewerState>,
) {
    for touch in touches.read() {
        match touch.phase {
            TouchPhase::Started => active.begin(touch.id),
            TouchPhase::Ended | TouchPhase::Canceled => active.end(touch.id),
            TouchPhase::Moved => {
                // A touch may already be down when tracking starts.
                active.begin(touch.id);
                if active.first() != Some(touch.id) {
                    continue;
                }
                let Ok(window) = windows.get(touch.window) else {
                    continue;
                };
                if let Some(pointer) = normalize_pointer(touch.position, window_rect(window)) {
                    state.track_pointer(pointer, config.yaw_gain, config.pitch_gain);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::window::WindowResolution;

    const RECT: Rect = Rect {
        min: Vec2::new(100.0, 50.0),
        max: Vec2::new(500.0, 350.0),
    };

    #[test]
    fn centre_is_origin() {
        let pointer = normalize_pointer(RECT.center(), RECT).unwrap();
        assert!(pointer.length() < 1e-6);
    }

    #[test]
    fn top_right_corner_is_positive_one() {
        let pointer = normalize_pointer(Vec2::new(RECT.max.x, RECT.min.y), RECT).unwrap();
        assert!((pointer - Vec2::ONE).length() < 1e-6);
    }

    #[test]
    fn screen_down_is_negative() {
        let pointer = normalize_pointer(Vec2::new(RECT.min.x, RECT.max.y), RECT).unwrap();
        assert!((pointer - Vec2::new(-1.0, -1.0)).length() < 1e-6);
    }

    #[test]
    fn collapsed_rect_is_ignored() {
        let flat = Rect::new(0.0, 0.0, 200.0, 0.0);
        assert!(normalize_pointer(Vec2::ZERO, flat).is_none());
    }

    #[test]
    fn first_touch_is_earliest_still_active() {
        let mut touches = ActiveTouches::default();
        touches.begin(7);
        touches.begin(3);
        touches.begin(7);
        assert_eq!(touches.first(), Some(7));

        touches.end(7);
        assert_eq!(touches.first(), Some(3));

        touches.end(3);
        assert_eq!(touches.first(), None);
    }

    fn input_app() -> (App, Entity) {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .add_event::<CursorMoved>()
            .add_event::<TouchInput>()
            .init_resource::<ViewerState>()
            .init_resource::<ActiveTouches>()
            .insert_resource(ViewerConfig::default())
            .add_systems(Update, (track_cursor, track_touch));

        let window = app
            .world_mut()
            .spawn((
                Window {
                    resolution: WindowResolution::new(800.0, 600.0),
                    ..default()
                },
                PrimaryWindow,
            ))
            .id();
        (app, window)
    }

    fn touch(window: Entity, id: u64, phase: TouchPhase, position: Vec2) -> TouchInput {
        TouchInput {
            phase,
            position,
            window,
            force: None,
            id,
        }
    }

    #[test]
    fn cursor_at_centre_targets_rest() {
        let (mut app, window) = input_app();
        app.world_mut().send_event(CursorMoved {
            window,
            position: Vec2::new(400.0, 300.0),
            delta: None,
        });
        app.update();

        let state = app.world().resource::<ViewerState>();
        assert!(state.pointer.length() < 1e-6);
        assert!(state.target.yaw.abs() < 1e-6);
        assert!(state.target.pitch.abs() < 1e-6);
    }

    #[test]
    fn cursor_at_top_right_targets_full_gain() {
        let (mut app, window) = input_app();
        app.world_mut().send_event(CursorMoved {
            window,
            position: Vec2::new(800.0, 0.0),
            delta: None,
        });
        app.update();

        let state = app.world().resource::<ViewerState>();
        assert!((state.target.yaw - 0.5).abs() < 1e-6);
        assert!((state.target.pitch - 0.3).abs() < 1e-6);
    }

    #[test]
    fn only_first_touch_moves_target() {
        let (mut app, window) = input_app();
        app.world_mut().send_event(touch(window, 1, TouchPhase::Started, Vec2::ZERO));
        app.world_mut().send_event(touch(window, 2, TouchPhase::Started, Vec2::ZERO));
        app.world_mut().send_event(touch(
            window,
            1,
            TouchPhase::Moved,
            Vec2::new(800.0, 0.0),
        ));
        app.world_mut().send_event(touch(
            window,
            2,
            TouchPhase::Moved,
            Vec2::new(0.0, 600.0),
        ));
        app.update();

        let state = app.world().resource::<ViewerState>();
        assert!((state.pointer - Vec2::ONE).length() < 1e-6);

        // Once the first touch lifts, the second one takes over.
        app.world_mut().send_event(touch(window, 1, TouchPhase::Ended, Vec2::ZERO));
        app.world_mut().send_event(touch(
            window,
            2,
            TouchPhase::Moved,
            Vec2::new(0.0, 600.0),
        ));
        app.update();

        let state = app.world().resource::<ViewerState>();
        assert!((state.pointer - Vec2::new(-1.0, -1.0)).length() < 1e-6);
    }
}
