use bevy::animation::graph::AnimationNodeIndex;
use bevy::gltf::Gltf;
use bevy::prelude::*;
use serde::Serialize;

use crate::error::ViewerError;

/// Model rotation in radians. Unbounded on both axes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Orientation {
    pub pitch: f32,
    pub yaw: f32,
}

impl Orientation {
    pub const ZERO: Self = Self {
        pitch: 0.0,
        yaw: 0.0,
    };

    pub fn new(pitch: f32, yaw: f32) -> Self {
        Self { pitch, yaw }
    }

    /// Map a normalized pointer position to the orientation it asks for.
    pub fn from_pointer(pointer: Vec2, yaw_gain: f32, pitch_gain: f32) -> Self {
        Self::new(pointer.y * pitch_gain, pointer.x * yaw_gain)
    }

    /// Close `factor` of the remaining gap to `target` on each axis.
    pub fn approach(&mut self, target: Orientation, factor: f32) {
        self.pitch += (target.pitch - self.pitch) * factor;
        self.yaw += (target.yaw - self.yaw) * factor;
    }

    /// Largest per-axis distance to `other`.
    pub fn distance(&self, other: Orientation) -> f32 {
        (self.pitch - other.pitch)
            .abs()
            .max((self.yaw - other.yaw).abs())
    }

    /// Rotation with pitch about X then yaw about Y, no roll.
    pub fn to_quat(self) -> Quat {
        Quat::from_euler(EulerRot::XYZ, self.pitch, self.yaw, 0.0)
    }
}

/// Progress of the single GLB load. Only moves forward.
#[derive(Debug, Clone, Default)]
pub enum ModelLoad {
    #[default]
    Idle,
    Pending(Handle<Gltf>),
    Ready {
        clips: usize,
    },
    Failed(ViewerError),
}

impl ModelLoad {
    pub fn status(&self) -> &'static str {
        match self {
            ModelLoad::Idle => "idle",
            ModelLoad::Pending(_) => "pending",
            ModelLoad::Ready { .. } => "ready",
            ModelLoad::Failed(_) => "failed",
        }
    }

    pub fn is_settled(&self) -> bool {
        matches!(self, ModelLoad::Ready { .. } | ModelLoad::Failed(_))
    }
}

/// Animation graph bound to the loaded model, with one node per clip.
#[derive(Debug, Clone)]
pub struct AnimationDriver {
    pub graph: Handle<AnimationGraph>,
    pub nodes: Vec<AnimationNodeIndex>,
}

/// Everything the viewer mutates over its lifetime, passed to each system as a resource.
#[derive(Resource, Debug, Default)]
pub struct ViewerState {
    pub camera: Option<Entity>,
    pub lights: Vec<Entity>,
    /// Set once the model has been fitted and made visible.
    pub model: Option<Entity>,
    pub animation: Option<AnimationDriver>,
    /// Last pointer position, normalized to -1..1 with +y up.
    pub pointer: Vec2,
    pub target: Orientation,
    pub current: Orientation,
    /// Logical size of the render surface.
    pub surface: Vec2,
    pub load: ModelLoad,
}

impl ViewerState {
    /// Point the model at a new pointer position.
    pub fn track_pointer(&mut self, pointer: Vec2, yaw_gain: f32, pitch_gain: f32) {
        self.pointer = pointer;
        self.target = Orientation::from_pointer(pointer, yaw_gain, pitch_gain);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use constants::input::{PITCH_GAIN, YAW_GAIN};
    use constants::motion::ROTATION_SMOOTHING;

    #[test]
    fn centred_pointer_targets_rest_orientation() {
        let target = Orientation::from_pointer(Vec2::ZERO, YAW_GAIN, PITCH_GAIN);
        assert_eq!(target, Orientation::ZERO);
    }

    #[test]
    fn corner_pointer_targets_full_gain() {
        let target = Orientation::from_pointer(Vec2::ONE, YAW_GAIN, PITCH_GAIN);
        assert!((target.yaw - 0.5).abs() < 1e-6);
        assert!((target.pitch - 0.3).abs() < 1e-6);
    }

    #[test]
    fn approach_converges_monotonically() {
        let target = Orientation::new(0.3, -0.5);
        let mut current = Orientation::ZERO;
        let mut previous = current.distance(target);
        let mut ticks = 0;

        while previous > 1e-5 {
            current.approach(target, ROTATION_SMOOTHING);
            let distance = current.distance(target);
            assert!(
                distance < previous,
                "tick {ticks}: {distance} did not shrink from {previous}"
            );
            previous = distance;
            ticks += 1;
            assert!(ticks < 1000, "did not converge");
        }
    }

    #[test]
    fn approach_moves_axes_independently() {
        let mut current = Orientation::new(0.0, 1.0);
        current.approach(Orientation::new(1.0, 1.0), 0.05);
        assert!((current.pitch - 0.05).abs() < 1e-6);
        assert_eq!(current.yaw, 1.0);
    }

    #[test]
    fn quat_applies_pitch_then_yaw() {
        let rotation = Orientation::new(0.0, std::f32::consts::FRAC_PI_2).to_quat();
        let forward = rotation * Vec3::Z;
        assert!((forward - Vec3::X).length() < 1e-5);
    }

    #[test]
    fn track_pointer_overwrites_previous_target() {
        let mut state = ViewerState::default();
        state.track_pointer(Vec2::new(1.0, 1.0), YAW_GAIN, PITCH_GAIN);
        state.track_pointer(Vec2::new(-1.0, 0.0), YAW_GAIN, PITCH_GAIN);
        assert_eq!(state.pointer, Vec2::new(-1.0, 0.0));
        assert!((state.target.yaw + 0.5).abs() < 1e-6);
        assert_eq!(state.target.pitch, 0.0);
    }

    #[test]
    fn load_status_strings() {
        assert_eq!(ModelLoad::Idle.status(), "idle");
        assert_eq!(ModelLoad::Ready { clips: 2 }.status(), "ready");
        assert!(!ModelLoad::Idle.is_settled());
        assert!(
            ModelLoad::Failed(ViewerError::AssetLoad {
                path: "a.glb".into(),
                reason: "gone".into()
            })
            .is_settled()
        );
    }
}
