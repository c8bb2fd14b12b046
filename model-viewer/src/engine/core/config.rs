use bevy::prelude::*;
use constants::{camera, input, model, motion, path};
use serde::{Deserialize, Serialize};

/// Tunables read by the viewer systems. Lighting is fixed and lives in `constants::lighting`.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub container_id: String,
    pub asset_path: String,
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
    pub camera_position: [f32; 3],
    pub target_size: f32,
    pub yaw_gain: f32,
    pub pitch_gain: f32,
    pub smoothing: f32,
    pub float_amplitude: f32,
    pub float_frequency: f64,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            container_id: path::CONTAINER_ID.to_string(),
            asset_path: path::MODEL_ASSET_PATH.to_string(),
            fov_degrees: camera::CAMERA_FOV_DEGREES,
            near: camera::CAMERA_NEAR,
            far: camera::CAMERA_FAR,
            camera_position: camera::CAMERA_POSITION.to_array(),
            target_size: model::MODEL_TARGET_SIZE,
            yaw_gain: input::YAW_GAIN,
            pitch_gain: input::PITCH_GAIN,
            smoothing: motion::ROTATION_SMOOTHING,
            float_amplitude: motion::FLOAT_AMPLITUDE,
            float_frequency: motion::FLOAT_FREQUENCY,
        }
    }
}

impl ViewerConfig {
    pub fn camera_position(&self) -> Vec3 {
        Vec3::from_array(self.camera_position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_page_setup() {
        let config = ViewerConfig::default();
        assert_eq!(config.container_id, "three-container");
        assert_eq!(config.fov_degrees, 50.0);
        assert_eq!(config.camera_position(), Vec3::new(0.0, 0.0, 5.0));
        assert_eq!(config.target_size, 2.5);
        assert_eq!(config.smoothing, 0.05);
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let config: ViewerConfig =
            serde_json::from_str(r#"{ "asset_path": "models/other.glb" }"#).unwrap();
        assert_eq!(config.asset_path, "models/other.glb");
        assert_eq!(config.yaw_gain, 0.5);
        assert_eq!(config.pitch_gain, 0.3);
    }
}
