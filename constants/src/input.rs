/// Radians of yaw per unit of normalized horizontal pointer position.
pub const YAW_GAIN: f32 = 0.5;

/// Radians of pitch per unit of normalized vertical pointer position.
pub const PITCH_GAIN: f32 = 0.3;
