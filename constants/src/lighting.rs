use bevy::math::Vec3;

// Intensities are in page units (0..1) and scaled to photometric units on spawn.
pub const AMBIENT_INTENSITY: f32 = 0.8;
pub const KEY_LIGHT_INTENSITY: f32 = 0.5;
pub const FILL_LIGHT_INTENSITY: f32 = 0.3;

pub const KEY_LIGHT_POSITION: Vec3 = Vec3::new(0.0, 1.0, 1.0);
pub const FILL_LIGHT_POSITION: Vec3 = Vec3::new(0.0, 1.0, -1.0);

/// cd/m² per unit of ambient intensity.
pub const AMBIENT_BRIGHTNESS_SCALE: f32 = 1000.0;

/// Lux per unit of directional intensity.
pub const DIRECTIONAL_ILLUMINANCE_SCALE: f32 = 10_000.0;
