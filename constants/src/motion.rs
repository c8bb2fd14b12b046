/// Fraction of the remaining orientation error closed each frame.
pub const ROTATION_SMOOTHING: f32 = 0.05;

/// Per-frame vertical offset amplitude of the floating motion.
pub const FLOAT_AMPLITUDE: f32 = 0.001;

/// Angular rate of the floating motion, in radians per wall-clock millisecond.
pub const FLOAT_FREQUENCY: f64 = 0.001;
