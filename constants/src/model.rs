/// Size in world units that the largest model dimension is scaled to.
pub const MODEL_TARGET_SIZE: f32 = 2.5;
