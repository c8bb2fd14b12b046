/// Fixed ambient and directional lighting rig.
pub mod lighting;
