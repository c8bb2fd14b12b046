//! Fixed values shared by the model viewer.

pub mod camera;
pub mod input;
pub mod lighting;
pub mod model;
pub mod motion;
pub mod path;
