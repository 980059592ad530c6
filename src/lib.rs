//! Homogeneous transform matrices for feeding a rendering pipeline.

pub mod angle;
pub mod matrix;

pub use angle::{Degrees, Radians};
pub use matrix::Matrix4;
