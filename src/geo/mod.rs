// src/geo/mod.rs

pub mod math;
pub mod projection;

pub use math::{interpolate_rotation, spherical_centroid};
pub use projection::Orthographic;
