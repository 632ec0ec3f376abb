// src/animation/mod.rs

pub mod easing;
pub mod rotation;

pub use easing::EasingType;
pub use rotation::RotationAnimator;
