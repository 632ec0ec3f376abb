// src/config/config_types.rs
//
// Config types for the app

use crate::animation::EasingType;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct PathConfig {
    pub world_file: String,
    pub export_file: String,
    pub import_file: String,
    pub drunk_file: String,
}

#[derive(Debug, Deserialize)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Deserialize)]
pub struct LayoutConfig {
    pub mobile_breakpoint: f32,
    pub slider_strip_height: f32,
}

#[derive(Debug, Deserialize)]
pub struct AnimationConfig {
    pub duration: f32,
    pub easing: EasingType,
}
