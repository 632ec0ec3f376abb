// src/utilities/mod.rs

pub mod format;
pub mod scale;

pub use format::format_thousands;
pub use scale::{quantize, LinearScale};
