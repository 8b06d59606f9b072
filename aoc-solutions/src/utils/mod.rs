//! Helpers shared by several puzzle solutions

pub mod dp_cache;
pub mod vec2;
