// src/core/mod.rs

pub mod split;
pub mod text;

pub use text::rendered_text;
