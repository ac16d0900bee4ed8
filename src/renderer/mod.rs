//! WebGPU rendering module
//!
//! Draws the background, ball and paddles as textured quads.

pub mod sprite_pipeline;
pub mod vertex;

pub use sprite_pipeline::SpriteRenderState;
