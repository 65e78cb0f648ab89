pub mod animator;
pub mod render;
