pub mod animation;
pub mod character;
pub mod entity;
pub mod layer;
pub mod sprite;
pub mod tilemap;
