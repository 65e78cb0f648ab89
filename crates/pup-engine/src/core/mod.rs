pub mod body;
pub mod geometry;
pub mod levels;
pub mod scene;
pub mod time;
pub mod units;
