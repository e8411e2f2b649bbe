pub mod geometry;
pub mod landmarks;
pub mod poses;
pub mod subscores;
pub mod thresholds;
