pub mod anim;
pub mod field;
pub mod render;
pub mod studies;

// Shell and plumbing
pub mod app;
pub mod export;
pub mod telemetry;
