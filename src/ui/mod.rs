pub mod camera;
pub mod panels;
pub mod plot;
pub mod scene;
pub mod ticks;
