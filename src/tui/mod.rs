pub mod app;
pub mod input;
pub mod input_buffer;
pub mod render;
pub mod theme;

pub use app::run;
