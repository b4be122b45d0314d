pub mod api;
pub mod progress;
