pub mod actions;
pub mod config;
pub mod destinations;
pub mod reply;
