//! Application layer for Travel Genie.
//!
//! This crate runs the domain state machine on tokio: it fires scheduled
//! transitions after their delays, cancels them on reset, and fans state
//! changes out to renderers.

pub mod controller;

pub use controller::ViewController;
