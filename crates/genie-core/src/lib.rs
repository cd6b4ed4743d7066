//! Domain layer for Travel Genie.
//!
//! Travel Genie is a conversational travel planner whose replies are canned
//! cards picked by keyword. This crate holds the static tables (destinations,
//! backgrounds, keyword rules, quick actions) and the synchronous state
//! machine that decides what the interface shows. Timers live one layer up,
//! in `genie-application`.

pub mod card;
pub mod config;
pub mod destination;
pub mod error;
pub mod quick_action;
pub mod rules;
pub mod scrapbook;
pub mod session;
pub mod view;

// Re-export common error type
pub use error::GenieError;
