//! View mode types.
//!
//! Exactly one view is active at a time; the view gates which input
//! affordances (map pins, chat box, upload button) a renderer offers.

mod mode;

pub use mode::ViewMode;
