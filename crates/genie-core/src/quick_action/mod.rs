//! Quick action buttons.
//!
//! Quick actions are canned utterances displayed above the chat input.
//! Clicking one submits its text exactly as if the traveller had typed it.

mod model;

pub use model::{QuickAction, QuickActionSet};
