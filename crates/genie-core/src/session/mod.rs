//! Session domain module.
//!
//! This module contains the chat message types and the conversation state
//! machine that owns the view mode, history, karma and backdrop.
//!
//! # Module Structure
//!
//! - `message`: Chat message types (`MessageRole`, `ChatMessage`)
//! - `event`: Observable state changes (`SessionEvent`)
//! - `transition`: Operation results (`Effects`, `ScheduledStep`, `Rejection`)
//! - `state`: The state machine (`ConversationState`, `SessionSnapshot`)

mod event;
mod message;
mod state;
mod transition;

// Re-export public API
pub use event::SessionEvent;
pub use message::{ChatMessage, MessageRole};
pub use state::{ConversationState, SessionSnapshot};
pub use transition::{Effects, Outcome, Rejection, ScheduledAction, ScheduledStep};
