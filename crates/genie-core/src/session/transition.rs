//! Results of driving the conversation state machine.

use std::time::Duration;

use serde::Serialize;
use thiserror::Error;

use super::SessionEvent;
use crate::destination::Background;
use crate::view::ViewMode;

/// A delayed transition the caller must fire later via
/// [`ConversationState::apply`](super::ConversationState::apply).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduledStep {
    /// Delay measured from the operation that produced the step.
    pub delay: Duration,
    /// Session epoch the step belongs to; stale epochs are ignored.
    pub epoch: u64,
    pub action: ScheduledAction,
}

/// What happens when a scheduled step fires.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScheduledAction {
    /// Swap the backdrop midway through travelling.
    SwapBackground { background: Background },
    /// Land in the chat and greet the traveller.
    ///
    /// Carries the destination backdrop so arrival shows it even when the
    /// swap is configured to fire later.
    Arrive {
        place_name: String,
        background: Background,
    },
    /// Deliver the reply to a pending utterance.
    DeliverReply { utterance: String },
    /// Finish the transition into the scrapbook studio.
    EnterScrapbook,
}

impl ScheduledAction {
    pub fn name(&self) -> &'static str {
        match self {
            ScheduledAction::SwapBackground { .. } => "swap_background",
            ScheduledAction::Arrive { .. } => "arrive",
            ScheduledAction::DeliverReply { .. } => "deliver_reply",
            ScheduledAction::EnterScrapbook => "enter_scrapbook",
        }
    }
}

/// Events produced right away plus steps to fire later.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Effects {
    pub events: Vec<SessionEvent>,
    pub scheduled: Vec<ScheduledStep>,
}

impl Effects {
    pub fn is_empty(&self) -> bool {
        self.events.is_empty() && self.scheduled.is_empty()
    }

    pub(crate) fn push(&mut self, event: SessionEvent) {
        self.events.push(event);
    }

    pub(crate) fn schedule(&mut self, delay: Duration, epoch: u64, action: ScheduledAction) {
        self.scheduled.push(ScheduledStep {
            delay,
            epoch,
            action,
        });
    }
}

/// Why an operation was refused. Refusals never change state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum Rejection {
    /// Empty or whitespace-only utterance.
    #[error("nothing to send")]
    EmptyInput,
    /// A reply is still pending.
    #[error("still waiting for the previous reply")]
    Busy,
    /// The operation is not available in the current view.
    #[error("not available in the {actual} view (needs {expected})")]
    WrongView { expected: ViewMode, actual: ViewMode },
    /// A photo import with no photos.
    #[error("no photos selected")]
    EmptySelection,
}

/// Outcome of a state machine operation.
pub type Outcome = std::result::Result<Effects, Rejection>;
