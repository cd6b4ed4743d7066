use serde::Serialize;

use super::ChatMessage;
use crate::destination::Background;
use crate::scrapbook::ScrapbookStage;
use crate::view::ViewMode;

/// Observable state changes, published to renderers in the order they happen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SessionEvent {
    /// The active view changed.
    ViewChanged { from: ViewMode, to: ViewMode },
    /// A new backdrop should be shown.
    BackgroundChanged {
        background: Background,
        image_ref: &'static str,
    },
    /// A message was appended to the chat history.
    MessageAppended { message: ChatMessage },
    /// The "genie is thinking" indicator toggled.
    LoadingChanged { loading: bool },
    /// Karma increased by `delta`.
    KarmaChanged { karma: u32, delta: u32 },
    /// The coarse conversation step moved.
    StepChanged { step: u32 },
    /// The scrapbook photo set was replaced.
    PhotosChanged { stage: ScrapbookStage, count: usize },
    /// The session went back to the map and the history was cleared.
    SessionReset,
}

impl SessionEvent {
    pub(crate) fn background(background: Background) -> Self {
        SessionEvent::BackgroundChanged {
            background,
            image_ref: background.image_ref(),
        }
    }
}
