use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// The single exclusive screen the interface is showing.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ViewMode {
    /// World map landing screen.
    #[default]
    Map,
    /// Transient animation between two other views.
    Traveling,
    /// Conversation with the genie.
    Chat,
    /// Photo scrapbook studio.
    Scrapbook,
}

impl ViewMode {
    /// Whether the chat input box is available in this view.
    pub fn accepts_utterances(self) -> bool {
        matches!(self, ViewMode::Chat)
    }

    /// Whether destination pins can be clicked in this view.
    pub fn accepts_destination(self) -> bool {
        matches!(self, ViewMode::Map)
    }
}
