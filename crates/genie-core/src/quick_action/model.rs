//! Quick action domain models.

use serde::{Deserialize, Serialize};

use crate::error::{GenieError, Result};

/// A single quick action button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickAction {
    /// Action identifier (mood, local, scam, ...).
    pub id: String,
    /// Button label.
    pub label: String,
    /// Text submitted when the button is clicked.
    pub text: String,
    /// Rendered with the accent colour.
    #[serde(default)]
    pub highlighted: bool,
}

impl QuickAction {
    pub fn new(id: impl Into<String>, label: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            text: text.into(),
            highlighted: false,
        }
    }

    fn highlighted(mut self) -> Self {
        self.highlighted = true;
        self
    }
}

/// The ordered set of quick actions shown under the chat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickActionSet {
    pub actions: Vec<QuickAction>,
}

impl Default for QuickActionSet {
    fn default() -> Self {
        Self {
            actions: vec![
                QuickAction::new("mood", "Mood Trip", "Plan a trip based on my mood"),
                QuickAction::new("local", "Local Life", "Show me a 'Live Like a Local' plan"),
                QuickAction::new("scam", "Scam Alert", "Check for scams in this area"),
                QuickAction::new("budget", "Budget Reality", "Reality check my budget"),
                QuickAction::new("scrapbook", "Create Scrapbook", "I want to create a scrapbook")
                    .highlighted(),
            ],
        }
    }
}

impl QuickActionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets an action by its ID.
    pub fn get(&self, id: &str) -> Option<&QuickAction> {
        self.actions.iter().find(|a| a.id == id)
    }

    /// Gets an action by its ID, failing with `NotFound`.
    pub fn require(&self, id: &str) -> Result<&QuickAction> {
        self.get(id)
            .ok_or_else(|| GenieError::not_found("quick action", id))
    }

    pub fn iter(&self) -> impl Iterator<Item = &QuickAction> {
        self.actions.iter()
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{Intent, RuleBook, is_scrapbook_request};

    #[test]
    fn test_default_set() {
        let set = QuickActionSet::default();
        assert_eq!(set.len(), 5);
        assert_eq!(set.get("scam").unwrap().label, "Scam Alert");
        assert!(set.get("scrapbook").unwrap().highlighted);
        assert!(!set.get("mood").unwrap().highlighted);
    }

    #[test]
    fn test_require_unknown() {
        let err = QuickActionSet::default().require("teleport").unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_every_action_reaches_a_rule_or_the_scrapbook() {
        let book = RuleBook::canonical();
        for action in QuickActionSet::default().iter() {
            let handled = is_scrapbook_request(&action.text) || book.find(&action.text).is_some();
            assert!(handled, "action {} falls through to the help reply", action.id);
        }
        assert_eq!(
            book.resolve(&QuickActionSet::default().get("mood").unwrap().text).intent,
            Some(Intent::MoodCheck)
        );
    }
}
