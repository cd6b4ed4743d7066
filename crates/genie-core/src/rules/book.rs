use serde::Serialize;

use super::intent::{Intent, Reply};

const SCRAPBOOK_KEYWORDS: &[&str] = &["scrapbook", "memory"];

/// Whether an utterance asks for the scrapbook studio.
///
/// Checked before any [`RuleBook`] lookup.
pub fn is_scrapbook_request(text: &str) -> bool {
    let lower = text.to_lowercase();
    SCRAPBOOK_KEYWORDS.iter().any(|k| lower.contains(k))
}

/// Maps substrings of the lowercased input to an intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct KeywordRule {
    pub intent: Intent,
    pub keywords: &'static [&'static str],
}

impl KeywordRule {
    pub const fn new(intent: Intent, keywords: &'static [&'static str]) -> Self {
        Self { intent, keywords }
    }

    /// Matches against already-lowercased text.
    pub fn matches(&self, lower: &str) -> bool {
        self.keywords.iter().any(|k| lower.contains(k))
    }
}

const CANONICAL_RULES: &[KeywordRule] = &[
    KeywordRule::new(Intent::MoodCheck, &["mood"]),
    KeywordRule::new(Intent::BurntOut, &["burnt out"]),
    KeywordRule::new(Intent::ScamCheck, &["scam"]),
    KeywordRule::new(Intent::BudgetCheck, &["budget"]),
    KeywordRule::new(Intent::LocalLife, &["local"]),
];

const TRIP_PHASE_RULES: &[KeywordRule] = &[
    KeywordRule::new(Intent::FlightSearch, &["flight", "ticket"]),
    KeywordRule::new(Intent::DestinationIdeas, &["where should i go", "ideas"]),
    KeywordRule::new(Intent::NearbySpot, &["where to eat", "nearby"]),
    KeywordRule::new(Intent::TripSummary, &["i am back", "summary"]),
];

/// Ordered keyword rules; the first match wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleBook {
    rules: Vec<KeywordRule>,
}

impl Default for RuleBook {
    fn default() -> Self {
        Self::canonical()
    }
}

impl RuleBook {
    /// The five canonical rules: mood, burnt out, scam, budget, local.
    pub fn canonical() -> Self {
        Self {
            rules: CANONICAL_RULES.to_vec(),
        }
    }

    /// Canonical rules followed by the trip-phase rules (flights, ideas,
    /// nearby spots, trip summary).
    pub fn extended() -> Self {
        let mut rules = CANONICAL_RULES.to_vec();
        rules.extend_from_slice(TRIP_PHASE_RULES);
        Self { rules }
    }

    pub fn from_flag(extended: bool) -> Self {
        if extended {
            Self::extended()
        } else {
            Self::canonical()
        }
    }

    pub fn rules(&self) -> &[KeywordRule] {
        &self.rules
    }

    /// First rule matching the text, if any.
    pub fn find(&self, text: &str) -> Option<&KeywordRule> {
        let lower = text.to_lowercase();
        self.rules.iter().find(|rule| rule.matches(&lower))
    }

    /// Resolves the reply for an utterance, falling back to the help reply.
    pub fn resolve(&self, text: &str) -> Reply {
        self.find(text)
            .map(|rule| rule.intent.reply())
            .unwrap_or_else(Reply::fallback)
    }
}
