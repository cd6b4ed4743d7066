use serde::Serialize;
use strum::{Display, EnumIter};

use crate::card::{Card, GuideKind, TimelineEntry};

/// Reply used when no keyword rule matches.
pub const DEFAULT_REPLY: &str =
    "I am Travel Genie. I can plan by Mood, Check Scams, or Create a Scrapbook.";

/// What a matched utterance is asking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, EnumIter)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Intent {
    MoodCheck,
    BurntOut,
    ScamCheck,
    BudgetCheck,
    LocalLife,
    FlightSearch,
    DestinationIdeas,
    NearbySpot,
    TripSummary,
}

/// A canned assistant reply plus the side effects it carries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reply {
    /// Intent that produced the reply; `None` for the default help reply.
    pub intent: Option<Intent>,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card: Option<Card>,
    /// Karma added when the reply is delivered.
    pub karma_reward: u32,
    /// New conversation step, if the reply moves it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step: Option<u32>,
}

impl Reply {
    fn text(intent: Option<Intent>, content: &str) -> Self {
        Self {
            intent,
            content: content.to_string(),
            card: None,
            karma_reward: 0,
            step: None,
        }
    }

    fn with_card(mut self, card: Card) -> Self {
        self.card = Some(card);
        self
    }

    /// The help reply for unmatched input.
    pub fn fallback() -> Self {
        Self::text(None, DEFAULT_REPLY)
    }
}

impl Intent {
    /// Builds the canned reply for this intent.
    pub fn reply(self) -> Reply {
        let me = Some(self);
        match self {
            Intent::MoodCheck => Reply {
                step: Some(1),
                ..Reply::text(
                    me,
                    "Forget destinations. How are you feeling? (Burnt Out / Curious / Party)",
                )
            },
            Intent::BurntOut => Reply::text(me, "I hear you. You need a Digital Detox.")
                .with_card(Card::mood_itinerary(
                    "Healing",
                    "Kyoto",
                    &["Zen Garden", "Forest Cabin"],
                )),
            Intent::ScamCheck => Reply {
                karma_reward: 5,
                ..Reply::text(me, "⚠️ CAUTION: Alerts found.").with_card(Card::ScamAlert {
                    location: "Shinjuku".to_string(),
                    scam_type: "Bar Trap".to_string(),
                    risk_level: "High".to_string(),
                    report_count: 12,
                })
            },
            Intent::BudgetCheck => {
                Reply::text(me, "Here is the real cost.").with_card(Card::BudgetReality {
                    location: "Bali".to_string(),
                    expected_price: 800,
                    real_price: 1350,
                    hidden_costs: vec!["Tourist Tax".to_string(), "Water Filter".to_string()],
                })
            }
            Intent::LocalLife => {
                Reply::text(me, "Here is the local schedule.").with_card(Card::LocalLife {
                    city: "Tokyo".to_string(),
                    timeline: vec![
                        TimelineEntry::new("07:00 AM", "Fish Market"),
                        TimelineEntry::new("08:00 PM", "Jazz Bar"),
                    ],
                })
            }
            Intent::FlightSearch => {
                Reply::text(me, "Here is the best deal I found.").with_card(Card::FlightFinder {
                    from: "Home".to_string(),
                    to: "Paris".to_string(),
                    price: "$640".to_string(),
                    duration: "7h 35m".to_string(),
                })
            }
            Intent::DestinationIdeas => Reply::text(me, "Here are some ideas for your next trip.")
                .with_card(Card::DestinationExplorer {
                    place: "Lisbon".to_string(),
                    highlights: vec![
                        "Tram 28".to_string(),
                        "Pastel de Nata".to_string(),
                        "Alfama Sunset".to_string(),
                    ],
                    best_season: "Spring".to_string(),
                }),
            Intent::NearbySpot => {
                Reply::text(me, "Something good is close by.").with_card(Card::LocalGuide {
                    nearby_spot: "Hidden Alley Cafe".to_string(),
                    kind: GuideKind::Food,
                    distance: "300m".to_string(),
                })
            }
            Intent::TripSummary => Reply::text(me, "Welcome home! Here is your trip summary.")
                .with_card(Card::TripStats {
                    total_spent: "$2,140".to_string(),
                    top_category: "Food & Drinks".to_string(),
                }),
        }
    }
}

/// Greeting appended when the traveller arrives at a destination.
pub fn welcome_reply(place_name: &str) -> Reply {
    Reply {
        intent: None,
        content: format!("Welcome to {place_name}! 🏃‍♂️💨 Based on your vibe, here is the plan:"),
        card: Some(Card::mood_itinerary(
            "Explorer Mode",
            place_name,
            &["Hidden Alley Cafe", "Local Market Run", "Sunset Viewpoint"],
        )),
        karma_reward: 0,
        step: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_every_card_is_valid() {
        for intent in Intent::iter() {
            if let Some(card) = intent.reply().card {
                card.validate()
                    .unwrap_or_else(|e| panic!("{intent} produced an invalid card: {e}"));
            }
        }
    }

    #[test]
    fn test_only_scam_check_rewards_karma() {
        let rewarding: Vec<Intent> = Intent::iter()
            .filter(|i| i.reply().karma_reward > 0)
            .collect();
        assert_eq!(rewarding, vec![Intent::ScamCheck]);
        assert_eq!(Intent::ScamCheck.reply().karma_reward, 5);
    }

    #[test]
    fn test_welcome_reply_names_the_place() {
        let reply = welcome_reply("Paris");
        assert!(reply.content.contains("Welcome to Paris!"));
        match reply.card {
            Some(Card::MoodItinerary { place, mood, .. }) => {
                assert_eq!(place, "Paris");
                assert_eq!(mood, "Explorer Mode");
            }
            other => panic!("expected itinerary, got {other:?}"),
        }
    }
}
