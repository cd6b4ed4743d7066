use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::error::{GenieError, Result};

/// Maximum number of highlights on a destination explorer card.
pub const MAX_HIGHLIGHTS: usize = 3;

/// One row on a "live like a local" timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub time: String,
    pub activity: String,
}

impl TimelineEntry {
    pub fn new(time: impl Into<String>, activity: impl Into<String>) -> Self {
        Self {
            time: time.into(),
            activity: activity.into(),
        }
    }
}

/// Kind of nearby spot on a local guide card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
pub enum GuideKind {
    Food,
    Sight,
}

/// A structured visual payload attached to an assistant message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Card {
    /// Activities matched to a traveller's mood.
    MoodItinerary {
        mood: String,
        place: String,
        activities: Vec<String>,
    },
    /// Live scam reports for an area.
    ScamAlert {
        location: String,
        scam_type: String,
        risk_level: String,
        report_count: u32,
    },
    /// Expected vs. real cost of a trip.
    BudgetReality {
        location: String,
        expected_price: u32,
        real_price: u32,
        hidden_costs: Vec<String>,
    },
    /// A local's daily schedule.
    LocalLife {
        city: String,
        timeline: Vec<TimelineEntry>,
    },
    /// Planning phase: where to go.
    DestinationExplorer {
        place: String,
        highlights: Vec<String>,
        best_season: String,
    },
    /// Booking phase: how to get there.
    FlightFinder {
        from: String,
        to: String,
        price: String,
        duration: String,
    },
    /// During the trip: something nearby.
    LocalGuide {
        nearby_spot: String,
        kind: GuideKind,
        distance: String,
    },
    /// After the trip: spending summary.
    TripStats {
        total_spent: String,
        top_category: String,
    },
}

impl Card {
    /// Builds a mood itinerary card.
    pub fn mood_itinerary(mood: &str, place: &str, activities: &[&str]) -> Self {
        Card::MoodItinerary {
            mood: mood.to_string(),
            place: place.to_string(),
            activities: activities.iter().map(|a| a.to_string()).collect(),
        }
    }

    /// Stable snake_case name of the card variant.
    pub fn name(&self) -> &'static str {
        match self {
            Card::MoodItinerary { .. } => "mood_itinerary",
            Card::ScamAlert { .. } => "scam_alert",
            Card::BudgetReality { .. } => "budget_reality",
            Card::LocalLife { .. } => "local_life",
            Card::DestinationExplorer { .. } => "destination_explorer",
            Card::FlightFinder { .. } => "flight_finder",
            Card::LocalGuide { .. } => "local_guide",
            Card::TripStats { .. } => "trip_stats",
        }
    }

    /// Percentage of the real price covered by the expected price, capped at 100.
    ///
    /// Only meaningful for budget cards; other cards return `None`.
    pub fn expectation_percent(&self) -> Option<f64> {
        match self {
            Card::BudgetReality {
                expected_price,
                real_price,
                ..
            } => {
                if *real_price == 0 {
                    return Some(100.0);
                }
                let percent = f64::from(*expected_price) / f64::from(*real_price) * 100.0;
                Some(percent.min(100.0))
            }
            _ => None,
        }
    }

    /// Checks the structural constraints of the payload.
    pub fn validate(&self) -> Result<()> {
        let name = self.name();
        let require = |value: &str, field: &str| -> Result<()> {
            if value.trim().is_empty() {
                Err(GenieError::invalid_card(name, format!("{field} must not be empty")))
            } else {
                Ok(())
            }
        };

        match self {
            Card::MoodItinerary { place, .. } => require(place, "place"),
            Card::ScamAlert { location, .. } | Card::BudgetReality { location, .. } => {
                require(location, "location")
            }
            Card::LocalLife { city, .. } => require(city, "city"),
            Card::DestinationExplorer {
                place, highlights, ..
            } => {
                require(place, "place")?;
                if highlights.len() > MAX_HIGHLIGHTS {
                    return Err(GenieError::invalid_card(
                        name,
                        format!(
                            "at most {MAX_HIGHLIGHTS} highlights allowed, got {}",
                            highlights.len()
                        ),
                    ));
                }
                Ok(())
            }
            Card::FlightFinder { from, to, .. } => {
                require(from, "from")?;
                require(to, "to")
            }
            Card::LocalGuide { nearby_spot, .. } => require(nearby_spot, "nearby_spot"),
            Card::TripStats { total_spent, .. } => require(total_spent, "total_spent"),
        }
    }
}
