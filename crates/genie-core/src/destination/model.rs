use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

use super::Background;

/// Identifier of a destination pin on the world map.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum DestinationId {
    Nyc,
    Paris,
    Tokyo,
    Bali,
}

/// Pin position on the map, as percentages of the map height/width.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapPin {
    pub top: f32,
    pub left: f32,
}

/// A selectable destination.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Destination {
    pub id: DestinationId,
    pub display_name: &'static str,
    pub background: Background,
    /// Famous attraction shown on the pin tooltip.
    pub attraction: &'static str,
    pub pin: MapPin,
}

impl DestinationId {
    /// Returns the full destination record for this id.
    pub fn destination(self) -> Destination {
        let (display_name, background, attraction, top, left) = match self {
            DestinationId::Nyc => ("New York", Background::Nyc, "Statue of Liberty", 32.0, 26.0),
            DestinationId::Paris => ("Paris", Background::Paris, "Eiffel Tower", 28.0, 49.0),
            DestinationId::Tokyo => ("Tokyo", Background::Tokyo, "Tokyo Tower", 33.0, 86.0),
            DestinationId::Bali => ("Bali", Background::Bali, "Uluwatu Temple", 65.0, 78.0),
        };

        Destination {
            id: self,
            display_name,
            background,
            attraction,
            pin: MapPin { top, left },
        }
    }
}

impl Destination {
    /// Looks up a destination by its string id.
    pub fn find(id: &str) -> Option<Destination> {
        id.parse::<DestinationId>().ok().map(DestinationId::destination)
    }

    /// Background for a destination id, or the default backdrop if unknown.
    ///
    /// Backdrops are keyed by the same ids as destinations.
    pub fn background_for(id: &str) -> Background {
        Background::resolve(id)
    }
}

/// The fixed destination table, in map order.
pub fn all_destinations() -> Vec<Destination> {
    DestinationId::iter().map(DestinationId::destination).collect()
}
