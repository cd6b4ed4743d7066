use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// A backdrop image the interface can show behind every view.
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
pub enum Background {
    /// Space view of the globe, shown on the map.
    #[default]
    Default,
    Tokyo,
    Paris,
    Bali,
    Nyc,
}

impl Background {
    /// Backdrop used for the scrapbook studio.
    pub const SCENIC: Background = Background::Bali;

    /// Resolves a background by id, substituting the default for unknown ids.
    pub fn resolve(id: &str) -> Self {
        id.parse().unwrap_or_default()
    }

    /// The image reference a renderer should load.
    pub fn image_ref(self) -> &'static str {
        match self {
            Background::Default => {
                "https://images.unsplash.com/photo-1451187580459-43490279c0fa?q=80&w=2072&auto=format&fit=crop"
            }
            Background::Tokyo => {
                "https://images.unsplash.com/photo-1540959733332-eab4deabeeaf?q=80&w=1988&auto=format&fit=crop"
            }
            Background::Paris => {
                "https://images.unsplash.com/photo-1502602898657-3e91760cbb34?q=80&w=2073&auto=format&fit=crop"
            }
            Background::Bali => {
                "https://images.unsplash.com/photo-1537996194471-e657df975ab4?q=80&w=2038&auto=format&fit=crop"
            }
            Background::Nyc => {
                "https://images.unsplash.com/photo-1496442226666-8d4d0e62e6e9?q=80&w=2070&auto=format&fit=crop"
            }
        }
    }
}
