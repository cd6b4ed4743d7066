use serde::{Deserialize, Serialize};

/// Demo shots offered when the traveller has no photos at hand.
pub const DEMO_PHOTOS: [&str; 3] = [
    "https://images.unsplash.com/photo-1520250497591-112f2f40a3f4?q=80&w=2070&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1501785888041-af3ef285b470?q=80&w=2070&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1504609773096-104ff2c73ba4?q=80&w=2070&auto=format&fit=crop",
];

/// Sub-view of the scrapbook studio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScrapbookStage {
    /// Waiting for photos.
    #[default]
    Upload,
    /// Showing the generated journal.
    View,
}

/// A photo reference with its journal caption.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Photo<'a> {
    pub image_ref: &'a str,
    pub caption: String,
}

/// Ordered, opaque image references.
///
/// A set is only ever replaced wholesale; there is no per-photo mutation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PhotoSet(Vec<String>);

impl PhotoSet {
    pub fn new(refs: Vec<String>) -> Self {
        Self(refs)
    }

    pub fn demo() -> Self {
        Self(DEMO_PHOTOS.iter().map(|r| r.to_string()).collect())
    }

    pub fn refs(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Photos with their 1-based "Trip Memory #n" captions.
    pub fn photos(&self) -> Vec<Photo<'_>> {
        self.0
            .iter()
            .enumerate()
            .map(|(i, image_ref)| Photo {
                image_ref,
                caption: format!("Trip Memory #{}", i + 1),
            })
            .collect()
    }
}
