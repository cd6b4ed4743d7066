//! Card payloads attached to assistant messages.
//!
//! Cards are pre-authored structured data; renderers decide how to draw
//! them. Each variant validates its own structural constraints.

mod model;

pub use model::{Card, GuideKind, MAX_HIGHLIGHTS, TimelineEntry};
