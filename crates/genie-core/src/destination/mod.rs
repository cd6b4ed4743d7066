//! Destination and background tables.
//!
//! Both tables are fixed at startup. Lookups by string id never fail: an
//! unknown destination id resolves to [`Background::Default`].

mod background;
mod model;

pub use background::Background;
pub use model::{Destination, DestinationId, MapPin, all_destinations};
