//! Scrapbook photo set.

mod model;

pub use model::{DEMO_PHOTOS, Photo, PhotoSet, ScrapbookStage};
