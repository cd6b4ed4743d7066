//! Configuration domain models and repository trait.

mod model;
mod repository;

pub use model::{DEFAULT_INITIAL_KARMA, GenieConfig, TimingConfig};
pub use repository::ConfigRepository;
