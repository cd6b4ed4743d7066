pub mod config_service;
pub mod paths;
pub mod photo_import;
pub mod toml_config_repository;

pub use crate::config_service::ConfigService;
pub use crate::paths::GeniePaths;
pub use crate::photo_import::{PhotoImport, SkipReason, import_photos};
pub use crate::toml_config_repository::TomlConfigRepository;
