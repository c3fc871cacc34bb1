//! Configuration and path management for fundboard

pub mod paths;
pub mod settings;

pub use paths::FundboardPaths;
pub use settings::Settings;
