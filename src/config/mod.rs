//! Configuration and path management

pub mod paths;
pub mod settings;

pub use paths::BillBrainPaths;
pub use settings::Settings;
