pub mod loading;
pub mod models;

pub use loading::load_config;
pub use models::Settings;
