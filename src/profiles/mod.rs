pub mod builtin;
pub mod models;
pub mod registry;

pub use models::{Overrides, PrintOptions, ProfileInfo, Quality};
pub use registry::ProfileRegistry;
