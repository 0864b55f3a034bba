pub mod builder;
pub mod dto;
pub mod handler;

pub use builder::{MANIFEST_ROUTE_PATH, build_manifest};
pub use dto::PluginManifest;
pub use handler::handle_manifest;
