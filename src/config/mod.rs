pub mod dto;
pub mod loader;

pub use dto::AppConfig;
pub use loader::{DEFAULT_ODDS_API_BASE_URL, load_config};
