pub mod client;
pub mod dto;
pub mod handler;
pub mod helpers;
pub mod schemas;
pub mod service;

pub use client::OddsApiClient;
pub use dto::{GameRecord, OddsResponseDto, UpstreamOddsRequest};
pub use handler::handle_get_odds;
pub use schemas::{ODDS_ROUTE_PATH, odds_route};
pub use service::{OddsService, OddsSource};
