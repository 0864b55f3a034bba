use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::core::error::AppError;
use crate::features::odds::dto::{GameRecord, UpstreamOddsRequest};
use crate::features::odds::helpers::{build_upstream_request, filter_by_team, team_filter};

pub const API_KEY_MISSING_MESSAGE: &str = "API key is not configured";
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch odds data";

#[async_trait]
pub trait OddsSource: Send + Sync {
    async fn fetch_odds(&self, request: &UpstreamOddsRequest) -> Result<Vec<GameRecord>, AppError>;
}

pub struct OddsService {
    source: Arc<dyn OddsSource>,
    api_key: Option<String>,
}

impl OddsService {
    pub fn new(source: Arc<dyn OddsSource>, api_key: Option<String>) -> Self {
        Self { source, api_key }
    }

    /// Fails with [`AppError::Configuration`] before any upstream call when the
    /// API key is missing.
    pub async fn get_odds(
        &self,
        query: &HashMap<String, String>,
    ) -> Result<Vec<GameRecord>, AppError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| AppError::configuration(API_KEY_MISSING_MESSAGE))?;

        let request = build_upstream_request(query, api_key);
        let games = self.source.fetch_odds(&request).await?;
        let fetched = games.len();

        let team = team_filter(query);
        let games = filter_by_team(games, team);
        debug!(
            sport = %request.sport,
            team = team.unwrap_or(""),
            fetched,
            retained = games.len(),
            "odds request completed"
        );

        Ok(games)
    }
}
