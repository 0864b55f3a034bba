use std::sync::Arc;

use crate::config::AppConfig;
use crate::core::error::AppError;
use crate::features::manifest::{PluginManifest, build_manifest};
use crate::features::odds::{OddsApiClient, OddsService, OddsSource};
use crate::features::tool_routes;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub manifest: Arc<PluginManifest>,
    pub odds_service: Arc<OddsService>,
}

impl AppState {
    pub fn new(config: Arc<AppConfig>) -> Result<Self, AppError> {
        let odds_client: Arc<dyn OddsSource> = Arc::new(OddsApiClient::new(&config)?);
        Ok(Self::with_odds_source(config, odds_client))
    }

    pub fn with_odds_source(config: Arc<AppConfig>, odds_source: Arc<dyn OddsSource>) -> Self {
        let manifest = Arc::new(build_manifest(&config, &tool_routes()));
        let odds_service = Arc::new(OddsService::new(odds_source, config.odds_api_key.clone()));

        Self {
            config,
            manifest,
            odds_service,
        }
    }
}
