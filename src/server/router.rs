use axum::Json;
use axum::Router;
use axum::routing::get;
use serde_json::{Value, json};

use crate::features::manifest::{MANIFEST_ROUTE_PATH, handle_manifest};
use crate::features::odds::{ODDS_ROUTE_PATH, handle_get_odds};
use crate::features::tools::{
    BLOCKCHAINS_ROUTE_PATH, COINFLIP_ROUTE_PATH, TRANSACTION_ROUTE_PATH, TWITTER_ROUTE_PATH,
    USER_ROUTE_PATH, handle_coinflip, handle_create_transaction, handle_get_blockchains,
    handle_get_user, handle_twitter_intent,
};
use crate::server::AppState;

pub const HEALTH_ROUTE_PATH: &str = "/api/health";

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(HEALTH_ROUTE_PATH, get(handle_healthcheck))
        .route(MANIFEST_ROUTE_PATH, get(handle_manifest))
        .route(ODDS_ROUTE_PATH, get(handle_get_odds))
        .route(BLOCKCHAINS_ROUTE_PATH, get(handle_get_blockchains))
        .route(USER_ROUTE_PATH, get(handle_get_user))
        .route(TRANSACTION_ROUTE_PATH, get(handle_create_transaction))
        .route(COINFLIP_ROUTE_PATH, get(handle_coinflip))
        .route(TWITTER_ROUTE_PATH, get(handle_twitter_intent))
        .with_state(state)
}

pub async fn handle_healthcheck() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
