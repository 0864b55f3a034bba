use axum::Json;
use axum::extract::State;

use crate::features::manifest::dto::PluginManifest;
use crate::server::AppState;

pub async fn handle_manifest(State(state): State<AppState>) -> Json<PluginManifest> {
    Json(state.manifest.as_ref().clone())
}
