use axum::Json;
use axum::extract::{Query, State};
use tracing::error;

use crate::core::error::AppError;
use crate::features::odds::dto::OddsResponseDto;
use crate::features::odds::helpers::first_values;
use crate::features::odds::service::FETCH_FAILED_MESSAGE;
use crate::server::AppState;

pub async fn handle_get_odds(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<OddsResponseDto>, AppError> {
    let query = first_values(pairs);
    match state.odds_service.get_odds(&query).await {
        Ok(data) => Ok(Json(OddsResponseDto { data })),
        Err(err @ AppError::Configuration(_)) => {
            error!(error = %err, "odds request rejected");
            Err(err)
        }
        Err(err) => {
            error!(error = %err, "error fetching odds data");
            Err(AppError::upstream(FETCH_FAILED_MESSAGE))
        }
    }
}
