use axum::Json;
use axum::extract::{Query, State};
use tracing::warn;

use crate::core::error::AppError;
use crate::features::tools::dto::{
    BlockchainsDto, CoinFlipDto, CreateTransactionArgs, TransactionResponseDto, TwitterIntentDto,
    TwitterShareArgs, UserDto,
};
use crate::features::tools::helpers::{
    blockchain_list, build_transfer_payload, build_twitter_intent_url, flip_coin,
};
use crate::server::AppState;

pub async fn handle_get_blockchains() -> Json<BlockchainsDto> {
    Json(BlockchainsDto {
        message: blockchain_list(),
    })
}

pub async fn handle_get_user(State(state): State<AppState>) -> Json<UserDto> {
    Json(UserDto {
        account_id: state.config.account_id_or_empty().to_string(),
    })
}

pub async fn handle_create_transaction(
    Query(args): Query<CreateTransactionArgs>,
) -> Result<Json<TransactionResponseDto>, AppError> {
    let transaction_payload = build_transfer_payload(&args).inspect_err(|err| {
        warn!(error = %err, "rejected transaction request");
    })?;

    Ok(Json(TransactionResponseDto {
        transaction_payload,
    }))
}

pub async fn handle_coinflip() -> Json<CoinFlipDto> {
    let result = flip_coin(&mut rand::thread_rng());
    Json(CoinFlipDto { result })
}

pub async fn handle_twitter_intent(
    Query(args): Query<TwitterShareArgs>,
) -> Result<Json<TwitterIntentDto>, AppError> {
    let twitter_intent_url = build_twitter_intent_url(&args).inspect_err(|err| {
        warn!(error = %err, "rejected twitter intent request");
    })?;

    Ok(Json(TwitterIntentDto { twitter_intent_url }))
}
