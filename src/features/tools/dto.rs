use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Deserialize)]
pub struct CreateTransactionArgs {
    #[serde(rename = "receiverId")]
    pub receiver_id: Option<String>,
    pub amount: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct TwitterShareArgs {
    pub text: Option<String>,
    pub url: Option<String>,
    pub hashtags: Option<String>,
    pub via: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct BlockchainsDto {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct UserDto {
    #[serde(rename = "accountId")]
    pub account_id: String,
}

#[derive(Debug, Serialize)]
pub struct TransactionResponseDto {
    #[serde(rename = "transactionPayload")]
    pub transaction_payload: TransactionPayloadDto,
}

#[derive(Debug, Serialize)]
pub struct TransactionPayloadDto {
    #[serde(rename = "receiverId")]
    pub receiver_id: String,
    pub actions: Vec<TransactionActionDto>,
}

#[derive(Debug, Serialize)]
pub struct TransactionActionDto {
    #[serde(rename = "type")]
    pub kind: String,
    pub params: TransferParamsDto,
}

#[derive(Debug, Serialize)]
pub struct TransferParamsDto {
    pub deposit: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CoinSide {
    Heads,
    Tails,
}

#[derive(Debug, Serialize)]
pub struct CoinFlipDto {
    pub result: CoinSide,
}

#[derive(Debug, Serialize)]
pub struct TwitterIntentDto {
    #[serde(rename = "twitterIntentUrl")]
    pub twitter_intent_url: String,
}
