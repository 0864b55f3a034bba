use rand::Rng;
use reqwest::Url;

use crate::core::error::AppError;
use crate::features::tools::dto::{
    CoinSide, CreateTransactionArgs, TransactionActionDto, TransactionPayloadDto,
    TransferParamsDto, TwitterShareArgs,
};

const YOCTO_DECIMALS: usize = 24;
const TWITTER_INTENT_BASE: &str = "https://twitter.com/intent/tweet";

pub const BLOCKCHAINS: &[&str] = &[
    "Bitcoin", "Ethereum", "NEAR", "Solana", "Polygon", "Arbitrum", "Optimism", "Base",
];

pub fn blockchain_list() -> String {
    BLOCKCHAINS.join(", ")
}

fn non_empty(value: Option<&String>) -> Option<&str> {
    value
        .map(|value| value.trim())
        .filter(|value| !value.is_empty())
}

/// Converts a decimal NEAR amount into yoctoNEAR without going through floats.
pub fn near_to_yocto(amount: &str) -> Result<String, AppError> {
    let amount = amount.trim();
    let (whole, fraction) = amount.split_once('.').unwrap_or((amount, ""));

    let all_digits = |part: &str| part.chars().all(|ch| ch.is_ascii_digit());
    if (whole.is_empty() && fraction.is_empty()) || !all_digits(whole) || !all_digits(fraction) {
        return Err(AppError::bad_request(format!("invalid amount: {amount}")));
    }
    if fraction.len() > YOCTO_DECIMALS {
        return Err(AppError::bad_request(format!(
            "amount supports at most {YOCTO_DECIMALS} decimal places"
        )));
    }

    let mut digits = String::with_capacity(whole.len() + YOCTO_DECIMALS);
    digits.push_str(whole);
    digits.push_str(fraction);
    digits.extend(std::iter::repeat_n('0', YOCTO_DECIMALS - fraction.len()));

    let trimmed = digits.trim_start_matches('0');
    Ok(if trimmed.is_empty() {
        "0".to_string()
    } else {
        trimmed.to_string()
    })
}

pub fn build_transfer_payload(args: &CreateTransactionArgs) -> Result<TransactionPayloadDto, AppError> {
    let (Some(receiver_id), Some(amount)) = (
        non_empty(args.receiver_id.as_ref()),
        non_empty(args.amount.as_ref()),
    ) else {
        return Err(AppError::bad_request("receiverId and amount are required"));
    };

    Ok(TransactionPayloadDto {
        receiver_id: receiver_id.to_string(),
        actions: vec![TransactionActionDto {
            kind: "Transfer".to_string(),
            params: TransferParamsDto {
                deposit: near_to_yocto(amount)?,
            },
        }],
    })
}

pub fn build_twitter_intent_url(args: &TwitterShareArgs) -> Result<String, AppError> {
    let text = non_empty(args.text.as_ref())
        .ok_or_else(|| AppError::bad_request("text is required"))?;

    let mut url = Url::parse(TWITTER_INTENT_BASE)
        .map_err(|err| AppError::internal(format!("invalid twitter intent url: {err}")))?;

    {
        let mut query_pairs = url.query_pairs_mut();
        query_pairs.append_pair("text", text);
        if let Some(shared_url) = non_empty(args.url.as_ref()) {
            query_pairs.append_pair("url", shared_url);
        }
        if let Some(hashtags) = non_empty(args.hashtags.as_ref()) {
            query_pairs.append_pair("hashtags", hashtags);
        }
        if let Some(via) = non_empty(args.via.as_ref()) {
            query_pairs.append_pair("via", via.trim_start_matches('@'));
        }
    }

    Ok(url.to_string())
}

pub fn flip_coin<R: Rng + ?Sized>(rng: &mut R) -> CoinSide {
    if rng.gen_bool(0.5) {
        CoinSide::Heads
    } else {
        CoinSide::Tails
    }
}
