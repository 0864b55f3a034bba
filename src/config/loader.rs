use std::env;

use reqwest::Url;
use serde::de::DeserializeOwned;
use tracing::warn;

use crate::config::dto::{AccountKeyDto, AppConfig, DeploymentConfigDto};
use crate::core::error::AppError;

pub const DEFAULT_ODDS_API_BASE_URL: &str = "https://api.the-odds-api.com";
const DEFAULT_PORT: &str = "3000";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

pub fn load_config() -> Result<AppConfig, AppError> {
    dotenvy::dotenv().ok();

    let port = env::var("PORT")
        .or_else(|_| env::var("SERVER_PORT"))
        .unwrap_or_else(|_| DEFAULT_PORT.to_string())
        .parse::<u16>()
        .map_err(|err| AppError::configuration(format!("invalid port: {err}")))?;

    let account_id = resolve_account_id(parse_json_env::<AccountKeyDto>("BITTE_KEY"), || {
        non_empty_env("ACCOUNT_ID")
    });
    if account_id.is_none() {
        warn!("no account id configured; manifest will advertise an empty account-id");
    }

    let public_url = parse_json_env::<DeploymentConfigDto>("BITTE_CONFIG")
        .url
        .or_else(|| non_empty_env("PUBLIC_BASE_URL"))
        .unwrap_or_else(|| format!("http://localhost:{port}"));

    let odds_api_key = non_empty_env("ODD_KEY").or_else(|| non_empty_env("ODDS_API_KEY"));
    if odds_api_key.is_none() {
        warn!("ODD_KEY is not set; odds requests will fail until it is configured");
    }

    let odds_api_base_url = non_empty_env("ODDS_API_BASE_URL")
        .unwrap_or_else(|| DEFAULT_ODDS_API_BASE_URL.to_string());
    Url::parse(&odds_api_base_url)
        .map_err(|err| AppError::configuration(format!("invalid ODDS_API_BASE_URL: {err}")))?;

    let upstream_timeout_secs = validate_timeout(parse_u64_env(
        "ODDS_API_TIMEOUT_SECS",
        DEFAULT_TIMEOUT_SECS,
    ));
    let disable_proxy = parse_bool_env("DISABLE_PROXY", false);

    Ok(AppConfig {
        port,
        account_id,
        public_url,
        odds_api_key,
        odds_api_base_url,
        upstream_timeout_secs,
        disable_proxy,
    })
}

fn non_empty_env(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Reads a JSON-encoded variable. Absent or malformed values fall back to the
/// default shape; malformed ones are logged.
fn parse_json_env<T>(key: &str) -> T
where
    T: DeserializeOwned + Default,
{
    match env::var(key) {
        Ok(raw) => parse_json_blob(key, &raw),
        Err(_) => T::default(),
    }
}

fn parse_json_blob<T>(key: &str, raw: &str) -> T
where
    T: DeserializeOwned + Default,
{
    serde_json::from_str(raw).unwrap_or_else(|err| {
        warn!(variable = key, error = %err, "ignoring malformed JSON configuration");
        T::default()
    })
}

/// Blank ids in the key blob defer to the fallback source.
fn resolve_account_id(
    blob: AccountKeyDto,
    fallback: impl FnOnce() -> Option<String>,
) -> Option<String> {
    blob.account_id
        .filter(|id| !id.trim().is_empty())
        .or_else(fallback)
}

/// A zero timeout would fail every upstream call, so it falls back to the default.
fn validate_timeout(timeout_secs: u64) -> u64 {
    if timeout_secs == 0 {
        warn!(
            default = DEFAULT_TIMEOUT_SECS,
            "ODDS_API_TIMEOUT_SECS must be positive; using the default"
        );
        return DEFAULT_TIMEOUT_SECS;
    }
    timeout_secs
}

fn parse_bool_env(key: &str, default: bool) -> bool {
    env::var(key)
        .map(|value| matches!(value.as_str(), "true" | "1" | "TRUE" | "True"))
        .unwrap_or(default)
}

fn parse_u64_env(key: &str, default: u64) -> u64 {
    env::var(key)
        .ok()
        .and_then(|value| value.parse::<u64>().ok())
        .unwrap_or(default)
}
