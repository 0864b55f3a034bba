use serde::Deserialize;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub account_id: Option<String>,
    pub public_url: String,
    pub odds_api_key: Option<String>,
    pub odds_api_base_url: String,
    pub upstream_timeout_secs: u64,
    pub disable_proxy: bool,
}

impl AppConfig {
    pub fn account_id_or_empty(&self) -> &str {
        self.account_id.as_deref().unwrap_or("")
    }
}

/// Shape of the `BITTE_KEY` JSON blob.
#[derive(Debug, Default, Deserialize)]
pub struct AccountKeyDto {
    #[serde(rename = "accountId")]
    pub account_id: Option<String>,
}

/// Shape of the `BITTE_CONFIG` JSON blob.
#[derive(Debug, Default, Deserialize)]
pub struct DeploymentConfigDto {
    pub url: Option<String>,
}
