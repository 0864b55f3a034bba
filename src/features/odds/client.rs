use async_trait::async_trait;
use reqwest::Url;
use tracing::{debug, warn};

use crate::config::AppConfig;
use crate::core::error::AppError;
use crate::core::http_client::build_http_client;
use crate::features::odds::dto::{GameRecord, UpstreamOddsRequest};
use crate::features::odds::service::OddsSource;

const ERROR_SNIPPET_CHARS: usize = 512;

pub struct OddsApiClient {
    http_client: reqwest::Client,
    base_url: Url,
}

impl OddsApiClient {
    pub fn new(config: &AppConfig) -> Result<Self, AppError> {
        let http_client = build_http_client(config.disable_proxy, config.upstream_timeout_secs)
            .map_err(|err| AppError::internal(format!("failed to build HTTP client: {err}")))?;
        let base_url = Url::parse(&config.odds_api_base_url)
            .map_err(|err| AppError::configuration(format!("invalid odds api base url: {err}")))?;

        Ok(Self {
            http_client,
            base_url,
        })
    }

    /// `{base}/v4/sports/{sport}/odds?apiKey=...&<params>`. The sport is
    /// percent-encoded as a single path segment.
    pub fn odds_url(&self, request: &UpstreamOddsRequest) -> Result<Url, AppError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| AppError::internal("odds api base url cannot carry a path"))?
            .pop_if_empty()
            .extend(["v4", "sports", request.sport.as_str(), "odds"]);

        {
            let mut query_pairs = url.query_pairs_mut();
            query_pairs.append_pair("apiKey", &request.api_key);
            for (name, value) in &request.params {
                query_pairs.append_pair(name, value);
            }
        }

        Ok(url)
    }
}

#[async_trait]
impl OddsSource for OddsApiClient {
    async fn fetch_odds(&self, request: &UpstreamOddsRequest) -> Result<Vec<GameRecord>, AppError> {
        let url = self.odds_url(request)?;
        debug!(sport = %request.sport, "requesting odds from upstream");

        // Errors are stripped of their URL so the API key never reaches the logs.
        let response = self.http_client.get(url).send().await.map_err(|err| {
            AppError::upstream(format!(
                "network error contacting odds api: {}",
                err.without_url()
            ))
        })?;

        let status = response.status();
        if !status.is_success() {
            let text = response
                .text()
                .await
                .unwrap_or_else(|_| "<failed to read body>".to_string());
            let snippet = text.chars().take(ERROR_SNIPPET_CHARS).collect::<String>();
            warn!(sport = %request.sport, %status, body = %snippet, "odds api rejected request");
            return Err(AppError::upstream(format!(
                "odds api responded with status {status}"
            )));
        }

        response.json::<Vec<GameRecord>>().await.map_err(|err| {
            AppError::upstream(format!(
                "failed to decode odds payload: {}",
                err.without_url()
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(base_url: &str) -> AppConfig {
        AppConfig {
            port: 0,
            account_id: None,
            public_url: "http://localhost".to_string(),
            odds_api_key: Some("secret".to_string()),
            odds_api_base_url: base_url.to_string(),
            upstream_timeout_secs: 5,
            disable_proxy: true,
        }
    }

    fn request(sport: &str) -> UpstreamOddsRequest {
        UpstreamOddsRequest {
            sport: sport.to_string(),
            api_key: "secret".to_string(),
            params: vec![
                ("regions", "us".to_string()),
                ("markets", "h2h,spreads".to_string()),
            ],
        }
    }

    #[test]
    fn builds_sport_path_with_api_key_first() {
        let client = OddsApiClient::new(&config("https://api.the-odds-api.com")).expect("client");
        let url = client.odds_url(&request("soccer")).expect("url");

        assert_eq!(url.path(), "/v4/sports/soccer/odds");
        assert_eq!(
            url.query(),
            Some("apiKey=secret&regions=us&markets=h2h%2Cspreads")
        );
    }

    #[test]
    fn sport_cannot_escape_its_path_segment() {
        let client = OddsApiClient::new(&config("http://127.0.0.1:9")).expect("client");
        let url = client.odds_url(&request("../admin")).expect("url");

        assert_eq!(url.path(), "/v4/sports/..%2Fadmin/odds");
    }

    #[test]
    fn base_url_path_prefix_is_kept() {
        let client = OddsApiClient::new(&config("http://127.0.0.1:9/proxy/")).expect("client");
        let url = client.odds_url(&request("soccer")).expect("url");

        assert_eq!(url.path(), "/proxy/v4/sports/soccer/odds");
    }
}
