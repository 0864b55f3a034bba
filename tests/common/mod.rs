#![allow(dead_code)]

use std::sync::Arc;

use axum::Json;
use axum::Router;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use serde_json::{Value, json};
use tokio::net::TcpListener;
use tokio::sync::Mutex;

use odds_assistant_plugin::config::AppConfig;
use odds_assistant_plugin::server::{AppState, build_router};

pub const TEST_API_KEY: &str = "test-key";
pub const TEST_ACCOUNT: &str = "odds.near";

#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub sport: String,
    pub query: Vec<(String, String)>,
}

impl RecordedCall {
    pub fn param(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

struct FakeUpstreamInner {
    status: StatusCode,
    body: Value,
    calls: Mutex<Vec<RecordedCall>>,
}

/// Stand-in for the odds provider that records every request it receives.
#[derive(Clone)]
pub struct FakeUpstream {
    inner: Arc<FakeUpstreamInner>,
    pub base_url: String,
}

impl FakeUpstream {
    pub async fn spawn(status: StatusCode, body: Value) -> Self {
        let inner = Arc::new(FakeUpstreamInner {
            status,
            body,
            calls: Mutex::new(Vec::new()),
        });

        let app = Router::new()
            .route("/v4/sports/:sport/odds", get(fake_odds_handler))
            .with_state(inner.clone());
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind upstream");
        let addr = listener.local_addr().expect("upstream addr");
        tokio::spawn(async move { axum::serve(listener, app).await });

        Self {
            inner,
            base_url: format!("http://{addr}"),
        }
    }

    pub async fn calls(&self) -> Vec<RecordedCall> {
        self.inner.calls.lock().await.clone()
    }
}

async fn fake_odds_handler(
    State(inner): State<Arc<FakeUpstreamInner>>,
    Path(sport): Path<String>,
    Query(query): Query<Vec<(String, String)>>,
) -> (StatusCode, Json<Value>) {
    inner.calls.lock().await.push(RecordedCall { sport, query });
    (inner.status, Json(inner.body.clone()))
}

pub fn test_config(odds_api_base_url: &str, odds_api_key: Option<&str>) -> AppConfig {
    AppConfig {
        port: 0,
        account_id: Some(TEST_ACCOUNT.to_string()),
        public_url: "https://odds.example.com".to_string(),
        odds_api_key: odds_api_key.map(str::to_string),
        odds_api_base_url: odds_api_base_url.to_string(),
        upstream_timeout_secs: 5,
        disable_proxy: true,
    }
}

/// Serves the real router on an ephemeral port and returns its base URL.
pub async fn spawn_app(config: AppConfig) -> String {
    let state = AppState::new(Arc::new(config)).expect("app state");
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind app");
    let addr = listener.local_addr().expect("app addr");
    tokio::spawn(async move { axum::serve(listener, build_router(state)).await });
    format!("http://{addr}")
}

pub fn http_client() -> reqwest::Client {
    reqwest::Client::builder()
        .no_proxy()
        .build()
        .expect("test client")
}

pub async fn get_json(url: &str) -> (StatusCode, Value) {
    let response = http_client().get(url).send().await.expect("request");
    let status = StatusCode::from_u16(response.status().as_u16()).expect("status");
    let body = response.json::<Value>().await.expect("json body");
    (status, body)
}

/// One upstream game with two bookmakers, each carrying a single h2h market with
/// two outcomes, plus fields the reshaped record does not keep.
pub fn game_payload(id: &str, home: &str, away: &str, bet_limit: Value) -> Value {
    let bookmaker = |key: &str, title: &str, home_price: f64, away_price: f64| {
        json!({
            "key": key,
            "title": title,
            "last_update": "2023-09-09T12:00:00Z",
            "link": format!("https://{key}.example.com/event/{id}"),
            "sid": format!("{key}-{id}"),
            "region": "us",
            "markets": [{
                "key": "h2h",
                "last_update": "2023-09-09T12:00:00Z",
                "link": format!("https://{key}.example.com/market/{id}"),
                "outcomes": [
                    {
                        "name": home,
                        "price": home_price,
                        "link": format!("https://{key}.example.com/bet/{id}/home"),
                        "sid": format!("{key}-{id}-home"),
                        "bet_limit": bet_limit,
                        "description": "home win"
                    },
                    {
                        "name": away,
                        "price": away_price,
                        "link": format!("https://{key}.example.com/bet/{id}/away"),
                        "sid": format!("{key}-{id}-away"),
                        "bet_limit": bet_limit
                    }
                ]
            }]
        })
    };

    json!({
        "id": id,
        "sport_key": "basketball_nba",
        "sport_title": "NBA",
        "commence_time": "2023-09-09T19:00:00Z",
        "home_team": home,
        "away_team": away,
        "completed": false,
        "bookmakers": [
            bookmaker("fanduel", "FanDuel", 1.91, 2.05),
            bookmaker("draftkings", "DraftKings", 1.87, 2.1)
        ]
    })
}

pub fn sample_games() -> Value {
    json!([
        game_payload("game-1", "Los Angeles Lakers", "Boston Celtics", Value::Null),
        game_payload("game-2", "Miami Heat", "Chicago Bulls", json!(250.0)),
    ])
}
