use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Number;

/// Upstream timestamps follow the forwarded `dateFormat`: ISO-8601 strings or
/// unix seconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Timestamp {
    Iso(String),
    Unix(i64),
}

/// One game as returned to callers. Deserializing the upstream payload into this
/// type is the reshaping step: fields outside this shape are dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    pub id: String,
    pub sport_key: String,
    pub sport_title: String,
    pub commence_time: Timestamp,
    pub home_team: String,
    pub away_team: String,
    pub bookmakers: Vec<BookmakerRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookmakerRecord {
    pub key: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_update: Option<Timestamp>,
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub link: Option<Option<String>>,
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub sid: Option<Option<String>>,
    pub markets: Vec<MarketRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketRecord {
    pub key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_update: Option<Timestamp>,
    pub outcomes: Vec<OutcomeRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutcomeRecord {
    pub name: String,
    pub price: Number,
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub link: Option<Option<String>>,
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub sid: Option<Option<String>>,
    pub bet_limit: Option<Number>,
}

/// Marks a field as present so an explicit `null` is echoed back while an
/// absent field stays absent.
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[derive(Debug, Serialize)]
pub struct OddsResponseDto {
    pub data: Vec<GameRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamOddsRequest {
    pub sport: String,
    pub api_key: String,
    pub params: Vec<(&'static str, String)>,
}
