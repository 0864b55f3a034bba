use serde_json::json;

use crate::core::route_spec::{
    Forwarding, ParameterKind, QueryParameter, ResponseSpec, RouteSpec,
};

pub const ODDS_ROUTE_PATH: &str = "/api/odds/get-odds";
pub const ODDS_OPERATION_ID: &str = "get-odds";
pub const DEFAULT_SPORT: &str = "soccer";
pub const DEFAULT_COMMENCE_TIME: &str = "2023-09-09T00:00:00Z";

pub const TEAM_PARAM: &str = "team";
pub const SPORT_PARAM: &str = "sport";

/// Recognised query parameters, in the order they are forwarded upstream.
pub const ODDS_PARAMETERS: &[QueryParameter] = &[
    QueryParameter::local(TEAM_PARAM, "Filter the results by the specified team name"),
    QueryParameter::local(
        SPORT_PARAM,
        "The sport key for which to return events and odds",
    )
    .with_forwarding(Forwarding::PathSegment)
    .with_default(DEFAULT_SPORT),
    QueryParameter::forwarded(
        "regions",
        "Specifies the region for bookmakers",
        ParameterKind::String,
        Some("us"),
    ),
    QueryParameter::forwarded(
        "markets",
        "The odds market to return (e.g., head-to-head, spreads)",
        ParameterKind::String,
        Some("h2h,spreads"),
    ),
    QueryParameter::forwarded(
        "dateFormat",
        "Format of returned timestamps (e.g., iso or unix)",
        ParameterKind::String,
        Some("iso"),
    ),
    QueryParameter::forwarded(
        "oddsFormat",
        "Format of returned odds (e.g., decimal or american)",
        ParameterKind::String,
        Some("decimal"),
    ),
    QueryParameter::forwarded(
        "commenceTimeFrom",
        "Start time to filter events",
        ParameterKind::DateTime,
        Some(DEFAULT_COMMENCE_TIME),
    ),
    QueryParameter::forwarded(
        "commenceTimeTo",
        "End time to filter events",
        ParameterKind::DateTime,
        Some(DEFAULT_COMMENCE_TIME),
    ),
    QueryParameter::forwarded(
        "includeLinks",
        "Include bookmaker links in the response",
        ParameterKind::Boolean,
        Some("true"),
    ),
    QueryParameter::forwarded(
        "includeSids",
        "Include source IDs (bookmaker IDs) in the response",
        ParameterKind::Boolean,
        Some("true"),
    ),
    QueryParameter::forwarded(
        "includeBetLimits",
        "Include bet limits in the response",
        ParameterKind::Boolean,
        Some("true"),
    ),
    QueryParameter::forwarded(
        "eventIds",
        "Comma-separated event ids to restrict the results to",
        ParameterKind::String,
        None,
    ),
    QueryParameter::forwarded(
        "bookmakers",
        "Comma-separated bookmaker keys to return odds for",
        ParameterKind::String,
        None,
    ),
];

pub fn odds_route() -> RouteSpec {
    // `dateFormat=unix` yields integer seconds instead of ISO strings.
    let timestamp = json!({
        "oneOf": [
            { "type": "string", "format": "date-time" },
            { "type": "integer" }
        ]
    });
    let outcome = json!({
        "type": "object",
        "properties": {
            "name": { "type": "string" },
            "price": { "type": "number" },
            "link": { "type": "string", "nullable": true },
            "sid": { "type": "string", "nullable": true },
            "bet_limit": { "type": "number", "nullable": true }
        }
    });
    let market = json!({
        "type": "object",
        "properties": {
            "key": { "type": "string" },
            "last_update": timestamp,
            "outcomes": { "type": "array", "items": outcome }
        }
    });
    let bookmaker = json!({
        "type": "object",
        "properties": {
            "key": { "type": "string" },
            "title": { "type": "string" },
            "last_update": timestamp,
            "link": { "type": "string", "nullable": true },
            "sid": { "type": "string", "nullable": true },
            "markets": { "type": "array", "items": market }
        }
    });
    let game = json!({
        "type": "object",
        "properties": {
            "id": { "type": "string" },
            "sport_key": { "type": "string" },
            "sport_title": { "type": "string" },
            "commence_time": timestamp,
            "home_team": { "type": "string" },
            "away_team": { "type": "string" },
            "bookmakers": { "type": "array", "items": bookmaker }
        }
    });

    RouteSpec {
        path: ODDS_ROUTE_PATH,
        operation_id: ODDS_OPERATION_ID,
        summary: "Get sports odds information",
        description: "Respond with a list of games and their bookmaker odds",
        parameters: ODDS_PARAMETERS,
        responses: vec![
            ResponseSpec::new(
                200,
                "Successful response",
                json!({
                    "type": "object",
                    "properties": {
                        "data": { "type": "array", "items": game }
                    }
                }),
            ),
            ResponseSpec::error(500, "API key missing or server error"),
        ],
    }
}
