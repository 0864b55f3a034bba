use std::collections::HashMap;

use crate::core::route_spec::{Forwarding, QueryParameter};
use crate::features::odds::dto::{GameRecord, UpstreamOddsRequest};
use crate::features::odds::schemas::{DEFAULT_SPORT, ODDS_PARAMETERS, SPORT_PARAM, TEAM_PARAM};

/// Collapses repeated query keys, keeping the first occurrence of each.
pub fn first_values(pairs: Vec<(String, String)>) -> HashMap<String, String> {
    let mut query = HashMap::with_capacity(pairs.len());
    for (key, value) in pairs {
        query.entry(key).or_insert(value);
    }
    query
}

/// Empty values count as absent, so `?team=` applies no filter and
/// `?regions=` falls back to the default region.
pub fn query_value<'a>(query: &'a HashMap<String, String>, name: &str) -> Option<&'a str> {
    query
        .get(name)
        .map(String::as_str)
        .filter(|value| !value.is_empty())
}

fn resolve(parameter: &QueryParameter, query: &HashMap<String, String>) -> Option<String> {
    query_value(query, parameter.name)
        .or(parameter.default)
        .map(str::to_string)
}

pub fn team_filter(query: &HashMap<String, String>) -> Option<&str> {
    query_value(query, TEAM_PARAM)
}

pub fn build_upstream_request(
    query: &HashMap<String, String>,
    api_key: &str,
) -> UpstreamOddsRequest {
    let sport = query_value(query, SPORT_PARAM)
        .unwrap_or(DEFAULT_SPORT)
        .to_string();

    let params = ODDS_PARAMETERS
        .iter()
        .filter(|parameter| parameter.forwarding == Forwarding::Query)
        .filter_map(|parameter| resolve(parameter, query).map(|value| (parameter.name, value)))
        .collect();

    UpstreamOddsRequest {
        sport,
        api_key: api_key.to_string(),
        params,
    }
}

pub fn filter_by_team(games: Vec<GameRecord>, team: Option<&str>) -> Vec<GameRecord> {
    let Some(team) = team else {
        return games;
    };

    let needle = team.to_lowercase();
    games
        .into_iter()
        .filter(|game| {
            game.home_team.to_lowercase().contains(&needle)
                || game.away_team.to_lowercase().contains(&needle)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::odds::dto::Timestamp;

    fn query(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect()
    }

    fn game(id: &str, home: &str, away: &str) -> GameRecord {
        GameRecord {
            id: id.to_string(),
            sport_key: "basketball_nba".to_string(),
            sport_title: "NBA".to_string(),
            commence_time: Timestamp::Iso("2023-09-09T19:00:00Z".to_string()),
            home_team: home.to_string(),
            away_team: away.to_string(),
            bookmakers: Vec::new(),
        }
    }

    fn param<'a>(request: &'a UpstreamOddsRequest, name: &str) -> Option<&'a str> {
        request
            .params
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }

    #[test]
    fn defaults_fill_every_missing_parameter() {
        let request = build_upstream_request(&HashMap::new(), "secret");

        assert_eq!(request.sport, "soccer");
        assert_eq!(request.api_key, "secret");
        assert_eq!(
            request.params,
            vec![
                ("regions", "us".to_string()),
                ("markets", "h2h,spreads".to_string()),
                ("dateFormat", "iso".to_string()),
                ("oddsFormat", "decimal".to_string()),
                ("commenceTimeFrom", "2023-09-09T00:00:00Z".to_string()),
                ("commenceTimeTo", "2023-09-09T00:00:00Z".to_string()),
                ("includeLinks", "true".to_string()),
                ("includeSids", "true".to_string()),
                ("includeBetLimits", "true".to_string()),
            ]
        );
    }

    #[test]
    fn supplied_values_override_defaults_and_team_stays_local() {
        let request = build_upstream_request(
            &query(&[
                ("sport", "basketball_nba"),
                ("regions", "uk,eu"),
                ("includeBetLimits", "false"),
                ("team", "Lakers"),
            ]),
            "secret",
        );

        assert_eq!(request.sport, "basketball_nba");
        assert_eq!(param(&request, "regions"), Some("uk,eu"));
        assert_eq!(param(&request, "includeBetLimits"), Some("false"));
        assert_eq!(param(&request, "team"), None);
        assert_eq!(param(&request, "sport"), None);
    }

    #[test]
    fn passthrough_parameters_only_forwarded_when_present() {
        let without = build_upstream_request(&HashMap::new(), "secret");
        assert_eq!(param(&without, "eventIds"), None);
        assert_eq!(param(&without, "bookmakers"), None);

        let with = build_upstream_request(
            &query(&[("eventIds", "abc,def"), ("bookmakers", "fanduel")]),
            "secret",
        );
        assert_eq!(param(&with, "eventIds"), Some("abc,def"));
        assert_eq!(param(&with, "bookmakers"), Some("fanduel"));
        let names: Vec<_> = with.params.iter().map(|(name, _)| *name).collect();
        assert_eq!(&names[names.len() - 2..], &["eventIds", "bookmakers"]);
    }

    #[test]
    fn empty_values_fall_back_to_defaults() {
        let request = build_upstream_request(&query(&[("sport", ""), ("regions", "")]), "k");
        assert_eq!(request.sport, "soccer");
        assert_eq!(param(&request, "regions"), Some("us"));
        assert_eq!(team_filter(&query(&[("team", "")])), None);
    }

    #[test]
    fn repeated_keys_keep_first_value() {
        let query = first_values(vec![
            ("regions".to_string(), "uk".to_string()),
            ("team".to_string(), "Heat".to_string()),
            ("regions".to_string(), "eu".to_string()),
            ("team".to_string(), "Bulls".to_string()),
        ]);

        assert_eq!(query.get("regions").map(String::as_str), Some("uk"));
        assert_eq!(team_filter(&query), Some("Heat"));
    }

    #[test]
    fn team_filter_is_case_insensitive_substring_on_either_side() {
        let games = vec![
            game("1", "Los Angeles Lakers", "Boston Celtics"),
            game("2", "Miami Heat", "Chicago Bulls"),
        ];

        let upper = filter_by_team(games.clone(), Some("Lakers"));
        let lower = filter_by_team(games.clone(), Some("lakers"));
        assert_eq!(upper, lower);
        assert_eq!(upper.len(), 1);

        let away = filter_by_team(games.clone(), Some("celtics"));
        assert_eq!(away.len(), 1);
        assert_eq!(away[0].id, "1");

        assert!(filter_by_team(games.clone(), Some("Warriors")).is_empty());
        assert_eq!(filter_by_team(games, None).len(), 2);
    }
}
