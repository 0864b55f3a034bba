pub mod manifest;
pub mod odds;
pub mod tools;

use crate::core::route_spec::RouteSpec;

/// Every tool route the server mounts and advertises, odds first.
pub fn tool_routes() -> Vec<RouteSpec> {
    vec![
        odds::odds_route(),
        tools::blockchains_route(),
        tools::user_route(),
        tools::transaction_route(),
        tools::coinflip_route(),
        tools::twitter_route(),
    ]
}
