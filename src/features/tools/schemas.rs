use serde_json::json;

use crate::core::route_spec::{QueryParameter, ResponseSpec, RouteSpec};

pub const BLOCKCHAINS_ROUTE_PATH: &str = "/api/tools/get-blockchains";
pub const USER_ROUTE_PATH: &str = "/api/tools/get-user";
pub const TRANSACTION_ROUTE_PATH: &str = "/api/tools/create-transaction";
pub const COINFLIP_ROUTE_PATH: &str = "/api/tools/coinflip";
pub const TWITTER_ROUTE_PATH: &str = "/api/tools/twitter";

const TRANSACTION_PARAMETERS: &[QueryParameter] = &[
    QueryParameter::local("receiverId", "The NEAR account ID of the receiver").required(),
    QueryParameter::local("amount", "The amount of NEAR tokens to transfer").required(),
];

const TWITTER_PARAMETERS: &[QueryParameter] = &[
    QueryParameter::local("text", "The text content of the tweet").required(),
    QueryParameter::local("url", "The URL to be shared in the tweet"),
    QueryParameter::local("hashtags", "Comma-separated hashtags for the tweet"),
    QueryParameter::local("via", "The Twitter username to attribute the tweet to"),
];

fn object_with_string(property: &str, description: &str) -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            property: { "type": "string", "description": description }
        }
    })
}

pub fn blockchains_route() -> RouteSpec {
    RouteSpec {
        path: BLOCKCHAINS_ROUTE_PATH,
        operation_id: "get-blockchains",
        summary: "get blockchain information",
        description: "Respond with a list of blockchains",
        parameters: &[],
        responses: vec![ResponseSpec::new(
            200,
            "Successful response",
            object_with_string("message", "The list of blockchains"),
        )],
    }
}

pub fn user_route() -> RouteSpec {
    RouteSpec {
        path: USER_ROUTE_PATH,
        operation_id: "get-user",
        summary: "get user information",
        description: "Respond with user account ID",
        parameters: &[],
        responses: vec![ResponseSpec::new(
            200,
            "Successful response",
            object_with_string("accountId", "The user's account ID"),
        )],
    }
}

pub fn transaction_route() -> RouteSpec {
    RouteSpec {
        path: TRANSACTION_ROUTE_PATH,
        operation_id: "generate-transaction",
        summary: "Create a NEAR transaction payload",
        description: "Generates a NEAR transaction payload for transferring tokens",
        parameters: TRANSACTION_PARAMETERS,
        responses: vec![
            ResponseSpec::new(
                200,
                "Successful response",
                json!({
                    "type": "object",
                    "properties": {
                        "transactionPayload": {
                            "type": "object",
                            "properties": {
                                "receiverId": {
                                    "type": "string",
                                    "description": "The receiver's NEAR account ID"
                                },
                                "actions": {
                                    "type": "array",
                                    "items": {
                                        "type": "object",
                                        "properties": {
                                            "type": {
                                                "type": "string",
                                                "description": "The type of action (e.g., 'Transfer')"
                                            },
                                            "params": object_with_string(
                                                "deposit",
                                                "The amount to transfer in yoctoNEAR"
                                            )
                                        }
                                    }
                                }
                            }
                        }
                    }
                }),
            ),
            ResponseSpec::error(400, "Bad request"),
            ResponseSpec::error(500, "Error response"),
        ],
    }
}

pub fn coinflip_route() -> RouteSpec {
    RouteSpec {
        path: COINFLIP_ROUTE_PATH,
        operation_id: "coinflip",
        summary: "Coin flip",
        description: "Flip a coin and return the result (heads or tails)",
        parameters: &[],
        responses: vec![ResponseSpec::new(
            200,
            "Successful response",
            json!({
                "type": "object",
                "properties": {
                    "result": {
                        "type": "string",
                        "description": "The result of the coin flip (heads or tails)",
                        "enum": ["heads", "tails"]
                    }
                }
            }),
        )],
    }
}

pub fn twitter_route() -> RouteSpec {
    RouteSpec {
        path: TWITTER_ROUTE_PATH,
        operation_id: "get-twitter-share-intent",
        summary: "Generate a Twitter share intent URL",
        description: "Creates a Twitter share intent URL based on provided parameters",
        parameters: TWITTER_PARAMETERS,
        responses: vec![
            ResponseSpec::new(
                200,
                "Successful response",
                object_with_string("twitterIntentUrl", "The generated Twitter share intent URL"),
            ),
            ResponseSpec::error(400, "Bad request"),
        ],
    }
}
