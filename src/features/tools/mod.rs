pub mod dto;
pub mod handler;
pub mod helpers;
pub mod schemas;

pub use handler::{
    handle_coinflip, handle_create_transaction, handle_get_blockchains, handle_get_user,
    handle_twitter_intent,
};
pub use schemas::{
    BLOCKCHAINS_ROUTE_PATH, COINFLIP_ROUTE_PATH, TRANSACTION_ROUTE_PATH, TWITTER_ROUTE_PATH,
    USER_ROUTE_PATH, blockchains_route, coinflip_route, transaction_route, twitter_route,
    user_route,
};
