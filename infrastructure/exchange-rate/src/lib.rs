pub mod client;
pub mod exchange_rate_api;
