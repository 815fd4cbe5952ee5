use super::{cors_config, exchange_rate_config, server_config::ServerConfig};
use exchange_rate::client::ExchangeRateClientConfig;
use poem::middleware::Cors;

pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    pub exchange_rate: ExchangeRateClientConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            server: ServerConfig::from_env()?,
            cors: cors_config::init_cors(),
            exchange_rate: exchange_rate_config::from_env()?,
        })
    }
}
