use std::time::Duration;

use reqwest::Client;

/// Connection settings for the exchange-rate provider.
#[derive(Debug, Clone)]
pub struct ExchangeRateClientConfig {
    pub base_url: String,
    pub api_key: String,
    pub timeout: Duration,
    pub max_retries: u32,
}

/// Shared HTTP client for the exchange-rate provider.
pub struct ExchangeRateClient {
    pub client: Client,
    pub api_key: String,
    pub base_url: String,
    pub max_retries: u32,
}

impl ExchangeRateClient {
    pub fn new(config: ExchangeRateClientConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            client,
            api_key: config.api_key,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            max_retries: config.max_retries,
        })
    }

    /// Returns the pair-conversion endpoint URL, e.g.
    /// `https://v6.exchangerate-api.com/v6/<key>/pair/BRL/USD`.
    pub fn pair_url(&self, base: &str, target: &str) -> String {
        format!(
            "{}/{}/pair/{}/{}",
            self.base_url, self.api_key, base, target
        )
    }
}
