use std::env;
use std::time::Duration;

use anyhow::Context;
use exchange_rate::client::ExchangeRateClientConfig;

const DEFAULT_BASE_URL: &str = "https://v6.exchangerate-api.com/v6";
const DEFAULT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_MAX_RETRIES: u32 = 2;

/// Load exchange-rate provider settings from environment variables
///
/// Environment variables:
/// - EXCHANGE_RATE_API_KEY: Provider API key (required)
/// - EXCHANGE_RATE_API_URL: Provider base URL (default: "https://v6.exchangerate-api.com/v6")
/// - EXCHANGE_RATE_TIMEOUT_SECS: Per-request timeout in seconds (default: 10)
/// - EXCHANGE_RATE_MAX_RETRIES: Retries after a connect or timeout failure (default: 2)
pub fn from_env() -> anyhow::Result<ExchangeRateClientConfig> {
    let api_key = env::var("EXCHANGE_RATE_API_KEY").context("EXCHANGE_RATE_API_KEY must be set")?;
    let base_url =
        env::var("EXCHANGE_RATE_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
    let timeout_secs = parse_or("EXCHANGE_RATE_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS)?;
    let max_retries = parse_or("EXCHANGE_RATE_MAX_RETRIES", DEFAULT_MAX_RETRIES)?;

    Ok(ExchangeRateClientConfig {
        base_url,
        api_key,
        timeout: Duration::from_secs(timeout_secs),
        max_retries,
    })
}

fn parse_or<T>(name: &str, default: T) -> anyhow::Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{} has an invalid value: {}", name, raw)),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_fall_back_to_default_when_variable_missing() {
        let value = parse_or("EXCHANGE_RATE_TEST_UNSET_VARIABLE", 7u32).unwrap();
        assert_eq!(value, 7);
    }
}
