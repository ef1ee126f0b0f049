use anyhow::{Context, Result};
use sensibo::Config;

/// `SENSIBO_API_KEY`, and `SENSIBO_BASE_URL` if set.
pub fn config_from_env() -> Result<Config> {
    let key = std::env::var("SENSIBO_API_KEY").context("SENSIBO_API_KEY not set")?;
    let config = Config::new(key);
    Ok(match std::env::var("SENSIBO_BASE_URL") {
        Ok(url) => config.with_base_url(url),
        Err(_) => config,
    })
}
