use std::env;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;

const MAX_RANDOM_DELAY_MS: u64 = 10_000;

#[derive(Debug, Clone)]
pub struct Config {
    pub log_level: String,
    pub environment: String,
    pub catalog_path: Option<PathBuf>,
    pub random_delay: Duration,
    pub currency_symbol: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            environment: "development".to_string(),
            catalog_path: None,
            random_delay: Duration::from_millis(500),
            currency_symbol: "$".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenv::dotenv().ok();
        let config = Self::from_lookup(|key| env::var(key).ok())?;

        tracing::info!("Config: successfully loaded for {} environment", config.environment);
        Ok(config)
    }

    /// Log filter directive chosen before the config is loaded, so config
    /// failures are still logged. `--verbose` wins, then `RUST_LOG`, then
    /// `LOG_LEVEL`.
    pub fn log_directive<F>(verbose: bool, lookup: F) -> String
    where
        F: Fn(&str) -> Option<String>,
    {
        if verbose {
            return "debug".to_string();
        }
        lookup("RUST_LOG")
            .or_else(|| lookup("LOG_LEVEL"))
            .filter(|level| !level.trim().is_empty())
            .unwrap_or_else(|| Config::default().log_level)
    }

    /// Builds the config from any key/value source. `from_env` passes the
    /// process environment.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        let random_delay = match lookup("RANDOM_DELAY_MS") {
            Some(raw) => Duration::from_millis(
                raw.trim()
                    .parse::<u64>()
                    .with_context(|| format!("RANDOM_DELAY_MS must be milliseconds, got '{}'", raw))?,
            ),
            None => defaults.random_delay,
        };

        let config = Config {
            log_level: lookup("LOG_LEVEL").unwrap_or(defaults.log_level),
            environment: lookup("APP_ENV").unwrap_or(defaults.environment),
            catalog_path: lookup("CATALOG_PATH")
                .filter(|path| !path.trim().is_empty())
                .map(PathBuf::from),
            random_delay,
            currency_symbol: lookup("CURRENCY_SYMBOL").unwrap_or(defaults.currency_symbol),
        };

        config.validate()?;
        Ok(config)
    }

    pub fn with_catalog_path(mut self, path: Option<PathBuf>) -> anyhow::Result<Self> {
        if path.is_some() {
            self.catalog_path = path;
            self.validate()?;
        }
        Ok(self)
    }

    fn validate(&self) -> Result<(), anyhow::Error> {
        if self.random_delay > Duration::from_millis(MAX_RANDOM_DELAY_MS) {
            return Err(anyhow::anyhow!(
                "RANDOM_DELAY_MS must be at most {} ms",
                MAX_RANDOM_DELAY_MS
            ));
        }

        if self.currency_symbol.trim().is_empty() {
            return Err(anyhow::anyhow!("CURRENCY_SYMBOL cannot be empty"));
        }

        if let Some(path) = &self.catalog_path {
            if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
                return Err(anyhow::anyhow!(
                    "Catalog file must be a .json file: {}",
                    path.display()
                ));
            }
        }

        Ok(())
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}
