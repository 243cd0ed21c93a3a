use crate::dates::{Clock, parse_date_key};
use std::{env, net::SocketAddr, time::Duration};
use thiserror::Error;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_REVEAL_TIMEOUT_MS: u64 = 800;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("DAILY_TASKS_TODAY must be a YYYY-MM-DD date, got {0:?}")]
    InvalidToday(String),
    #[error("DAILY_TASKS_REVEAL_TIMEOUT_MS must be a whole number of milliseconds, got {0:?}")]
    InvalidRevealTimeout(String),
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub clock: Clock,
    /// Fallback for the setup exit animation. `None` waits for the animation indefinitely.
    pub reveal_timeout: Option<Duration>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = lookup("PORT")
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);

        let clock = match lookup("DAILY_TASKS_TODAY") {
            Some(value) => {
                Clock::Fixed(parse_date_key(&value).ok_or(ConfigError::InvalidToday(value))?)
            }
            None => Clock::System,
        };

        let reveal_ms = match lookup("DAILY_TASKS_REVEAL_TIMEOUT_MS") {
            Some(value) => value
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidRevealTimeout(value))?,
            None => DEFAULT_REVEAL_TIMEOUT_MS,
        };
        let reveal_timeout = (reveal_ms > 0).then(|| Duration::from_millis(reveal_ms));

        Ok(Self {
            port,
            clock,
            reveal_timeout,
        })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}
