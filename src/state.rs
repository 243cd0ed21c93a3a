use crate::config::AppConfig;
use crate::dates::Clock;
use crate::store::Board;
use std::{sync::Arc, time::Duration};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub clock: Clock,
    pub reveal_timeout: Option<Duration>,
    pub board: Arc<Mutex<Board>>,
}

impl AppState {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            clock: config.clock,
            reveal_timeout: config.reveal_timeout,
            board: Arc::new(Mutex::new(Board::new())),
        }
    }
}
