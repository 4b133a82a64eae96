use crate::config::AppConfig;
use crate::users::repo::{InMemoryUserStore, UserStore};
use std::sync::Arc;
use std::time::Instant;

#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserStore>,
    pub started_at: Instant,
}

impl AppState {
    pub fn init(config: &AppConfig) -> Self {
        let users = if config.seed_users {
            Arc::new(InMemoryUserStore::seeded()) as Arc<dyn UserStore>
        } else {
            Arc::new(InMemoryUserStore::new()) as Arc<dyn UserStore>
        };
        Self::from_parts(users)
    }

    pub fn from_parts(users: Arc<dyn UserStore>) -> Self {
        Self {
            users,
            started_at: Instant::now(),
        }
    }

    /// Unseeded in-memory state for tests.
    pub fn fake() -> Self {
        Self::from_parts(Arc::new(InMemoryUserStore::new()))
    }
}
