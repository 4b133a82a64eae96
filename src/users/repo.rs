use async_trait::async_trait;
use serde::Serialize;
use tokio::sync::Mutex;

use crate::users::dto::NewUser;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
}

/// Storage for user records. Listing returns records in creation order.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn list(&self) -> anyhow::Result<Vec<User>>;
    async fn create(&self, new_user: NewUser) -> anyhow::Result<User>;
}

#[derive(Debug)]
struct Inner {
    users: Vec<User>,
    next_id: u64,
}

/// Process-lifetime store: an append-only `Vec` plus the next id to hand out.
#[derive(Debug)]
pub struct InMemoryUserStore {
    inner: Mutex<Inner>,
}

impl Default for InMemoryUserStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                users: Vec::new(),
                next_id: 1,
            }),
        }
    }

    pub fn with_users(users: Vec<User>) -> Self {
        let next_id = users.iter().map(|u| u.id).max().map_or(1, |max| max + 1);
        Self {
            inner: Mutex::new(Inner { users, next_id }),
        }
    }

    pub fn seeded() -> Self {
        Self::with_users(vec![
            User {
                id: 1,
                name: "John Doe".into(),
                email: "john@example.com".into(),
            },
            User {
                id: 2,
                name: "Jane Smith".into(),
                email: "jane@example.com".into(),
            },
        ])
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn list(&self) -> anyhow::Result<Vec<User>> {
        Ok(self.inner.lock().await.users.clone())
    }

    async fn create(&self, new_user: NewUser) -> anyhow::Result<User> {
        let (name, email) = new_user.into_parts();
        let mut inner = self.inner.lock().await;
        let user = User {
            id: inner.next_id,
            name,
            email,
        };
        inner.next_id += 1;
        inner.users.push(user.clone());
        Ok(user)
    }
}
