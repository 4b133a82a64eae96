use anyhow::Context;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub seed_users: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 3000,
            seed_users: true,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup, so tests don't touch the process env.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let host = lookup("APP_HOST").unwrap_or(defaults.host);
        let port = match lookup("APP_PORT").or_else(|| lookup("PORT")) {
            Some(v) => v
                .trim()
                .parse::<u16>()
                .with_context(|| format!("invalid listen port {v:?}"))?,
            None => defaults.port,
        };
        let seed_users = match lookup("SEED_USERS") {
            Some(v) => parse_bool(&v).with_context(|| format!("invalid SEED_USERS {v:?}"))?,
            None => defaults.seed_users,
        };

        Ok(Self {
            host,
            port,
            seed_users,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_bool(v: &str) -> anyhow::Result<bool> {
    match v.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => anyhow::bail!("expected a boolean, got {other:?}"),
    }
}
