/// Database connection settings, loaded from the `DB_*` environment
/// variables the deployment already uses.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub host: String,
    pub user: String,
    pub pass: String,
    pub name: String,
    pub port: u16,
}

impl DatabaseConfig {
    /// Load database settings from environment variables.
    ///
    /// `DB_HOST`, `DB_USER` and `DB_NAME` are required; `DB_PASS` defaults to
    /// empty and `DB_PORT` to `3306`.
    pub fn from_env() -> Self {
        let host = std::env::var("DB_HOST").expect("DB_HOST must be set");
        let user = std::env::var("DB_USER").expect("DB_USER must be set");
        let name = std::env::var("DB_NAME").expect("DB_NAME must be set");
        let pass = std::env::var("DB_PASS").unwrap_or_default();

        let port: u16 = std::env::var("DB_PORT")
            .unwrap_or_else(|_| "3306".into())
            .parse()
            .expect("DB_PORT must be a valid u16");

        Self {
            host,
            user,
            pass,
            name,
            port,
        }
    }

    /// Build the MySQL connection URL for sqlx.
    pub fn url(&self) -> String {
        format!(
            "mysql://{}:{}@{}:{}/{}",
            self.user, self.pass, self.host, self.port, self.name
        )
    }
}

/// Server configuration loaded from environment variables.
///
/// All fields except the database block have sensible defaults suitable for
/// local development. In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Database connection settings.
    pub database: DatabaseConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            database: DatabaseConfig::from_env(),
        }
    }
}
