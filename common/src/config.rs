use std::fmt::{Display, Formatter};

#[derive(clap::Args, Debug, Clone)]
#[command(next_help_heading = "Database")]
#[group(id = "database")]
pub struct Database {
    #[arg(id = "db-user", long, env = "DB_USER", default_value = "tprm")]
    pub username: String,
    #[arg(id = "db-password", long, env = "DB_PASSWORD", default_value = "tprm")]
    pub password: String,
    #[arg(id = "db-host", long, env = "DB_HOST", default_value = "localhost")]
    pub host: String,
    #[arg(id = "db-port", long, env = "DB_PORT", default_value_t = 5432)]
    pub port: u16,
    #[arg(id = "db-name", long, env = "DB_NAME", default_value = "tprm")]
    pub name: String,
    #[arg(id = "db-max-conn", long, env = "DB_MAX_CONN", default_value_t = 75)]
    pub max_conn: u32,
    #[arg(id = "db-min-conn", long, env = "DB_MIN_CONN", default_value_t = 25)]
    pub min_conn: u32,
}

impl Database {
    pub fn to_url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.username, self.password, self.host, self.port, self.name
        )
    }
}

impl Display for Database {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "postgres://{}:***@{}:{}/{}",
            self.username, self.host, self.port, self.name
        )
    }
}

#[derive(clap::Args, Debug, Clone)]
#[command(next_help_heading = "Authentication")]
#[group(id = "auth")]
pub struct AuthConfig {
    /// Symmetric secret used to sign access tokens. Override in any real
    /// deployment.
    #[arg(
        id = "auth-secret",
        long,
        env = "AUTH_SECRET",
        default_value = "tprm-dev-secret-change-me"
    )]
    pub secret: String,

    /// Access token lifetime in minutes.
    #[arg(
        id = "auth-token-expiry-minutes",
        long,
        env = "AUTH_TOKEN_EXPIRY_MINUTES",
        default_value_t = 30
    )]
    pub token_expiry_minutes: i64,
}
