use std::net::IpAddr;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub database_url: String,
    pub pool: PoolConfig,
    pub jwt: JwtConfig,
    pub log_level: String,
    pub seed: bool,
}

#[derive(Debug, Clone)]
pub struct PoolConfig {
    pub max_connections: u32,
    pub min_connections: u32,
    pub max_lifetime: Duration,
}

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub expiration_hours: i64,
}

/// Connection parameters used when `DATABASE_URL` is not set.
#[derive(Debug, Clone, PartialEq)]
pub struct DatabaseParts {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub name: String,
    pub sslmode: String,
}

impl DatabaseParts {
    pub fn url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}?sslmode={}",
            self.user, self.password, self.host, self.port, self.name, self.sslmode
        )
    }
}

pub const DEFAULT_JWT_SECRET: &str = "your-secret-key-change-in-production";

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let host: IpAddr = env_or("PROJEHUB_HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid PROJEHUB_HOST: {e}"))?;

        let port: u16 = parse_env("PROJEHUB_PORT", "8080")?;

        let database_url = match std::env::var("DATABASE_URL") {
            Ok(url) => url,
            Err(_) => DatabaseParts {
                host: env_or("PROJEHUB_DB_HOST", "localhost"),
                port: parse_env("PROJEHUB_DB_PORT", "5433")?,
                user: env_or("PROJEHUB_DB_USER", "postgres"),
                password: env_or("PROJEHUB_DB_PASSWORD", "postgres"),
                name: env_or("PROJEHUB_DB_NAME", "projehub"),
                sslmode: env_or("PROJEHUB_DB_SSLMODE", "disable"),
            }
            .url(),
        };

        let pool = PoolConfig {
            max_connections: parse_env("PROJEHUB_DB_MAX_CONNECTIONS", "10")?,
            min_connections: parse_env("PROJEHUB_DB_MIN_CONNECTIONS", "0")?,
            max_lifetime: Duration::from_secs(parse_env("PROJEHUB_DB_MAX_LIFETIME_SECS", "3600")?),
        };

        let jwt = JwtConfig {
            secret: env_or("PROJEHUB_JWT_SECRET", DEFAULT_JWT_SECRET),
            expiration_hours: parse_env("PROJEHUB_JWT_EXPIRATION_HOURS", "24")?,
        };

        let log_level = env_or("PROJEHUB_LOG_LEVEL", "info");

        let seed = match env_or("PROJEHUB_SEED", "true").as_str() {
            "false" | "0" | "no" => false,
            _ => true,
        };

        Ok(Config {
            host,
            port,
            database_url,
            pool,
            jwt,
            log_level,
            seed,
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_env<T>(key: &str, default: &str) -> Result<T, String>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    env_or(key, default)
        .parse()
        .map_err(|e| format!("Invalid {key}: {e}"))
}
