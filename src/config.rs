use std::env;
use std::net::SocketAddr;
use std::str::FromStr;

use crate::error::ConfigError;

const DEFAULT_DATABASE_URL: &str = "sqlite://vle.db";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub max_connections: u32,
    pub bind_addr: SocketAddr,
}

impl Config {
    /// Reads `DATABASE_URL`, `DATABASE_MAX_CONNECTIONS` and `BIND_ADDR`,
    /// falling back to local defaults for unset variables.
    pub fn new_from_env() -> Result<Self, ConfigError> {
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());
        let max_connections = parse_var("DATABASE_MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS)?;
        let bind_addr = match env::var("BIND_ADDR") {
            Ok(raw) => parse_value("BIND_ADDR", &raw)?,
            Err(_) => parse_value("BIND_ADDR", DEFAULT_BIND_ADDR)?,
        };

        Ok(Self {
            database_url,
            max_connections,
            bind_addr,
        })
    }
}

fn parse_var<T>(name: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) => parse_value(name, &raw),
        Err(_) => Ok(default),
    }
}

fn parse_value<T>(name: &'static str, raw: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
        name,
        value: raw.to_string(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_value_accepts_socket_addr() {
        let addr: SocketAddr = parse_value("BIND_ADDR", "0.0.0.0:8080").expect("valid addr");
        assert_eq!(addr.port(), 8080);
    }

    #[test]
    fn test_parse_value_reports_variable_name() {
        let err = parse_value::<u32>("DATABASE_MAX_CONNECTIONS", "many").unwrap_err();
        assert!(err.to_string().contains("DATABASE_MAX_CONNECTIONS"));
        assert!(err.to_string().contains("many"));
    }
}
