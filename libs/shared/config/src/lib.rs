use std::env;
use std::net::{AddrParseError, SocketAddr};
use tracing::warn;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_DOCTOR_ID: u32 = 1;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Catalog id used when a booking target cannot be resolved.
    pub default_doctor_id: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            default_doctor_id: DEFAULT_DOCTOR_ID,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            host: env::var("DOCSMART_HOST")
                .unwrap_or_else(|_| {
                    warn!("DOCSMART_HOST not set, using default");
                    DEFAULT_HOST.to_string()
                }),
            port: parse_var("DOCSMART_PORT", DEFAULT_PORT),
            default_doctor_id: parse_var("DOCSMART_DEFAULT_DOCTOR_ID", DEFAULT_DOCTOR_ID),
        }
    }

    pub fn bind_address(&self) -> Result<SocketAddr, AddrParseError> {
        format!("{}:{}", self.host, self.port).parse()
    }
}

fn parse_var<T>(name: &str, default: T) -> T
where
    T: std::str::FromStr + std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!("{} has invalid value {:?}, using default {}", name, raw, default);
            default
        }),
        Err(_) => {
            warn!("{} not set, using default", name);
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bind_address() {
        let config = AppConfig::default();
        let addr = config.bind_address().unwrap();
        assert_eq!(addr.port(), 3000);
        assert!(addr.ip().is_unspecified());
    }

    #[test]
    fn test_invalid_host_is_rejected() {
        let config = AppConfig {
            host: "not a host".to_string(),
            ..AppConfig::default()
        };
        assert!(config.bind_address().is_err());
    }

    #[test]
    fn test_parse_var_falls_back_on_garbage() {
        env::set_var("DOCSMART_TEST_PORT_GARBAGE", "eighty");
        assert_eq!(parse_var("DOCSMART_TEST_PORT_GARBAGE", 8080u16), 8080);
        env::set_var("DOCSMART_TEST_PORT_OK", " 9090 ");
        assert_eq!(parse_var("DOCSMART_TEST_PORT_OK", 8080u16), 9090);
    }
}
