use log::warn;
use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::str::FromStr;

pub const HOST_VAR: &str = "LEAGUE_HOST";
pub const PORT_VAR: &str = "LEAGUE_PORT";
pub const DATA_VAR: &str = "LEAGUE_DATA";

const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
const DEFAULT_PORT: u16 = 18000;

/// Listen address and seed location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerSettings {
    pub host: IpAddr,
    pub port: u16,
    /// Seed file; the embedded seed is used when absent.
    pub data_path: Option<PathBuf>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        ServerSettings {
            host: DEFAULT_HOST,
            port: DEFAULT_PORT,
            data_path: None,
        }
    }
}

impl ServerSettings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Invalid values fall back to their default with a warning.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        ServerSettings {
            host: parse_or(HOST_VAR, lookup(HOST_VAR), DEFAULT_HOST),
            port: parse_or(PORT_VAR, lookup(PORT_VAR), DEFAULT_PORT),
            data_path: lookup(DATA_VAR)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .map(PathBuf::from),
        }
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_or<T: FromStr>(key: &str, raw: Option<String>, default: T) -> T {
    let Some(raw) = raw else {
        return default;
    };

    match raw.trim().parse() {
        Ok(value) => value,
        Err(_) => {
            warn!("{} has invalid value '{}', using default", key, raw);
            default
        }
    }
}
