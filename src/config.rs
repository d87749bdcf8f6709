// src/config.rs
use std::net::IpAddr;
use std::path::PathBuf;

use crate::error::StartupError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: IpAddr,
    pub port: u16,
    /// Extra consecutive ports tried when `port` is taken.
    pub port_fallback_range: u16,
    pub seed_path: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, StartupError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, StartupError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = match lookup("HOST") {
            Some(raw) => raw
                .parse()
                .map_err(|_| StartupError::InvalidConfig(format!("HOST is not an IP address: {raw}")))?,
            None => IpAddr::from([127, 0, 0, 1]),
        };
        let port = parse_u16(&lookup, "PORT", 5000)?;
        let port_fallback_range = parse_u16(&lookup, "PORT_FALLBACK_RANGE", 20)?;
        let seed_path = lookup("CATALOG_SEED_PATH")
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self { host, port, port_fallback_range, seed_path })
    }
}

fn parse_u16<F>(lookup: &F, key: &str, default: u16) -> Result<u16, StartupError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| StartupError::InvalidConfig(format!("{key} must be a port number, got {raw:?}"))),
        None => Ok(default),
    }
}
