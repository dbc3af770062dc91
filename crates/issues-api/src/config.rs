//! Server configuration.
//!
//! Values come from command-line flags, falling back to environment variables
//! and then to defaults.

use clap::Parser;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// Port used when neither `--port` nor `PORT` is given.
pub const DEFAULT_PORT: u16 = 3000;

/// Configuration for the issues API server.
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(name = "issues-api", version, about = "REST API for managing issues")]
pub struct Config {
    /// Address to listen on
    #[arg(long, env = "HOST", default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
        }
    }
}

impl Config {
    /// Parse configuration from the process arguments and environment.
    pub fn from_env() -> Self {
        Self::parse()
    }

    /// The socket address the server binds to.
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_flags() {
        let config =
            Config::try_parse_from(["issues-api", "--host", "127.0.0.1", "--port", "8080"])
                .unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(
            config.socket_addr(),
            "127.0.0.1:8080".parse::<SocketAddr>().unwrap()
        );
    }

    #[test]
    fn test_rejects_invalid_port() {
        assert!(Config::try_parse_from(["issues-api", "--port", "70000"]).is_err());
        assert!(Config::try_parse_from(["issues-api", "--port", "http"]).is_err());
    }

    #[test]
    fn test_default_binds_all_interfaces_on_3000() {
        assert_eq!(
            Config::default().socket_addr(),
            "0.0.0.0:3000".parse::<SocketAddr>().unwrap()
        );
    }
}
