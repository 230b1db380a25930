use serde::{Deserialize, Serialize};
use std::net::IpAddr;

/// Root configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub pool: PoolConfig,
    #[serde(default)]
    pub supervisor: SupervisorConfig,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: IpAddr,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> IpAddr {
    "0.0.0.0".parse().unwrap()
}

fn default_port() -> u16 {
    8080
}

/// Initial ticket pool capacity limits
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PoolConfig {
    /// Cap on tickets ever issued for the event (available + sold)
    #[serde(default = "default_max_event_tickets")]
    pub max_event_tickets: u32,
    /// Cap on tickets allowed to sit unsold in the buffer at once
    #[serde(default = "default_max_pool_tickets")]
    pub max_pool_tickets: u32,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            max_event_tickets: default_max_event_tickets(),
            max_pool_tickets: default_max_pool_tickets(),
        }
    }
}

fn default_max_event_tickets() -> u32 {
    1000
}

fn default_max_pool_tickets() -> u32 {
    200
}

/// Supervisor configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SupervisorConfig {
    /// Maximum number of concurrently running actors; submissions past
    /// the bound are rejected
    #[serde(default = "default_max_actors")]
    pub max_actors: usize,
}

impl Default for SupervisorConfig {
    fn default() -> Self {
        Self {
            max_actors: default_max_actors(),
        }
    }
}

fn default_max_actors() -> usize {
    10
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_config() {
        let toml = r#"
[server]
host = "127.0.0.1"
port = 9000

[pool]
max_event_tickets = 50
max_pool_tickets = 10

[supervisor]
max_actors = 4
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.server.host.to_string(), "127.0.0.1");
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.pool.max_event_tickets, 50);
        assert_eq!(config.pool.max_pool_tickets, 10);
        assert_eq!(config.supervisor.max_actors, 4);
    }

    #[test]
    fn test_deserialize_empty_config_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.server.host.to_string(), "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.pool.max_event_tickets, 1000);
        assert_eq!(config.pool.max_pool_tickets, 200);
        assert_eq!(config.supervisor.max_actors, 10);
    }

    #[test]
    fn test_deserialize_partial_pool_section() {
        let toml = r#"
[pool]
max_event_tickets = 5
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.pool.max_event_tickets, 5);
        assert_eq!(config.pool.max_pool_tickets, 200);
    }

    #[test]
    fn test_config_round_trips_through_toml() {
        let config = Config::default();
        let serialized = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&serialized).unwrap();
        assert_eq!(parsed.server.port, config.server.port);
        assert_eq!(parsed.pool.max_event_tickets, config.pool.max_event_tickets);
    }
}
