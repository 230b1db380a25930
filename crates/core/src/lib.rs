pub mod actors;
pub mod config;
pub mod pool;

pub use actors::{ActorError, CustomerActor, Supervisor, VendorActor};
pub use config::{
    load_config, load_config_from_str, validate_config, Config, ConfigError, PoolConfig,
    ServerConfig, SupervisorConfig,
};
pub use pool::{AddOutcome, PoolStatus, Ticket, TicketPool};
