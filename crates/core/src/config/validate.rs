use super::{types::Config, ConfigError};

/// Validate configuration
/// Currently validates:
/// - Server port is not 0
/// - Both pool capacity limits are at least 1
/// - Supervisor worker bound is at least 1
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "server.port cannot be 0".to_string(),
        ));
    }

    if config.pool.max_event_tickets == 0 {
        return Err(ConfigError::ValidationError(
            "pool.max_event_tickets must be at least 1".to_string(),
        ));
    }

    if config.pool.max_pool_tickets == 0 {
        return Err(ConfigError::ValidationError(
            "pool.max_pool_tickets must be at least 1".to_string(),
        ));
    }

    if config.supervisor.max_actors == 0 {
        return Err(ConfigError::ValidationError(
            "supervisor.max_actors must be at least 1".to_string(),
        ));
    }

    Ok(())
}
