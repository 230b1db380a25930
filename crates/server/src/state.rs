use std::sync::Arc;
use turnstile_core::{Config, Supervisor, TicketPool};

/// Shared application state
pub struct AppState {
    config: Config,
    supervisor: Supervisor,
}

impl AppState {
    pub fn new(config: Config, supervisor: Supervisor) -> Self {
        Self { config, supervisor }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn supervisor(&self) -> &Supervisor {
        &self.supervisor
    }

    pub fn pool(&self) -> &Arc<TicketPool> {
        self.supervisor.pool()
    }
}
