//! Supervisor: owns the shared pool and every running actor task.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{broadcast, Mutex};
use tokio::task::JoinSet;
use tracing::{info, warn};

use super::customer::CustomerActor;
use super::types::ActorError;
use super::vendor::VendorActor;
use crate::pool::{PoolStatus, TicketPool};

/// Owns actor lifecycles.
///
/// Spawned actors land in a `JoinSet` so stop-all can signal, enumerate
/// and await the whole set as a unit. The set is bounded by `max_actors`;
/// submissions past the bound are rejected rather than queued.
pub struct Supervisor {
    pool: Arc<TicketPool>,
    max_actors: usize,
    shutdown_tx: broadcast::Sender<()>,
    actors: Mutex<JoinSet<()>>,
}

impl Supervisor {
    pub fn new(pool: Arc<TicketPool>, max_actors: usize) -> Self {
        let (shutdown_tx, _) = broadcast::channel(1);
        Self {
            pool,
            max_actors,
            shutdown_tx,
            actors: Mutex::new(JoinSet::new()),
        }
    }

    /// The shared pool this supervisor owns.
    pub fn pool(&self) -> &Arc<TicketPool> {
        &self.pool
    }

    /// Spawn a vendor producing a ticket every `release_rate_ms`.
    pub async fn start_vendor(
        &self,
        vendor_id: u32,
        release_rate_ms: u64,
    ) -> Result<(), ActorError> {
        let interval = validate_spawn(vendor_id, release_rate_ms)?;
        let mut actors = self.actors.lock().await;
        self.check_capacity(&mut actors)?;
        let actor = VendorActor::new(Arc::clone(&self.pool), vendor_id, interval)?;
        actors.spawn(actor.run(self.shutdown_tx.subscribe()));
        info!(vendor_id, release_rate_ms, "vendor spawned");
        Ok(())
    }

    /// Spawn a customer withdrawing a ticket every `retrieval_rate_ms`.
    pub async fn start_customer(
        &self,
        customer_id: u32,
        retrieval_rate_ms: u64,
    ) -> Result<(), ActorError> {
        let interval = validate_spawn(customer_id, retrieval_rate_ms)?;
        let mut actors = self.actors.lock().await;
        self.check_capacity(&mut actors)?;
        let actor = CustomerActor::new(Arc::clone(&self.pool), customer_id, interval)?;
        actors.spawn(actor.run(self.shutdown_tx.subscribe()));
        info!(customer_id, retrieval_rate_ms, "customer spawned");
        Ok(())
    }

    /// Cancel every running actor, await their exit, then reset the pool.
    ///
    /// This is the only path that clears the id registries; afterwards the
    /// system accepts new start calls with previously used ids.
    pub async fn stop_all(&self) {
        info!("stopping all actors");
        let mut actors = self.actors.lock().await;
        // Send errors just mean no actor is currently subscribed.
        let _ = self.shutdown_tx.send(());
        while let Some(res) = actors.join_next().await {
            if let Err(e) = res {
                if e.is_panic() {
                    warn!("actor task panicked: {e}");
                }
            }
        }
        self.pool.reset();
        info!("all actors stopped, pool reset");
    }

    /// Consistent `{available, sold}` snapshot of the pool.
    pub fn status(&self) -> PoolStatus {
        self.pool.status()
    }

    /// Number of actor tasks still running.
    pub async fn active_actors(&self) -> usize {
        let mut actors = self.actors.lock().await;
        Self::reap_finished(&mut actors);
        actors.len()
    }

    fn check_capacity(&self, actors: &mut JoinSet<()>) -> Result<(), ActorError> {
        Self::reap_finished(actors);
        if actors.len() >= self.max_actors {
            warn!(limit = self.max_actors, "worker pool full, rejecting actor");
            return Err(ActorError::CapacityExhausted {
                limit: self.max_actors,
            });
        }
        Ok(())
    }

    /// Drop completed tasks (e.g. vendors retired on a sold-out event) so
    /// they stop counting against the bound.
    fn reap_finished(actors: &mut JoinSet<()>) {
        while actors.try_join_next().is_some() {}
    }
}

fn validate_spawn(id: u32, rate_ms: u64) -> Result<Duration, ActorError> {
    if id == 0 {
        return Err(ActorError::InvalidId);
    }
    if rate_ms == 0 {
        return Err(ActorError::InvalidRate);
    }
    Ok(Duration::from_millis(rate_ms))
}
