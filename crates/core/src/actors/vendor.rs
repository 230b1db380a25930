//! Vendor actor: mints tickets into the shared pool at a fixed interval.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::broadcast;
use tracing::{debug, info};

use super::types::ActorError;
use crate::pool::{Ticket, TicketPool};

/// A producer actor.
///
/// Construction registers the vendor id with the pool; a duplicate id is
/// a constructor error and the actor never starts. The running loop owns
/// a per-vendor ticket sequence starting at 1.
#[derive(Debug)]
pub struct VendorActor {
    pool: Arc<TicketPool>,
    vendor_id: u32,
    release_interval: Duration,
}

impl VendorActor {
    pub fn new(
        pool: Arc<TicketPool>,
        vendor_id: u32,
        release_interval: Duration,
    ) -> Result<Self, ActorError> {
        if !pool.register_vendor(vendor_id) {
            return Err(ActorError::VendorIdTaken(vendor_id));
        }
        Ok(Self {
            pool,
            vendor_id,
            release_interval,
        })
    }

    /// Drive the release loop until the event sells out or shutdown fires.
    ///
    /// The interval sleep is the only blocking point; the shutdown signal
    /// interrupts it without completing the in-flight iteration. Hitting
    /// the event cap is a natural terminal state for this vendor only.
    pub async fn run(self, mut shutdown_rx: broadcast::Receiver<()>) {
        info!(vendor_id = self.vendor_id, "vendor started");
        let mut next_ticket_id: u32 = 1;
        loop {
            tokio::select! {
                _ = shutdown_rx.recv() => {
                    info!(vendor_id = self.vendor_id, "vendor received shutdown signal");
                    break;
                }
                _ = tokio::time::sleep(self.release_interval) => {
                    let status = self.pool.status();
                    if status.available + status.sold >= status.max_event_tickets {
                        info!(
                            vendor_id = self.vendor_id,
                            "maximum event tickets reached, vendor retiring"
                        );
                        break;
                    }
                    if status.available >= status.max_pool_tickets {
                        debug!(
                            vendor_id = self.vendor_id,
                            "pool buffer full, vendor waiting"
                        );
                        continue;
                    }
                    let ticket = Ticket::new(next_ticket_id);
                    next_ticket_id += 1;
                    // The pool re-checks both caps atomically; a rejection
                    // here is a lost race against another vendor and the
                    // next iteration re-evaluates from a fresh snapshot.
                    self.pool.add_ticket(self.vendor_id, ticket);
                }
            }
        }
        info!(vendor_id = self.vendor_id, "vendor stopped");
    }
}

#[cfg(test)]
mod tests {
    use tokio::task::JoinHandle;
    use tokio::time::timeout;

    use super::*;

    fn spawn_vendor(
        pool: &Arc<TicketPool>,
        id: u32,
        interval_ms: u64,
    ) -> (JoinHandle<()>, broadcast::Sender<()>) {
        let (shutdown_tx, shutdown_rx) = broadcast::channel(1);
        let actor =
            VendorActor::new(Arc::clone(pool), id, Duration::from_millis(interval_ms)).unwrap();
        (tokio::spawn(actor.run(shutdown_rx)), shutdown_tx)
    }

    #[test]
    fn test_duplicate_vendor_id_is_constructor_error() {
        let pool = Arc::new(TicketPool::new(10, 5));
        let _first = VendorActor::new(Arc::clone(&pool), 1, Duration::from_millis(10)).unwrap();
        let err = VendorActor::new(Arc::clone(&pool), 1, Duration::from_millis(10)).unwrap_err();
        assert_eq!(err, ActorError::VendorIdTaken(1));
    }

    #[tokio::test]
    async fn test_vendor_fills_pool_and_retires_at_event_cap() {
        let pool = Arc::new(TicketPool::new(3, 5));
        let (handle, _shutdown_tx) = spawn_vendor(&pool, 1, 5);

        // The vendor terminates on its own once available + sold hits the
        // event cap.
        timeout(Duration::from_secs(2), handle)
            .await
            .expect("vendor did not retire in time")
            .unwrap();

        let status = pool.status();
        assert_eq!(status.available + status.sold, 3);
    }

    #[tokio::test]
    async fn test_vendor_waits_when_pool_buffer_full() {
        let pool = Arc::new(TicketPool::new(10, 2));
        let (handle, shutdown_tx) = spawn_vendor(&pool, 1, 5);

        tokio::time::sleep(Duration::from_millis(100)).await;
        // Buffer cap holds even though the event cap has headroom.
        assert_eq!(pool.available(), 2);
        assert!(!handle.is_finished());

        shutdown_tx.send(()).unwrap();
        timeout(Duration::from_secs(1), handle).await.unwrap().unwrap();
    }

    #[tokio::test]
    async fn test_vendor_stops_promptly_on_shutdown() {
        let pool = Arc::new(TicketPool::new(1000, 100));
        let (handle, shutdown_tx) = spawn_vendor(&pool, 1, 60_000);

        // Mid-wait in a one-minute sleep; the signal must still interrupt it.
        tokio::time::sleep(Duration::from_millis(20)).await;
        shutdown_tx.send(()).unwrap();
        timeout(Duration::from_millis(500), handle)
            .await
            .expect("vendor did not observe shutdown")
            .unwrap();
        assert_eq!(pool.available(), 0);
    }

    #[tokio::test]
    async fn test_ticket_ids_are_sequential_per_vendor() {
        let pool = Arc::new(TicketPool::new(3, 5));
        let (handle, _shutdown_tx) = spawn_vendor(&pool, 1, 5);
        timeout(Duration::from_secs(2), handle).await.unwrap().unwrap();

        let ids: Vec<u32> = std::iter::from_fn(|| pool.remove_ticket())
            .map(|t| t.id)
            .collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }
}
