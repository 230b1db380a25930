//! Customer actor: withdraws tickets from the shared pool at a fixed
//! interval.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::broadcast;
use tracing::{debug, info};

use super::types::ActorError;
use crate::pool::TicketPool;

/// A consumer actor.
///
/// Construction registers the customer id with the pool; a duplicate id
/// is a constructor error and the actor never starts.
#[derive(Debug)]
pub struct CustomerActor {
    pool: Arc<TicketPool>,
    customer_id: u32,
    retrieval_interval: Duration,
}

impl CustomerActor {
    pub fn new(
        pool: Arc<TicketPool>,
        customer_id: u32,
        retrieval_interval: Duration,
    ) -> Result<Self, ActorError> {
        if !pool.register_customer(customer_id) {
            return Err(ActorError::CustomerIdTaken(customer_id));
        }
        Ok(Self {
            pool,
            customer_id,
            retrieval_interval,
        })
    }

    /// Drive the retrieval loop until shutdown fires.
    ///
    /// An empty pool is a miss, not an error or a retry; the actor simply
    /// waits for the next interval.
    pub async fn run(self, mut shutdown_rx: broadcast::Receiver<()>) {
        info!(customer_id = self.customer_id, "customer started");
        loop {
            tokio::select! {
                _ = shutdown_rx.recv() => {
                    info!(customer_id = self.customer_id, "customer received shutdown signal");
                    break;
                }
                _ = tokio::time::sleep(self.retrieval_interval) => {
                    match self.pool.remove_ticket() {
                        Some(ticket) => info!(
                            customer_id = self.customer_id,
                            ticket_id = ticket.id,
                            "customer purchased ticket"
                        ),
                        None => debug!(
                            customer_id = self.customer_id,
                            "customer found no tickets available"
                        ),
                    }
                }
            }
        }
        info!(customer_id = self.customer_id, "customer stopped");
    }
}

#[cfg(test)]
mod tests {
    use tokio::time::timeout;

    use super::*;
    use crate::pool::Ticket;

    #[test]
    fn test_duplicate_customer_id_is_constructor_error() {
        let pool = Arc::new(TicketPool::new(10, 5));
        let _first = CustomerActor::new(Arc::clone(&pool), 1, Duration::from_millis(10)).unwrap();
        let err = CustomerActor::new(Arc::clone(&pool), 1, Duration::from_millis(10)).unwrap_err();
        assert_eq!(err, ActorError::CustomerIdTaken(1));
    }

    #[tokio::test]
    async fn test_customer_drains_pool_in_fifo_order() {
        let pool = Arc::new(TicketPool::new(10, 5));
        pool.register_vendor(1);
        for id in 1..=3 {
            pool.add_ticket(1, Ticket::new(id));
        }

        let (shutdown_tx, shutdown_rx) = broadcast::channel(1);
        let actor =
            CustomerActor::new(Arc::clone(&pool), 1, Duration::from_millis(5)).unwrap();
        let handle = tokio::spawn(actor.run(shutdown_rx));

        tokio::time::sleep(Duration::from_millis(100)).await;
        let status = pool.status();
        assert_eq!(status.available, 0);
        assert_eq!(status.sold, 3);

        shutdown_tx.send(()).unwrap();
        timeout(Duration::from_secs(1), handle).await.unwrap().unwrap();
    }

    #[tokio::test]
    async fn test_customer_keeps_looping_through_misses() {
        let pool = Arc::new(TicketPool::new(10, 5));
        let (shutdown_tx, shutdown_rx) = broadcast::channel(1);
        let actor =
            CustomerActor::new(Arc::clone(&pool), 1, Duration::from_millis(5)).unwrap();
        let handle = tokio::spawn(actor.run(shutdown_rx));

        // Several empty iterations pass without terminating the actor.
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(!handle.is_finished());
        assert_eq!(pool.sold(), 0);

        // A ticket arriving later is still picked up.
        pool.register_vendor(1);
        pool.add_ticket(1, Ticket::new(1));
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(pool.sold(), 1);

        shutdown_tx.send(()).unwrap();
        timeout(Duration::from_secs(1), handle).await.unwrap().unwrap();
    }
}
