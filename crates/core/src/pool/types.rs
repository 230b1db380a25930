//! Core pool data types.

use serde::{Deserialize, Serialize};

/// A single event ticket.
///
/// Identifiers are assigned per vendor starting at 1, so two vendors may
/// both issue a ticket with the same numeric id. Tickets are immutable
/// once minted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    /// Per-vendor sequence number.
    pub id: u32,
}

impl Ticket {
    pub fn new(id: u32) -> Self {
        Self { id }
    }
}

/// Consistent snapshot of the pool counters.
///
/// Taken under the pool lock, so `available` and `sold` always belong to
/// the same instant; the pair may be stale relative to concurrent writers
/// but never torn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolStatus {
    /// Tickets currently sitting unsold in the buffer.
    pub available: u32,
    /// Tickets withdrawn and counted as sold.
    pub sold: u32,
    /// Cap on tickets ever issued for the event (available + sold).
    pub max_event_tickets: u32,
    /// Cap on tickets allowed to sit unsold at once.
    pub max_pool_tickets: u32,
}

/// Result of a vendor deposit attempt.
///
/// Rejections are backpressure, not errors: the producer keeps waiting
/// (pool full) or retires (event exhausted).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// Ticket appended to the tail of the queue.
    Added,
    /// `available + sold` has reached the event cap.
    EventExhausted,
    /// The unsold buffer is at capacity.
    PoolFull,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticket_serialization() {
        let ticket = Ticket::new(42);
        let json = serde_json::to_string(&ticket).unwrap();
        let parsed: Ticket = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, ticket);
    }

    #[test]
    fn test_pool_status_default() {
        let status = PoolStatus::default();
        assert_eq!(status.available, 0);
        assert_eq!(status.sold, 0);
    }
}
