//! Thread-safe ticket pool implementation.

use std::collections::{HashSet, VecDeque};
use std::sync::{Mutex, MutexGuard};

use tracing::{debug, info, warn};

use super::types::{AddOutcome, PoolStatus, Ticket};

/// The shared ticket pool coordinator.
///
/// Owns the FIFO queue of unsold tickets, the sold counter, both capacity
/// limits, and the vendor/customer id registries. One mutex guards the
/// whole state so every public operation is atomic with respect to every
/// other; critical sections only touch in-memory state and logging happens
/// after the guard is dropped.
#[derive(Debug)]
pub struct TicketPool {
    state: Mutex<PoolState>,
}

#[derive(Debug)]
struct PoolState {
    queue: VecDeque<Ticket>,
    sold: u32,
    max_event_tickets: u32,
    max_pool_tickets: u32,
    vendors: HashSet<u32>,
    customers: HashSet<u32>,
}

impl TicketPool {
    /// Create an empty pool with the given event and buffer caps.
    pub fn new(max_event_tickets: u32, max_pool_tickets: u32) -> Self {
        Self {
            state: Mutex::new(PoolState {
                queue: VecDeque::new(),
                sold: 0,
                max_event_tickets,
                max_pool_tickets,
                vendors: HashSet::new(),
                customers: HashSet::new(),
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, PoolState> {
        // No operation can leave the state half-mutated on panic, so a
        // poisoned lock is still consistent and safe to recover.
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Register a vendor id. Returns false and leaves state untouched if
    /// the id is already registered.
    pub fn register_vendor(&self, vendor_id: u32) -> bool {
        let inserted = self.lock().vendors.insert(vendor_id);
        if inserted {
            info!(vendor_id, "vendor registered");
        } else {
            warn!(vendor_id, "vendor id already registered");
        }
        inserted
    }

    /// Register a customer id. Independent of the vendor registry.
    pub fn register_customer(&self, customer_id: u32) -> bool {
        let inserted = self.lock().customers.insert(customer_id);
        if inserted {
            info!(customer_id, "customer registered");
        } else {
            warn!(customer_id, "customer id already registered");
        }
        inserted
    }

    /// Attempt to deposit a ticket.
    ///
    /// The capacity checks and the append run under one critical section,
    /// so a concurrent add or remove can never push occupancy past a cap.
    /// Rejection is a backpressure signal, not an error.
    pub fn add_ticket(&self, vendor_id: u32, ticket: Ticket) -> AddOutcome {
        let outcome = {
            let mut state = self.lock();
            let available = state.queue.len() as u32;
            if available + state.sold >= state.max_event_tickets {
                AddOutcome::EventExhausted
            } else if available >= state.max_pool_tickets {
                AddOutcome::PoolFull
            } else {
                state.queue.push_back(ticket);
                AddOutcome::Added
            }
        };

        match outcome {
            AddOutcome::Added => {
                info!(vendor_id, ticket_id = ticket.id, "ticket added to pool");
            }
            AddOutcome::EventExhausted => {
                warn!(vendor_id, "cannot add ticket, maximum event tickets reached");
            }
            AddOutcome::PoolFull => {
                warn!(vendor_id, "cannot add ticket, maximum pool tickets reached");
            }
        }
        outcome
    }

    /// Withdraw the oldest ticket, if any.
    ///
    /// The pop and the sold-count increment happen under the same critical
    /// section so `available + sold` never transiently exceeds the event
    /// cap for a concurrent observer.
    pub fn remove_ticket(&self) -> Option<Ticket> {
        let ticket = {
            let mut state = self.lock();
            let ticket = state.queue.pop_front();
            if ticket.is_some() {
                state.sold += 1;
            }
            ticket
        };

        match ticket {
            Some(t) => info!(ticket_id = t.id, "ticket purchased"),
            None => debug!("no tickets available for purchase"),
        }
        ticket
    }

    /// Clear the queue, the sold counter, and both registries.
    ///
    /// Only used as part of a full stop/restart; previously registered
    /// ids become available again.
    pub fn reset(&self) {
        {
            let mut state = self.lock();
            state.queue.clear();
            state.sold = 0;
            state.vendors.clear();
            state.customers.clear();
        }
        info!("ticket pool reset");
    }

    /// Number of tickets currently sitting unsold in the buffer.
    pub fn available(&self) -> u32 {
        self.lock().queue.len() as u32
    }

    /// Number of tickets withdrawn so far.
    pub fn sold(&self) -> u32 {
        self.lock().sold
    }

    pub fn max_event_tickets(&self) -> u32 {
        self.lock().max_event_tickets
    }

    pub fn max_pool_tickets(&self) -> u32 {
        self.lock().max_pool_tickets
    }

    /// Consistent snapshot of all counters, taken under one lock hold.
    pub fn status(&self) -> PoolStatus {
        let state = self.lock();
        PoolStatus {
            available: state.queue.len() as u32,
            sold: state.sold,
            max_event_tickets: state.max_event_tickets,
            max_pool_tickets: state.max_pool_tickets,
        }
    }

    /// Update the event cap. Deliberately does not re-validate current
    /// occupancy; shrinking below `available + sold` is tolerated and the
    /// invariant re-establishes itself as tickets are withdrawn.
    pub fn set_max_event_tickets(&self, max_event_tickets: u32) {
        self.lock().max_event_tickets = max_event_tickets;
        info!(max_event_tickets, "event ticket cap updated");
    }

    /// Update the buffer cap. Same occupancy caveat as the event cap.
    pub fn set_max_pool_tickets(&self, max_pool_tickets: u32) {
        self.lock().max_pool_tickets = max_pool_tickets;
        info!(max_pool_tickets, "pool ticket cap updated");
    }
}
