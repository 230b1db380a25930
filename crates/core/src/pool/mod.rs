//! Shared ticket pool for the marketplace simulation.
//!
//! The pool is the single mutable resource shared by every actor. All
//! mutation goes through its synchronized operations so that compound
//! check-then-act sequences (capacity check + append, pop + sold count)
//! can never be split by another task.

mod ticket_pool;
mod types;

pub use ticket_pool::TicketPool;
pub use types::{AddOutcome, PoolStatus, Ticket};
