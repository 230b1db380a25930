//! Vendor and customer actors plus the supervisor that owns their
//! lifecycles.
//!
//! Each actor is an independent tokio task looping against the shared
//! [`TicketPool`](crate::pool::TicketPool). Actors never talk to each
//! other; the pool's atomic operations are the only synchronization
//! point. Shutdown is signalled over a broadcast channel observed at the
//! actors' single blocking point, and the supervisor tracks every task in
//! a `JoinSet` so stop-all can await the whole set deterministically.

mod customer;
mod supervisor;
mod types;
mod vendor;

pub use customer::CustomerActor;
pub use supervisor::Supervisor;
pub use types::ActorError;
pub use vendor::VendorActor;
