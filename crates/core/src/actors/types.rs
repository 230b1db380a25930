//! Actor lifecycle errors.

use thiserror::Error;

/// Errors raised before an actor starts running.
///
/// Everything here is a rejected request surfaced to the caller; a running
/// actor never fails, it only terminates.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ActorError {
    /// Vendor id already present in the registry.
    #[error("vendor id {0} is already in use")]
    VendorIdTaken(u32),

    /// Customer id already present in the registry.
    #[error("customer id {0} is already in use")]
    CustomerIdTaken(u32),

    /// Ids must be strictly positive.
    #[error("actor id must be a positive integer")]
    InvalidId,

    /// Rates must be strictly positive milliseconds.
    #[error("rate must be a positive number of milliseconds")]
    InvalidRate,

    /// The bounded worker set is full; new submissions are rejected,
    /// not queued.
    #[error("worker pool is full, {limit} actors already running")]
    CapacityExhausted { limit: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            ActorError::VendorIdTaken(3).to_string(),
            "vendor id 3 is already in use"
        );
        assert_eq!(
            ActorError::CapacityExhausted { limit: 10 }.to_string(),
            "worker pool is full, 10 actors already running"
        );
    }
}
