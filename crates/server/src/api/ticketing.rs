//! Ticketing API handlers: pool limits, actor lifecycle, status.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use turnstile_core::ActorError;

use crate::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

/// Request body for updating the event ticket cap
#[derive(Debug, Deserialize)]
pub struct SetEventLimitBody {
    pub max_event_tickets: u32,
}

/// Request body for updating the pool buffer cap
#[derive(Debug, Deserialize)]
pub struct SetPoolLimitBody {
    pub max_pool_tickets: u32,
}

/// Request body for starting a vendor
#[derive(Debug, Deserialize)]
pub struct StartVendorBody {
    pub id: u32,
    pub release_rate_ms: u64,
}

/// Request body for starting a customer
#[derive(Debug, Deserialize)]
pub struct StartCustomerBody {
    pub id: u32,
    pub retrieval_rate_ms: u64,
}

/// Pool status response
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub available: u32,
    pub sold: u32,
    pub max_event_tickets: u32,
    pub max_pool_tickets: u32,
    pub active_actors: usize,
}

/// Simple message response
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

fn actor_error_response(e: ActorError) -> (StatusCode, Json<ErrorResponse>) {
    let status = match e {
        ActorError::InvalidId | ActorError::InvalidRate => StatusCode::BAD_REQUEST,
        ActorError::VendorIdTaken(_) | ActorError::CustomerIdTaken(_) => StatusCode::CONFLICT,
        ActorError::CapacityExhausted { .. } => StatusCode::SERVICE_UNAVAILABLE,
    };
    (status, Json(ErrorResponse {
        error: e.to_string(),
    }))
}

// ============================================================================
// Handlers
// ============================================================================

/// Get a consistent pool status snapshot
pub async fn get_status(State(state): State<Arc<AppState>>) -> Json<StatusResponse> {
    let status = state.supervisor().status();
    let active_actors = state.supervisor().active_actors().await;
    Json(StatusResponse {
        available: status.available,
        sold: status.sold,
        max_event_tickets: status.max_event_tickets,
        max_pool_tickets: status.max_pool_tickets,
        active_actors,
    })
}

/// Update the event ticket cap
pub async fn set_event_limit(
    State(state): State<Arc<AppState>>,
    Json(body): Json<SetEventLimitBody>,
) -> Result<Json<MessageResponse>, impl IntoResponse> {
    if body.max_event_tickets == 0 {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "max_event_tickets must be a positive integer".to_string(),
            }),
        ));
    }
    state.pool().set_max_event_tickets(body.max_event_tickets);
    Ok(Json(MessageResponse {
        message: format!("Max event tickets set to {}", body.max_event_tickets),
    }))
}

/// Update the pool buffer cap
pub async fn set_pool_limit(
    State(state): State<Arc<AppState>>,
    Json(body): Json<SetPoolLimitBody>,
) -> Result<Json<MessageResponse>, impl IntoResponse> {
    if body.max_pool_tickets == 0 {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "max_pool_tickets must be a positive integer".to_string(),
            }),
        ));
    }
    state.pool().set_max_pool_tickets(body.max_pool_tickets);
    Ok(Json(MessageResponse {
        message: format!("Max pool tickets set to {}", body.max_pool_tickets),
    }))
}

/// Start a vendor actor
pub async fn start_vendor(
    State(state): State<Arc<AppState>>,
    Json(body): Json<StartVendorBody>,
) -> Result<Json<MessageResponse>, impl IntoResponse> {
    match state
        .supervisor()
        .start_vendor(body.id, body.release_rate_ms)
        .await
    {
        Ok(()) => Ok(Json(MessageResponse {
            message: format!("Vendor {} started", body.id),
        })),
        Err(e) => Err(actor_error_response(e)),
    }
}

/// Start a customer actor
pub async fn start_customer(
    State(state): State<Arc<AppState>>,
    Json(body): Json<StartCustomerBody>,
) -> Result<Json<MessageResponse>, impl IntoResponse> {
    match state
        .supervisor()
        .start_customer(body.id, body.retrieval_rate_ms)
        .await
    {
        Ok(()) => Ok(Json(MessageResponse {
            message: format!("Customer {} started", body.id),
        })),
        Err(e) => Err(actor_error_response(e)),
    }
}

/// Cancel every running actor and reset the pool
pub async fn stop_all(State(state): State<Arc<AppState>>) -> Json<MessageResponse> {
    state.supervisor().stop_all().await;
    Json(MessageResponse {
        message: "System stopped and reset".to_string(),
    })
}
