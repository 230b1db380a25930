pub mod handlers;
pub mod routes;
pub mod ticketing;

pub use routes::create_router;
