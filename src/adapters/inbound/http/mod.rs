//! HTTP surface of the relay (axum)

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use error::{ApiError, Endpoint};
pub use routes::build_router;
pub use server::RelayServer;
pub use state::AppState;
