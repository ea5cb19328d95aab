//! HTTP API for the booking service.
//!
//! `api_router()` returns a composable `Router` over a shared
//! `CoreState`; `server` binds it to a socket and manages shutdown.

pub mod endpoints;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod router;
pub mod server;
pub mod types;

pub use router::api_router;
pub use server::{ApiServer, ApiSession};
pub use types::ApiContext;
