//! # HTTP Server
//!
//! Axum endpoints over the shared table store and the forecast cache:
//! `/loadcsv`, `/viewcsv`, `/searchcsv`, and `/weather`. All endpoints are
//! GET and answer a flat JSON envelope keyed by `result`.

pub mod config;
pub mod response;
pub mod routes;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use response::Envelope;
pub use routes::router;
pub use server::serve;
pub use state::AppState;
