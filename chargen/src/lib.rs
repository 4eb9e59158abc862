//! HTTP service for creating and listing characters.
//!
//! # Endpoints
//!
//! - `POST /create-character`: a JSON array of characters to create
//! - `GET /get-chars`: every stored character, one row per inventory item
//! - `GET /health`: liveness check
//!
//! Request bodies must be sent with `Content-Type: application/json`;
//! without it the request is refused with 415. Bodies over the configured
//! limit get 413. Other malformed JSON and invalid characters get 400.
//!
//! ```ignore
//! use chargen::{app, AppState, ServerConfig};
//!
//! let config = ServerConfig::from_env();
//! let listener = tokio::net::TcpListener::bind(config.addr).await?;
//! axum::serve(listener, app(AppState::new(), &config)).await?;
//! ```

pub mod config;
pub mod dto;
pub mod error;
pub mod routes;
pub mod sink;

pub use config::ServerConfig;
pub use error::ApiError;
pub use routes::{app, with_middleware, AppState};
pub use sink::{LogSink, MemorySink, RecordSink, SinkError};
