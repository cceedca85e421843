//! Effzins REST API Server.
//!
//! This crate serves the rate formulas of `effzins-math` over HTTP.
//!
//! ## Endpoint
//!
//! - `POST /rate/effZins`: current, periodic, and overall rate of a savings plan
//!
//! ## Usage
//!
//! ```bash
//! # Start server on default port
//! effzins-server
//!
//! # Custom host and port
//! effzins-server --host 0.0.0.0 --port 3000
//!
//! # Load settings from a TOML file
//! effzins-server --config config/effzins.toml
//! ```

pub mod config;
pub mod dto;
pub mod error;
pub mod routes;
pub mod server;

pub use config::ServerConfig;
pub use error::{ApiError, ApiResult};
pub use server::create_router;
