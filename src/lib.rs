//! Board Server
//!
//! Shared drawing board: an in-memory, ordered collection of colored 2D
//! points exposed over HTTP.
//!
//! ## Components
//!
//! 1. BoardStore - Ordered point sequence (single source of truth)
//! 2. WebAPI - REST API endpoints
//! 3. Static serving - p5.js canvas frontend
//!
//! ## Design Principles
//!
//! - The store is owned by `AppState` and shared via `Arc`, never a global
//! - All mutation goes through `BoardStore` behind a `RwLock`

pub mod board_store;
pub mod error;
pub mod models;
pub mod state;
pub mod web_api;

pub use error::{Error, Result};
pub use state::AppState;
