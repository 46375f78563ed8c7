//! Backend library for the agentic AI code portal.

// Re-export the modules needed for integration tests
pub mod config;
pub mod error;
pub mod handlers;
pub mod llm;
pub mod logging;
pub mod models;
pub mod samples;
pub mod server;
pub mod state;

// Re-export commonly used types
pub use error::{PortalError, Result};
