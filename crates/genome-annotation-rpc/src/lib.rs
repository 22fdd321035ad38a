//! Genome Annotation RPC - JSON-RPC 1.1 protocol definitions
//!
//! This crate defines:
//! - The request envelope and response body exchanged with the service
//! - The catalogue of remote operations and their declared result arity
//! - Opaque domain object types passed through to the service

pub mod error;
pub mod methods;
pub mod types;

pub use error::*;
pub use methods::*;
pub use types::*;
