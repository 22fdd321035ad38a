//! Genome Annotation Client - Client library for the GenomeAnnotation service
//!
//! This crate provides:
//! - A JSON-RPC 1.1 client with blocking and callback-based calls
//! - Injectable transports, with a reqwest-backed HTTP default
//! - Named wrappers for every remote operation

pub mod annotation;
pub mod client;
pub mod config;
pub mod error;
pub mod transport;

#[cfg(test)]
mod testing;

pub use annotation::*;
pub use client::*;
pub use config::*;
pub use error::*;
pub use transport::*;
