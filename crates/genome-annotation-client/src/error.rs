//! Error types for genome-annotation-client

use genome_annotation_rpc::RpcError;
use serde_json::Value;
use thiserror::Error;

use crate::transport::TransportError;

#[derive(Error, Debug)]
pub enum ClientError {
    /// The service answered with an `error` payload
    #[error("Remote service error: {0}")]
    RemoteService(Value),

    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("RPC error: {0}")]
    Rpc(#[from] RpcError),
}

impl ClientError {
    /// The remote error payload, if the service sent one
    pub fn remote_payload(&self) -> Option<&Value> {
        match self {
            ClientError::RemoteService(payload) => Some(payload),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
