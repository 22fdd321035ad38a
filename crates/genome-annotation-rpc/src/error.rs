//! Error types for genome-annotation-rpc

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RpcError {
    #[error("Unknown operation: {0}")]
    UnknownOperation(String),

    #[error("Unexpected result shape: {0}")]
    UnexpectedResult(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RpcError>;
