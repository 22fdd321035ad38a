//! Named wrappers for the GenomeAnnotation operations

use genome_annotation_rpc::Operation;
use serde::Serialize;
use serde_json::Value;
use tokio::task::JoinHandle;
use url::Url;

use crate::client::{ErrorCallback, RpcClient};
use crate::config::ClientConfig;
use crate::error::{ClientError, Result};

/// Client for the GenomeAnnotation service
///
/// Every operation takes one domain object and returns one value, so each
/// blocking wrapper unwraps the single-element result list. A response
/// without a body yields `Ok(None)`.
#[derive(Clone)]
pub struct GenomeAnnotationClient {
    rpc: RpcClient,
}

impl GenomeAnnotationClient {
    /// Create a client for an endpoint URL using the HTTP transport
    pub fn new(endpoint: impl AsRef<str>) -> Result<Self> {
        Ok(Self::from_rpc(RpcClient::new(endpoint)?))
    }

    /// Create a client from configuration using the HTTP transport
    pub fn with_config(config: ClientConfig) -> Self {
        Self::from_rpc(RpcClient::with_config(config))
    }

    /// Wrap an existing RPC client
    pub fn from_rpc(rpc: RpcClient) -> Self {
        Self { rpc }
    }

    /// Get the underlying RPC client
    pub fn rpc(&self) -> &RpcClient {
        &self.rpc
    }

    /// Get the service URL
    pub fn url(&self) -> &Url {
        self.rpc.url()
    }

    /// Invoke an operation and wait for its result
    pub fn call_operation<T>(&self, operation: Operation, argument: &T) -> Result<Option<Value>>
    where
        T: Serialize + ?Sized,
    {
        let param = serde_json::to_value(argument)?;

        self.rpc
            .call(operation.method(), vec![param])?
            .map(|result| {
                operation
                    .result_arity()
                    .unwrap(result)
                    .map_err(|e| ClientError::InvalidResponse(e.to_string()))
            })
            .transpose()
    }

    /// Invoke an operation without waiting for its result
    ///
    /// Only serializing the argument can fail here; everything after that is
    /// reported through the callbacks, as for [`RpcClient::call_async`].
    pub fn call_operation_async<T, S>(
        &self,
        operation: Operation,
        argument: &T,
        on_success: S,
        on_error: Option<ErrorCallback>,
    ) -> Result<JoinHandle<()>>
    where
        T: Serialize + ?Sized,
        S: FnOnce(Value) + Send + 'static,
    {
        let param = serde_json::to_value(argument)?;

        Ok(self.rpc.call_async(
            operation.method(),
            vec![param],
            operation.result_arity(),
            on_success,
            on_error,
        ))
    }
}

macro_rules! annotation_methods {
    ($( $(#[$doc:meta])* $operation:ident => $blocking:ident, $non_blocking:ident; )*) => {
        impl GenomeAnnotationClient {
            $(
                $(#[$doc])*
                pub fn $blocking<T>(&self, argument: &T) -> Result<Option<Value>>
                where
                    T: Serialize + ?Sized,
                {
                    self.call_operation(Operation::$operation, argument)
                }

                #[doc = concat!("Non-blocking variant of [`Self::", stringify!($blocking), "`].")]
                pub fn $non_blocking<T, S>(
                    &self,
                    argument: &T,
                    on_success: S,
                    on_error: Option<ErrorCallback>,
                ) -> Result<JoinHandle<()>>
                where
                    T: Serialize + ?Sized,
                    S: FnOnce(Value) + Send + 'static,
                {
                    self.call_operation_async(Operation::$operation, argument, on_success, on_error)
                }
            )*
        }
    };
}

annotation_methods! {
    /// Build a metabolic reconstruction from a genome
    GenomeToReconstruction => genome_to_reconstruction, genome_to_reconstruction_async;
    /// Extract feature data from a genome
    GenomeToFeatureData => genome_to_feature_data, genome_to_feature_data_async;
    /// List the roles of a reconstruction
    ReconstructionToRoles => reconstruction_to_roles, reconstruction_to_roles_async;
    /// List the subsystems of a reconstruction
    ReconstructionToSubsystems => reconstruction_to_subsystems, reconstruction_to_subsystems_async;
    /// Annotate a genome
    AnnotateGenome => annotate_genome, annotate_genome_async;
    /// Call RNA features in a genome
    CallRnas => call_rnas, call_rnas_async;
    /// Call protein-coding features in a genome
    CallCdss => call_cdss, call_cdss_async;
    /// Find genomes close to this one
    FindCloseNeighbors => find_close_neighbors, find_close_neighbors_async;
    /// Assign functions to the protein-coding features of a genome
    AssignFunctionsToCdss => assign_functions_to_cdss, assign_functions_to_cdss_async;
    /// Annotate the proteins of a genome
    AnnotateProteins => annotate_proteins, annotate_proteins_async;
}
