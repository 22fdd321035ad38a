//! Catalogue of GenomeAnnotation remote operations

use std::fmt;
use std::str::FromStr;

use crate::error::RpcError;
use crate::types::ResultArity;

/// Service prefix of every remote method name
pub const SERVICE_NAME: &str = "GenomeAnnotation";

macro_rules! operations {
    ($( $(#[$doc:meta])* $variant:ident => $name:literal ),* $(,)?) => {
        /// GenomeAnnotation remote operation
        ///
        /// Every operation takes exactly one domain object and returns
        /// exactly one value.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Operation {
            $( $(#[$doc])* $variant, )*
        }

        impl Operation {
            /// All operations, in catalogue order
            pub const ALL: &'static [Operation] = &[ $( Operation::$variant, )* ];

            /// Operation name without the service prefix
            pub fn name(&self) -> &'static str {
                match self {
                    $( Operation::$variant => $name, )*
                }
            }

            /// Fully qualified method name sent on the wire
            pub fn method(&self) -> &'static str {
                match self {
                    $( Operation::$variant => concat!("GenomeAnnotation.", $name), )*
                }
            }
        }
    };
}

operations! {
    /// Build a metabolic reconstruction from an annotated genome
    GenomeToReconstruction => "genomeTO_to_reconstructionTO",
    /// Extract tabular feature data from a genome
    GenomeToFeatureData => "genomeTO_to_feature_data",
    /// List the roles present in a reconstruction
    ReconstructionToRoles => "reconstructionTO_to_roles",
    /// List the subsystems present in a reconstruction
    ReconstructionToSubsystems => "reconstructionTO_to_subsystems",
    /// Run the full annotation pipeline on a genome
    AnnotateGenome => "annotate_genome",
    /// Call RNA features
    CallRnas => "call_RNAs",
    /// Call protein-coding features
    CallCdss => "call_CDSs",
    /// Find the closest neighboring genomes
    FindCloseNeighbors => "find_close_neighbors",
    /// Assign functions to protein-coding features
    AssignFunctionsToCdss => "assign_functions_to_CDSs",
    /// Annotate protein sequences
    AnnotateProteins => "annotate_proteins",
}

impl Operation {
    /// Declared number of values the operation returns
    pub fn result_arity(&self) -> ResultArity {
        ResultArity::SINGLE
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = RpcError;

    /// Accepts either the short name or the fully qualified method name
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let short = s
            .strip_prefix(SERVICE_NAME)
            .and_then(|rest| rest.strip_prefix('.'))
            .unwrap_or(s);

        Operation::ALL
            .iter()
            .copied()
            .find(|op| op.name() == short)
            .ok_or_else(|| RpcError::UnknownOperation(s.to_string()))
    }
}
