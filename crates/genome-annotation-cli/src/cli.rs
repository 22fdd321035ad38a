//! Command-line definitions

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use genome_annotation_rpc::Operation;
use url::Url;

#[derive(Parser, Debug)]
#[command(name = "genome-annotation", version, about = "GenomeAnnotation service client")]
pub struct Cli {
    /// Service endpoint (e.g. http://localhost:7050)
    #[arg(long, env = "GENOME_ANNOTATION_URL", global = true)]
    pub url: Option<Url>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Invoke a remote operation on a domain object
    ///
    /// The object is read as JSON from `--input` or stdin, and the result is
    /// written as JSON to `--output` or stdout.
    ///
    /// ## Examples:
    ///
    /// ```bash
    /// genome-annotation call annotate_genome < genome > annotated.genome
    /// genome-annotation call genomeTO_to_reconstructionTO -i annotated.genome -o reconstruction
    /// ```
    Call {
        /// Operation name (e.g. annotate_genome or GenomeAnnotation.annotate_genome)
        operation: Operation,

        /// Read the domain object from this file instead of stdin
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Write the result to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Write the result on a single line
        #[arg(long)]
        compact: bool,
    },

    /// List the remote operations
    List,
}
