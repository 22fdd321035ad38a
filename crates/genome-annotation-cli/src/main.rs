//! GenomeAnnotation CLI - one command per remote operation

mod cli;

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;

use anyhow::{bail, Context, Result};
use clap::Parser;
use genome_annotation_client::{ClientError, GenomeAnnotationClient};
use genome_annotation_rpc::Operation;
use serde_json::Value;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Commands};

fn main() -> Result<()> {
    // Initialize logging; stdout is reserved for results
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("genome_annotation=info".parse()?),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::List => list_operations(&mut io::stdout().lock())?,
        Commands::Call {
            operation,
            input,
            output,
            compact,
        } => {
            let Some(url) = cli.url else {
                bail!("No service URL: pass --url or set GENOME_ANNOTATION_URL");
            };
            let client = GenomeAnnotationClient::new(url.as_str())?;
            call_operation(&client, operation, input.as_deref(), output.as_deref(), compact)?;
        }
    }

    Ok(())
}

fn list_operations(out: &mut impl Write) -> Result<()> {
    for operation in Operation::ALL {
        writeln!(
            out,
            "{:<32} {} (returns {})",
            operation.name(),
            operation.method(),
            operation.result_arity().0
        )?;
    }
    Ok(())
}

fn call_operation(
    client: &GenomeAnnotationClient,
    operation: Operation,
    input: Option<&Path>,
    output: Option<&Path>,
    compact: bool,
) -> Result<()> {
    let argument = match input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open {}", path.display()))?;
            read_argument(BufReader::new(file))?
        }
        None => read_argument(io::stdin().lock())?,
    };

    let rendered = invoke(client, operation, &argument, compact)?;
    match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            write_result(BufWriter::new(file), &rendered)?;
        }
        None => write_result(io::stdout().lock(), &rendered)?,
    }

    Ok(())
}

/// Call one operation and render its result, `null` when there is none
fn invoke(
    client: &GenomeAnnotationClient,
    operation: Operation,
    argument: &Value,
    compact: bool,
) -> Result<String> {
    info!("Calling {} at {}", operation.method(), client.url());
    let result = match client.call_operation(operation, argument) {
        Ok(result) => result,
        Err(ClientError::RemoteService(payload)) => {
            bail!("{} failed: {}", operation.name(), render(&payload, false)?);
        }
        Err(e) => return Err(e.into()),
    };
    debug!(
        "{} returned {}",
        operation.name(),
        if result.is_some() { "a result" } else { "nothing" }
    );

    render(&result.unwrap_or(Value::Null), compact)
}

fn read_argument(mut reader: impl Read) -> Result<Value> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    serde_json::from_str(&text).context("Input is not valid JSON")
}

fn render(value: &Value, compact: bool) -> Result<String> {
    let text = if compact {
        serde_json::to_string(value)?
    } else {
        serde_json::to_string_pretty(value)?
    };
    Ok(text)
}

fn write_result(mut out: impl Write, rendered: &str) -> Result<()> {
    writeln!(out, "{}", rendered)?;
    out.flush()?;
    Ok(())
}
