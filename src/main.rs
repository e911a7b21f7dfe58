use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use aws_personalize_model::personalize::operation::{endpoint, inspect_path, CONTENT_TYPE};
use aws_personalize_model::{Direction, Operation, PersonalizeError};

#[derive(Parser)]
#[command(name = "personalize-model", about = "Amazon Personalize request and result shapes")]
struct Args {
    #[arg(long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List every operation with its X-Amz-Target header
    Operations {
        #[arg(long, default_value = "us-east-1")]
        region: String,
    },
    /// Decode a JSON document as an operation's request or result shape
    Inspect {
        /// Operation name or full target, e.g. CreateSolution
        #[arg(long)]
        operation: String,
        /// Treat the document as the operation's result instead of its request
        #[arg(long)]
        result: bool,
        /// Read from this file instead of stdin
        #[arg(long)]
        file: Option<PathBuf>,
    },
}

fn run(command: Command) -> Result<(), PersonalizeError> {
    match command {
        Command::Operations { region } => {
            println!("endpoint: https://{} ({CONTENT_TYPE})", endpoint(&region));
            for op in Operation::ALL {
                println!("{:<32}{}", op.name(), op.target());
            }
            Ok(())
        }
        Command::Inspect { operation, result, file } => {
            let operation: Operation = operation.parse()?;
            let direction = if result { Direction::Result } else { Direction::Request };
            let inspection = inspect_path(operation, direction, file.as_deref())?;
            for member in &inspection.ignored_members {
                tracing::warn!(operation = %operation, member = %member, "member not part of the shape");
            }
            println!("{}", inspection.display);
            println!("{}", serde_json::to_string_pretty(&inspection.json)?);
            Ok(())
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if args.verbose { "debug" } else { "info" })
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match run(args.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(code = err.error_code(), "command failed");
            eprintln!("{}", err.to_json());
            ExitCode::FAILURE
        }
    }
}
