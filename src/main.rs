use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use rust_sepacheck::report::print_report;
use rust_sepacheck::schema::SchemaUrls;
use rust_sepacheck::{validate_files, FileValidation, SepaValidator, ValidatorConfig};

#[derive(Parser)]
#[command(name = "rust-sepacheck")]
#[command(author, version, about = "Validate SEPA credit transfer and direct debit XML files")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate pain.001 / pain.008 files and print a summary
    Validate {
        /// SEPA XML files to validate
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Also validate against the official XSD schema (needs the xsd-validation feature)
        #[arg(long)]
        xsd: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,

        /// Schema URL or path for credit transfers (pain.001)
        #[arg(long)]
        credit_transfer_schema: Option<String>,

        /// Schema URL or path for direct debits (pain.008)
        #[arg(long)]
        direct_debit_schema: Option<String>,

        /// Enable verbose output
        #[arg(short, long)]
        verbose: bool,
    },
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn emit(results: &[FileValidation], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for file in results {
                print_report(&file.path, &file.result);
            }
        }
        OutputFormat::Json => {
            let entries: Vec<serde_json::Value> = results
                .iter()
                .map(|file| {
                    serde_json::json!({
                        "path": file.path.display().to_string(),
                        "result": file.result,
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&entries)?);
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Validate {
            files,
            xsd,
            format,
            credit_transfer_schema,
            direct_debit_schema,
            verbose,
        } => {
            init_tracing(verbose);

            let defaults = SchemaUrls::default();
            let config = ValidatorConfig {
                schema_urls: SchemaUrls {
                    credit_transfer: credit_transfer_schema.unwrap_or(defaults.credit_transfer),
                    direct_debit: direct_debit_schema.unwrap_or(defaults.direct_debit),
                },
                xsd_validation: xsd,
            };

            let results = if config.xsd_validation {
                // One validator for the whole run so the schema cache is shared
                let validator = SepaValidator::from_config(&config)?;
                let mut results = Vec::with_capacity(files.len());
                for path in files {
                    let result = validator.validate_file(&path).await;
                    results.push(FileValidation { path, result });
                }
                results
            } else {
                validate_files(&files)
            };

            emit(&results, format)?;

            if results.iter().all(|file| file.result.is_valid()) {
                Ok(ExitCode::SUCCESS)
            } else {
                Ok(ExitCode::FAILURE)
            }
        }
    }
}
