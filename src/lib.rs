//! rust-sepacheck: A fast validator for SEPA payment-initiation files
//!
//! This library checks ISO 20022 credit transfer (pain.001) and direct debit
//! (pain.008) XML files, reports every structural problem it finds, and extracts
//! a summary of the group header, payment batches, transactions and mandates.
//! Full XSD validation is an optional stage behind the `xsd-validation` feature.

pub mod error;
pub mod report;
pub mod schema;
pub mod sepa;
pub mod source;
pub mod validator;
pub mod xml;

use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tracing::debug;

pub use error::SepaError;
pub use sepa::{MessageKind, SepaSummary};
pub use validator::{SepaValidator, ValidationResult, ValidatorConfig};

/// Validate XML text with the structural stages only.
pub fn validate_xml(xml: &str) -> ValidationResult {
    sepa::check_structure(xml).into()
}

/// Result of validating one file of a batch
#[derive(Debug, Clone)]
pub struct FileValidation {
    pub path: PathBuf,
    pub result: ValidationResult,
}

/// Minimum number of files to benefit from parallel processing.
/// Below this threshold, sequential processing is faster due to rayon overhead.
const PARALLEL_THRESHOLD: usize = 8;

fn validate_path(path: &Path) -> FileValidation {
    let result = match source::read_sepa_file(path) {
        Ok(xml) => validate_xml(&xml),
        Err(err) => ValidationResult::Invalid {
            message: format!("{:#}", anyhow::Error::from(err)),
        },
    };
    FileValidation {
        path: path.to_path_buf(),
        result,
    }
}

/// Validate several files with the structural stages, keeping input order
pub fn validate_files(paths: &[PathBuf]) -> Vec<FileValidation> {
    debug!(files = paths.len(), "validating SEPA files");

    if paths.len() >= PARALLEL_THRESHOLD {
        paths.par_iter().map(|p| validate_path(p)).collect()
    } else {
        paths.iter().map(|p| validate_path(p)).collect()
    }
}
