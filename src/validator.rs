//! Validation entry points and result type

use std::path::Path;
use std::sync::Arc;

use anyhow::{anyhow, Result};
use serde::{Serialize, Serializer};
use tracing::{info, warn};

use crate::error::SepaError;
use crate::schema::{default_schema_validator, SchemaCheck, SchemaUrls, UrlSchemaFetcher};
use crate::sepa::{check_structure, SepaReport, SepaSummary};
use crate::source::read_sepa_file;

/// Outcome of validating one SEPA file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    Invalid {
        message: String,
    },
    Valid {
        message: String,
        details: SepaSummary,
    },
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid { .. })
    }

    pub fn message(&self) -> &str {
        match self {
            ValidationResult::Invalid { message } | ValidationResult::Valid { message, .. } => {
                message
            }
        }
    }

    /// Extracted summary, only present on valid results
    pub fn details(&self) -> Option<&SepaSummary> {
        match self {
            ValidationResult::Valid { details, .. } => Some(details),
            ValidationResult::Invalid { .. } => None,
        }
    }
}

impl From<Result<SepaReport, SepaError>> for ValidationResult {
    fn from(result: Result<SepaReport, SepaError>) -> Self {
        match result {
            Ok(report) => ValidationResult::Valid {
                message: report.message(),
                details: report.summary,
            },
            Err(err) => ValidationResult::Invalid {
                message: err.to_string(),
            },
        }
    }
}

#[derive(Serialize)]
struct ResultJson<'a> {
    valid: bool,
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<&'a SepaSummary>,
}

impl Serialize for ValidationResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        ResultJson {
            valid: self.is_valid(),
            message: self.message(),
            details: self.details(),
        }
        .serialize(serializer)
    }
}

/// Validator settings
#[derive(Debug, Clone, Default)]
pub struct ValidatorConfig {
    /// Schema location per message kind
    pub schema_urls: SchemaUrls,
    /// Run the XSD stage after structural validation
    pub xsd_validation: bool,
}

/// SEPA validator with an optional XSD stage
///
/// Without a [`SchemaCheck`] only the structural stages run.
#[derive(Clone, Default)]
pub struct SepaValidator {
    schema_urls: SchemaUrls,
    schema_check: Option<SchemaCheck>,
}

impl SepaValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a validator from configuration.
    ///
    /// Enabling `xsd_validation` fetches schemas with [`UrlSchemaFetcher`] and
    /// needs the `xsd-validation` feature.
    pub fn from_config(config: &ValidatorConfig) -> Result<Self> {
        let validator = Self::new().with_schema_urls(config.schema_urls.clone());
        if !config.xsd_validation {
            return Ok(validator);
        }

        let schema_validator = default_schema_validator().ok_or_else(|| {
            anyhow!("XSD validation requires building with the `xsd-validation` feature")
        })?;
        let fetcher = Arc::new(UrlSchemaFetcher::new()?);
        Ok(validator.with_schema_check(SchemaCheck::new(fetcher, schema_validator)))
    }

    pub fn with_schema_urls(mut self, schema_urls: SchemaUrls) -> Self {
        self.schema_urls = schema_urls;
        self
    }

    pub fn with_schema_check(mut self, schema_check: SchemaCheck) -> Self {
        self.schema_check = Some(schema_check);
        self
    }

    pub fn schema_urls(&self) -> &SchemaUrls {
        &self.schema_urls
    }

    pub fn schema_check(&self) -> Option<&SchemaCheck> {
        self.schema_check.as_ref()
    }

    /// Run all stages, keeping the failure kind distinguishable.
    pub async fn check(&self, xml: &str) -> Result<SepaReport, SepaError> {
        let report = check_structure(xml)?;

        if let Some(schema_check) = &self.schema_check {
            schema_check.run(xml, &self.schema_urls).await?;
        }

        Ok(report)
    }

    /// Validate `xml`, folding every failure into [`ValidationResult::Invalid`].
    pub async fn validate(&self, xml: &str) -> ValidationResult {
        let result = self.check(xml).await;
        match &result {
            Ok(report) => info!(kind = %report.kind, "SEPA file is valid"),
            Err(err) if err.is_schema_error() => warn!(error = %err, "XSD stage rejected file"),
            Err(err) => info!(error = %err, "SEPA file is invalid"),
        }
        result.into()
    }

    /// Read and validate a file.
    pub async fn validate_file(&self, path: &Path) -> ValidationResult {
        match read_sepa_file(path) {
            Ok(xml) => self.validate(&xml).await,
            Err(err) => ValidationResult::Invalid {
                message: format!("{:#}", anyhow::Error::from(err)),
            },
        }
    }
}
