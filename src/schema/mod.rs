//! Optional XSD validation stage
//!
//! The engine does not validate against XSD itself. It loads the schema text for
//! the detected message kind through a [`SchemaFetcher`], caches it by URL, and
//! hands XML and schema to a [`SchemaValidator`].

mod cache;
mod fetch;
#[cfg(feature = "xsd-validation")]
mod libxml_validator;

pub use cache::SchemaCache;
pub use fetch::UrlSchemaFetcher;
#[cfg(feature = "xsd-validation")]
pub use libxml_validator::LibxmlSchemaValidator;

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use tracing::{debug, info};

use crate::error::SepaError;
use crate::sepa::MessageKind;

pub const DEFAULT_CREDIT_TRANSFER_SCHEMA_URL: &str =
    "https://raw.githubusercontent.com/ISO20022/ISO20022/master/Repository/Pain/pain.001.001.03.xsd";
pub const DEFAULT_DIRECT_DEBIT_SCHEMA_URL: &str =
    "https://raw.githubusercontent.com/ISO20022/ISO20022/master/Repository/Pain/pain.008.001.02.xsd";

/// Schema location per message kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaUrls {
    pub credit_transfer: String,
    pub direct_debit: String,
}

impl Default for SchemaUrls {
    fn default() -> Self {
        Self {
            credit_transfer: DEFAULT_CREDIT_TRANSFER_SCHEMA_URL.to_string(),
            direct_debit: DEFAULT_DIRECT_DEBIT_SCHEMA_URL.to_string(),
        }
    }
}

impl SchemaUrls {
    pub fn url_for(&self, kind: MessageKind) -> Option<&str> {
        match kind {
            MessageKind::CreditTransfer => Some(self.credit_transfer.as_str()),
            MessageKind::DirectDebit => Some(self.direct_debit.as_str()),
            MessageKind::Unrecognized => None,
        }
    }
}

/// Loads schema text by URL or identifier.
#[async_trait]
pub trait SchemaFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String>;
}

/// Validates XML text against schema text.
///
/// `Ok` with an empty list means the document conforms; `Err` means the check
/// itself could not run.
pub trait SchemaValidator: Send + Sync {
    fn validate(&self, xml: &str, schema: &str) -> Result<Vec<String>>;
}

/// The libxml2 validator when built with `xsd-validation`, otherwise `None`.
pub fn default_schema_validator() -> Option<Arc<dyn SchemaValidator>> {
    #[cfg(feature = "xsd-validation")]
    {
        let validator: Arc<dyn SchemaValidator> = Arc::new(LibxmlSchemaValidator);
        Some(validator)
    }

    #[cfg(not(feature = "xsd-validation"))]
    {
        None
    }
}

/// Fetcher, validator and cache used for the schema stage.
#[derive(Clone)]
pub struct SchemaCheck {
    fetcher: Arc<dyn SchemaFetcher>,
    validator: Arc<dyn SchemaValidator>,
    cache: Arc<SchemaCache>,
}

impl SchemaCheck {
    /// Create a schema check with its own empty cache.
    pub fn new(fetcher: Arc<dyn SchemaFetcher>, validator: Arc<dyn SchemaValidator>) -> Self {
        Self {
            fetcher,
            validator,
            cache: Arc::new(SchemaCache::new()),
        }
    }

    /// Share `cache` with other schema checks.
    pub fn with_cache(mut self, cache: Arc<SchemaCache>) -> Self {
        self.cache = cache;
        self
    }

    pub fn cache(&self) -> &Arc<SchemaCache> {
        &self.cache
    }

    /// Validate `xml` against the schema registered for the kind found in its text.
    ///
    /// Text without a kind marker is not checked.
    pub async fn run(&self, xml: &str, urls: &SchemaUrls) -> Result<(), SepaError> {
        let kind = MessageKind::sniff(xml);
        let Some(url) = urls.url_for(kind) else {
            debug!("no SEPA kind marker in text, skipping XSD validation");
            return Ok(());
        };

        let schema = self
            .cache
            .get_or_fetch(url, self.fetcher.as_ref())
            .await
            .map_err(|e| SepaError::SchemaLoad {
                url: url.to_string(),
                message: format!("{:#}", e),
            })?;

        let errors = self
            .validator
            .validate(xml, &schema)
            .map_err(|e| SepaError::SchemaEngine {
                message: format!("{:#}", e),
            })?;

        if errors.is_empty() {
            info!(%kind, url, "XSD validation passed");
            Ok(())
        } else {
            Err(SepaError::SchemaViolations { errors })
        }
    }
}
