//! SEPA payment-initiation validation
//!
//! Parses the text, classifies the message, checks its structure and extracts a
//! summary. Schema validation is layered on top by [`crate::validator`].

mod extract;
mod kind;
mod structure;
mod types;

pub use extract::extract;
pub use kind::{
    classify, MessageKind, CREDIT_TRANSFER_TAG, DIRECT_DEBIT_TAG, ISO20022_NAMESPACE_MARKER,
};
pub use structure::{required_elements, validate_structure};
pub use types::{HeaderInfo, MandateInfo, PaymentInfo, SepaSummary, TransactionInfo};

use tracing::debug;

use crate::error::SepaError;
use crate::xml::parse_document;

/// A file that passed the structural stages
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SepaReport {
    pub kind: MessageKind,
    pub summary: SepaSummary,
}

impl SepaReport {
    pub fn message(&self) -> String {
        format!("SEPA {} XML file appears valid", self.kind)
    }
}

/// Run the parse, classify, structure and extract stages on `xml`.
pub fn check_structure(xml: &str) -> Result<SepaReport, SepaError> {
    if xml.trim().is_empty() {
        return Err(SepaError::EmptyInput);
    }

    let doc = parse_document(xml)?;
    let document = doc.root();

    let kind = classify(document)?;
    debug!(%kind, "classified SEPA message");

    let errors = validate_structure(document, kind);
    if !errors.is_empty() {
        return Err(SepaError::Structural { errors });
    }

    Ok(SepaReport {
        kind,
        summary: extract(document, kind),
    })
}
