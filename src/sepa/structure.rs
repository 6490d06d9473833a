//! Rule-based structural checks
//!
//! Existence checks only: element counts and contents are left to the optional
//! XSD stage. All rules run and every violation is reported.

use tracing::debug;

use super::kind::MessageKind;
use crate::xml::XmlNode;

/// Elements every SEPA initiation file must contain, in reporting order.
const BASE_REQUIRED_ELEMENTS: &[&str] = &["Document", "GrpHdr", "NbOfTxs", "CtrlSum"];

const PAYMENT_INFO_TAG: &str = "PmtInf";
const MANDATE_INFO_TAG: &str = "MndtRltdInf";

/// Required elements for `kind`, in the order their absence is reported.
pub fn required_elements(kind: MessageKind) -> Vec<&'static str> {
    let mut required = BASE_REQUIRED_ELEMENTS.to_vec();
    if let Some(tag) = kind.initiation_tag() {
        required.push(tag);
    }
    required
}

/// Check the document against the structural rules of `kind`.
///
/// Returns an empty list when the document passes.
pub fn validate_structure<N: XmlNode>(document: N, kind: MessageKind) -> Vec<String> {
    let mut errors: Vec<String> = required_elements(kind)
        .into_iter()
        .filter(|name| !document.has_descendant(name))
        .map(|name| format!("Required element missing: {}", name))
        .collect();

    if !document.has_descendant(PAYMENT_INFO_TAG) {
        errors.push(format!(
            "At least one {} element is required for {}",
            PAYMENT_INFO_TAG,
            kind.payment_noun()
        ));
    }

    if kind == MessageKind::DirectDebit && !document.has_descendant(MANDATE_INFO_TAG) {
        errors.push(format!(
            "At least one {} element (mandate information) is required for {}",
            MANDATE_INFO_TAG,
            kind.payment_noun()
        ));
    }

    debug!(%kind, violations = errors.len(), "structural validation finished");
    errors
}
