//! SEPA message kind detection

use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::error::SepaError;
use crate::xml::XmlNode;

/// Substring every ISO 20022 namespace URI contains
pub const ISO20022_NAMESPACE_MARKER: &str = "urn:iso:std:iso:20022";

/// Customer credit transfer initiation (pain.001)
pub const CREDIT_TRANSFER_TAG: &str = "CstmrCdtTrfInitn";
/// Customer direct debit initiation (pain.008)
pub const DIRECT_DEBIT_TAG: &str = "CstmrDrctDbtInitn";

/// Kind of SEPA payment-initiation message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum MessageKind {
    CreditTransfer,
    DirectDebit,
    Unrecognized,
}

impl MessageKind {
    /// Detect the kind from raw text markers, without parsing.
    ///
    /// Used to pick a schema; a credit transfer marker wins over a direct debit one.
    pub fn sniff(text: &str) -> MessageKind {
        if text.contains(CREDIT_TRANSFER_TAG) {
            MessageKind::CreditTransfer
        } else if text.contains(DIRECT_DEBIT_TAG) {
            MessageKind::DirectDebit
        } else {
            MessageKind::Unrecognized
        }
    }

    /// Root initiation element of the message body
    pub fn initiation_tag(&self) -> Option<&'static str> {
        match self {
            MessageKind::CreditTransfer => Some(CREDIT_TRANSFER_TAG),
            MessageKind::DirectDebit => Some(DIRECT_DEBIT_TAG),
            MessageKind::Unrecognized => None,
        }
    }

    /// Per-transaction element: `CdtTrfTxInf` or `DrctDbtTxInf`
    pub fn transaction_tag(&self) -> Option<&'static str> {
        match self {
            MessageKind::CreditTransfer => Some("CdtTrfTxInf"),
            MessageKind::DirectDebit => Some("DrctDbtTxInf"),
            MessageKind::Unrecognized => None,
        }
    }

    /// Counterparty and counterparty account elements of a transaction
    pub fn counterparty_tags(&self) -> Option<(&'static str, &'static str)> {
        match self {
            MessageKind::CreditTransfer => Some(("Cdtr", "CdtrAcct")),
            MessageKind::DirectDebit => Some(("Dbtr", "DbtrAcct")),
            MessageKind::Unrecognized => None,
        }
    }

    /// Human-readable name used in result messages
    pub fn label(&self) -> &'static str {
        match self {
            MessageKind::CreditTransfer => "credit transfer",
            MessageKind::DirectDebit => "direct debit",
            MessageKind::Unrecognized => "unrecognized",
        }
    }

    /// What a batch of this kind carries, used in structural messages
    pub fn payment_noun(&self) -> &'static str {
        match self {
            MessageKind::CreditTransfer => "transfers",
            MessageKind::DirectDebit => "debits",
            MessageKind::Unrecognized => "payments",
        }
    }
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Decide the message kind of a parsed document.
///
/// `document` is the document node (parent of the root element), so the root
/// element itself takes part in the tag search.
pub fn classify<N: XmlNode>(document: N) -> Result<MessageKind, SepaError> {
    let namespace = document
        .first_element_child()
        .and_then(|root| root.namespace().map(str::to_string));

    match namespace {
        Some(ns) if ns.contains(ISO20022_NAMESPACE_MARKER) => {
            debug!(namespace = %ns, "found ISO 20022 namespace");
        }
        _ => {
            return Err(SepaError::NotSepa {
                message: "The file does not appear to be a valid SEPA file".to_string(),
            });
        }
    }

    if document.has_descendant(CREDIT_TRANSFER_TAG) {
        Ok(MessageKind::CreditTransfer)
    } else if document.has_descendant(DIRECT_DEBIT_TAG) {
        Ok(MessageKind::DirectDebit)
    } else {
        Err(SepaError::NotSepa {
            message: format!(
                "The file does not appear to be a valid SEPA file (no {} or {} found)",
                CREDIT_TRANSFER_TAG, DIRECT_DEBIT_TAG
            ),
        })
    }
}
