//! Summary records extracted from a valid SEPA file
//!
//! Values are kept as the raw element text. Header, payment and mandate fields are
//! `None` when the element is missing; transaction fields fall back to an empty
//! string instead.

use serde::Serialize;

/// Group header (`GrpHdr`) values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub msg_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nb_of_txs: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ctrl_sum: Option<String>,
}

/// One payment batch (`PmtInf`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    /// Batch booking flag (`BtchBookg`), usually "true" or "false"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub batch: Option<String>,
    /// `SvcLvl/Cd`, e.g. "SEPA"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_level: Option<String>,
    /// `LclInstrm/Cd`, e.g. "CORE" or "B2B"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local_instrument: Option<String>,
    /// `SeqTp`, e.g. "FRST", "RCUR"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sequence_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection_date: Option<String>,
}

/// One credit transfer or direct debit transaction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TransactionInfo {
    /// Creditor (transfers) or debtor (debits) name
    pub name: String,
    pub iban: String,
    /// Unstructured remittance information
    pub reference: String,
    pub amount: String,
}

/// Mandate related information of a direct debit transaction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MandateInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mandate_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signature_date: Option<String>,
    /// Read from the amendment indicator (`AmdmntInd`), not from `SeqTp`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sequence_type: Option<String>,
}

/// Everything extracted from a SEPA file that passed structural validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SepaSummary {
    pub header: HeaderInfo,
    pub payments: Vec<PaymentInfo>,
    pub transactions: Vec<TransactionInfo>,
    pub mandates: Vec<MandateInfo>,
}
