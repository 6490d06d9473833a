//! Summary extraction from structurally valid SEPA files

use tracing::debug;

use super::kind::MessageKind;
use super::types::{HeaderInfo, MandateInfo, PaymentInfo, SepaSummary, TransactionInfo};
use crate::xml::XmlNode;

/// Build the summary of a document that passed [`validate_structure`].
///
/// [`validate_structure`]: super::structure::validate_structure
pub fn extract<N: XmlNode>(document: N, kind: MessageKind) -> SepaSummary {
    let summary = SepaSummary {
        header: extract_header(document),
        payments: document
            .descendants_by_tag("PmtInf")
            .into_iter()
            .map(extract_payment)
            .collect(),
        transactions: extract_transactions(document, kind),
        mandates: if kind == MessageKind::DirectDebit {
            document
                .descendants_by_tag("MndtRltdInf")
                .into_iter()
                .map(extract_mandate)
                .collect()
        } else {
            Vec::new()
        },
    };

    debug!(
        %kind,
        payments = summary.payments.len(),
        transactions = summary.transactions.len(),
        mandates = summary.mandates.len(),
        "extracted SEPA summary"
    );
    summary
}

fn extract_header<N: XmlNode>(document: N) -> HeaderInfo {
    match document.first_descendant("GrpHdr") {
        Some(grp_hdr) => HeaderInfo {
            msg_id: grp_hdr.descendant_text("MsgId"),
            creation_date: grp_hdr.descendant_text("CreDtTm"),
            nb_of_txs: grp_hdr.descendant_text("NbOfTxs"),
            ctrl_sum: grp_hdr.descendant_text("CtrlSum"),
        },
        None => HeaderInfo::default(),
    }
}

fn extract_payment<N: XmlNode>(pmt_inf: N) -> PaymentInfo {
    PaymentInfo {
        id: pmt_inf.descendant_text("PmtInfId"),
        method: pmt_inf.descendant_text("PmtMtd"),
        batch: pmt_inf.descendant_text("BtchBookg"),
        service_level: pmt_inf.nested_text("SvcLvl", "Cd"),
        local_instrument: pmt_inf.nested_text("LclInstrm", "Cd"),
        sequence_type: pmt_inf.descendant_text("SeqTp"),
        collection_date: pmt_inf.descendant_text("ReqdColltnDt"),
    }
}

fn extract_transactions<N: XmlNode>(document: N, kind: MessageKind) -> Vec<TransactionInfo> {
    let (Some(tx_tag), Some((party_tag, account_tag))) =
        (kind.transaction_tag(), kind.counterparty_tags())
    else {
        return Vec::new();
    };

    document
        .descendants_by_tag(tx_tag)
        .into_iter()
        .map(|tx| TransactionInfo {
            name: tx.nested_text(party_tag, "Nm").unwrap_or_default(),
            iban: tx.nested_text(account_tag, "IBAN").unwrap_or_default(),
            reference: tx.nested_text("RmtInf", "Ustrd").unwrap_or_default(),
            amount: tx.descendant_text("InstdAmt").unwrap_or_default(),
        })
        .collect()
}

fn extract_mandate<N: XmlNode>(mandate: N) -> MandateInfo {
    MandateInfo {
        mandate_id: mandate.descendant_text("MndtId"),
        signature_date: mandate.descendant_text("DtOfSgntr"),
        // TODO: confirm with the payment operations team whether this should read SeqTp
        sequence_type: mandate.descendant_text("AmdmntInd"),
    }
}
