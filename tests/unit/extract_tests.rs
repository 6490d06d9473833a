//! Unit tests for summary extraction

use pretty_assertions::assert_eq;

use rust_sepacheck::sepa::{HeaderInfo, MandateInfo, PaymentInfo, TransactionInfo};
use rust_sepacheck::{validate_xml, SepaSummary};

use crate::common::{document, minimal_credit_transfer, read_fixture, PAIN_001_NS};

fn details(xml: &str) -> SepaSummary {
    let result = validate_xml(xml);
    assert!(result.is_valid(), "Expected valid result: {}", result.message());
    result.details().cloned().unwrap()
}

#[test]
fn test_minimal_credit_transfer_round_trip() {
    let result = validate_xml(&minimal_credit_transfer());

    assert_eq!(
        result.message(),
        "SEPA credit transfer XML file appears valid"
    );
    let details = result.details().unwrap();
    assert_eq!(details.header.nb_of_txs.as_deref(), Some("1"));
    assert_eq!(details.header.ctrl_sum.as_deref(), Some("100.00"));
    assert_eq!(details.transactions.len(), 1);
    assert_eq!(details.transactions[0].name, "Alice");
    assert_eq!(details.transactions[0].iban, "FR7612345");
    assert_eq!(details.transactions[0].amount, "100.00");
    assert_eq!(details.transactions[0].reference, "");
}

#[test]
fn test_credit_transfer_fixture_summary() {
    let summary = details(&read_fixture("pain001_valid.xml"));

    assert_eq!(
        summary.header,
        HeaderInfo {
            msg_id: Some("CT-20240301-001".to_string()),
            creation_date: Some("2024-03-01T09:30:00".to_string()),
            nb_of_txs: Some("2".to_string()),
            ctrl_sum: Some("350.50".to_string()),
        }
    );
    assert_eq!(
        summary.payments,
        vec![PaymentInfo {
            id: Some("PAYROLL-MARCH".to_string()),
            method: Some("TRF".to_string()),
            batch: Some("true".to_string()),
            service_level: Some("SEPA".to_string()),
            local_instrument: None,
            sequence_type: None,
            collection_date: None,
        }]
    );
    assert_eq!(
        summary.transactions,
        vec![
            TransactionInfo {
                name: "Alice Martin".to_string(),
                iban: "FR7630006000011234567890189".to_string(),
                reference: "Salary March".to_string(),
                amount: "250.00".to_string(),
            },
            TransactionInfo {
                name: "Bruno Keller".to_string(),
                iban: "AT611904300234573201".to_string(),
                reference: String::new(),
                amount: "100.50".to_string(),
            },
        ]
    );
    assert!(summary.mandates.is_empty());
}

#[test]
fn test_direct_debit_fixture_summary() {
    let result = validate_xml(&read_fixture("pain008_valid.xml"));
    assert_eq!(result.message(), "SEPA direct debit XML file appears valid");
    let summary = result.details().unwrap();

    assert_eq!(summary.payments.len(), 1);
    let payment = &summary.payments[0];
    assert_eq!(payment.method.as_deref(), Some("DD"));
    assert_eq!(payment.local_instrument.as_deref(), Some("CORE"));
    assert_eq!(payment.sequence_type.as_deref(), Some("RCUR"));
    assert_eq!(payment.collection_date.as_deref(), Some("2024-04-10"));

    let names: Vec<&str> = summary.transactions.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["Claire Dubois", "David Leroy"]);
    assert_eq!(summary.transactions[1].reference, "");

    assert_eq!(
        summary.mandates,
        vec![
            MandateInfo {
                mandate_id: Some("MANDATE-0042".to_string()),
                signature_date: Some("2023-09-15".to_string()),
                sequence_type: Some("false".to_string()),
            },
            MandateInfo {
                mandate_id: Some("MANDATE-0043".to_string()),
                signature_date: Some("2024-01-03".to_string()),
                sequence_type: None,
            },
        ]
    );
}

#[test]
fn test_transaction_without_counterparty_has_empty_name() {
    let xml = document(
        PAIN_001_NS,
        r#"<CstmrCdtTrfInitn>
  <GrpHdr><NbOfTxs>1</NbOfTxs><CtrlSum>5</CtrlSum></GrpHdr>
  <PmtInf><CdtTrfTxInf><Amt><InstdAmt Ccy="EUR">5</InstdAmt></Amt></CdtTrfTxInf></PmtInf>
</CstmrCdtTrfInitn>"#,
    );
    let summary = details(&xml);

    assert_eq!(summary.transactions[0].name, "");
    assert_eq!(summary.transactions[0].iban, "");
    // Header fields stay absent rather than empty
    assert_eq!(summary.header.msg_id, None);
    assert_eq!(summary.header.creation_date, None);
}

#[test]
fn test_transactions_independent_of_payments() {
    let xml = document(
        PAIN_001_NS,
        r#"<CstmrCdtTrfInitn>
  <GrpHdr><NbOfTxs>3</NbOfTxs><CtrlSum>3</CtrlSum></GrpHdr>
  <PmtInf><PmtInfId>A</PmtInfId></PmtInf>
  <PmtInf><PmtInfId>B</PmtInfId>
    <CdtTrfTxInf><Cdtr><Nm>One</Nm></Cdtr></CdtTrfTxInf>
    <CdtTrfTxInf><Cdtr><Nm>Two</Nm></Cdtr></CdtTrfTxInf>
    <CdtTrfTxInf><Cdtr><Nm>Three</Nm></Cdtr></CdtTrfTxInf>
  </PmtInf>
</CstmrCdtTrfInitn>"#,
    );
    let summary = details(&xml);

    assert_eq!(summary.payments.len(), 2);
    assert_eq!(summary.payments[0].id.as_deref(), Some("A"));
    assert_eq!(summary.transactions.len(), 3);
    assert_eq!(summary.transactions[2].name, "Three");
}

#[test]
fn test_empty_element_is_present_not_absent() {
    let xml = document(
        PAIN_001_NS,
        "<CstmrCdtTrfInitn><GrpHdr><MsgId/><NbOfTxs>0</NbOfTxs><CtrlSum>0</CtrlSum></GrpHdr><PmtInf/></CstmrCdtTrfInitn>",
    );
    let summary = details(&xml);
    assert_eq!(summary.header.msg_id.as_deref(), Some(""));
}
