//! Common test utilities for rust-sepacheck tests

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

pub const PAIN_001_NS: &str = "urn:iso:std:iso:20022:tech:xsd:pain.001.001.03";
pub const PAIN_008_NS: &str = "urn:iso:std:iso:20022:tech:xsd:pain.008.001.02";

/// Path of a file under tests/fixtures
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Read a fixture file as text
pub fn read_fixture(name: &str) -> String {
    fs::read_to_string(fixture_path(name))
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", name, e))
}

/// Wrap `body` in a `Document` root with the given namespace
pub fn document(namespace: &str, body: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?><Document xmlns="{}">{}</Document>"#,
        namespace, body
    )
}

/// Smallest credit transfer that passes structural validation: one payment with
/// one transaction to Alice.
pub fn minimal_credit_transfer() -> String {
    document(
        PAIN_001_NS,
        r#"<CstmrCdtTrfInitn>
  <GrpHdr><MsgId>MSG-1</MsgId><NbOfTxs>1</NbOfTxs><CtrlSum>100.00</CtrlSum></GrpHdr>
  <PmtInf>
    <PmtInfId>PMT-1</PmtInfId>
    <CdtTrfTxInf>
      <Amt><InstdAmt Ccy="EUR">100.00</InstdAmt></Amt>
      <Cdtr><Nm>Alice</Nm></Cdtr>
      <CdtrAcct><Id><IBAN>FR7612345</IBAN></Id></CdtrAcct>
    </CdtTrfTxInf>
  </PmtInf>
</CstmrCdtTrfInitn>"#,
    )
}

/// Smallest direct debit that passes structural validation
pub fn minimal_direct_debit() -> String {
    document(
        PAIN_008_NS,
        r#"<CstmrDrctDbtInitn>
  <GrpHdr><MsgId>DD-1</MsgId><NbOfTxs>1</NbOfTxs><CtrlSum>20.00</CtrlSum></GrpHdr>
  <PmtInf>
    <PmtInfId>PMT-DD</PmtInfId>
    <DrctDbtTxInf>
      <InstdAmt Ccy="EUR">20.00</InstdAmt>
      <DrctDbtTx><MndtRltdInf><MndtId>M-1</MndtId><DtOfSgntr>2024-01-01</DtOfSgntr></MndtRltdInf></DrctDbtTx>
      <Dbtr><Nm>Bob</Nm></Dbtr>
      <DbtrAcct><Id><IBAN>DE89370400440532013000</IBAN></Id></DbtrAcct>
    </DrctDbtTxInf>
  </PmtInf>
</CstmrDrctDbtInitn>"#,
    )
}

/// Lines of an invalid result's message, panicking on a valid result
pub fn invalid_lines(result: &rust_sepacheck::ValidationResult) -> Vec<String> {
    assert!(
        !result.is_valid(),
        "Expected invalid result, got: {:?}",
        result
    );
    result.message().lines().map(|l| l.to_string()).collect()
}
