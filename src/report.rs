//! Human-readable validation report

use std::fmt::Write;
use std::path::Path;

use crate::sepa::SepaSummary;
use crate::validator::ValidationResult;

/// Shown in place of a missing optional value
const MISSING: &str = "-";

fn or_missing(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or(MISSING)
}

/// Render the report for one file.
pub fn render_text(path: &Path, result: &ValidationResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "=== {} ===", path.display());

    match result {
        ValidationResult::Invalid { message } => {
            out.push_str("INVALID\n");
            for line in message.lines() {
                let _ = writeln!(out, "  {}", line);
            }
        }
        ValidationResult::Valid { message, details } => {
            let _ = writeln!(out, "OK ({})", message);
            out.push('\n');
            render_summary(&mut out, details);
        }
    }

    out
}

fn render_summary(out: &mut String, details: &SepaSummary) {
    let header = &details.header;
    out.push_str("--- Header ---\n");
    for (label, value) in [
        ("Message reference", &header.msg_id),
        ("Creation date", &header.creation_date),
        ("Number of transactions", &header.nb_of_txs),
        ("Total amount", &header.ctrl_sum),
    ] {
        if let Some(value) = value {
            let _ = writeln!(out, "  {}: {}", label, value);
        }
    }
    out.push('\n');

    let _ = writeln!(out, "--- Payments ({}) ---", details.payments.len());
    for payment in &details.payments {
        let _ = writeln!(
            out,
            "  {} method={} service={} instrument={} sequence={} collection={}",
            or_missing(&payment.id),
            or_missing(&payment.method),
            or_missing(&payment.service_level),
            or_missing(&payment.local_instrument),
            or_missing(&payment.sequence_type),
            or_missing(&payment.collection_date),
        );
    }
    out.push('\n');

    let _ = writeln!(out, "--- Transactions ({}) ---", details.transactions.len());
    for tx in &details.transactions {
        let _ = writeln!(
            out,
            "  {} | {} | {} | {:>12}",
            tx.name, tx.iban, tx.reference, tx.amount
        );
    }
    out.push('\n');

    out.push_str("--- Mandates ---\n");
    if details.mandates.is_empty() {
        out.push_str("  No mandates found in this file.\n");
    }
    for mandate in &details.mandates {
        let _ = writeln!(
            out,
            "  {} signed={} sequence={}",
            or_missing(&mandate.mandate_id),
            or_missing(&mandate.signature_date),
            or_missing(&mandate.sequence_type),
        );
    }
}

/// Print the report for one file to stdout.
pub fn print_report(path: &Path, result: &ValidationResult) {
    println!("{}", render_text(path, result));
}
