//! libxml2-backed XSD validation (feature `xsd-validation`)

use anyhow::{anyhow, Result};
use libxml::error::StructuredError;
use libxml::parser::Parser;
use libxml::schemas::{SchemaParserContext, SchemaValidationContext};

use super::SchemaValidator;

/// Validates documents with libxml2's schema engine.
///
/// The schema is compiled on every call; only its text is cached upstream.
#[derive(Debug, Default, Clone, Copy)]
pub struct LibxmlSchemaValidator;

fn format_errors(errors: Vec<StructuredError>) -> Vec<String> {
    errors
        .into_iter()
        .map(|se| {
            let message = se
                .message
                .as_deref()
                .map(str::trim)
                .unwrap_or("unknown schema error");
            match se.line {
                Some(line) => format!("line {}: {}", line, message),
                None => message.to_string(),
            }
        })
        .collect()
}

impl SchemaValidator for LibxmlSchemaValidator {
    fn validate(&self, xml: &str, schema: &str) -> Result<Vec<String>> {
        let mut parser_ctx = SchemaParserContext::from_buffer(schema);
        let mut validation_ctx = SchemaValidationContext::from_parser(&mut parser_ctx)
            .map_err(|errors| {
                anyhow!("Failed to compile XSD schema: {}", format_errors(errors).join("; "))
            })?;

        let document = Parser::default()
            .parse_string(xml)
            .map_err(|e| anyhow!("Failed to parse XML: {:?}", e))?;

        match validation_ctx.validate_document(&document) {
            Ok(()) => Ok(Vec::new()),
            Err(errors) => Ok(format_errors(errors)),
        }
    }
}
