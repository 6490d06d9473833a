//! Loading SEPA files from disk

use std::path::Path;

use encoding_rs::WINDOWS_1252;

use crate::error::SepaError;

/// Decode file bytes as UTF-8, falling back to Windows-1252.
///
/// A UTF-8 byte order mark is removed.
pub fn decode_sepa_bytes(bytes: Vec<u8>) -> std::io::Result<String> {
    match String::from_utf8(bytes) {
        Ok(s) => Ok(match s.strip_prefix('\u{FEFF}') {
            Some(stripped) => stripped.to_string(),
            None => s,
        }),
        Err(err) => {
            // Banking exports from Windows tools are often not UTF-8
            let bytes = err.into_bytes();
            let (decoded, _, had_errors) = WINDOWS_1252.decode(&bytes);
            if had_errors {
                Err(std::io::Error::new(
                    std::io::ErrorKind::InvalidData,
                    "File contains invalid characters",
                ))
            } else {
                Ok(decoded.into_owned())
            }
        }
    }
}

/// Read a SEPA file as text
pub fn read_sepa_file(path: &Path) -> Result<String, SepaError> {
    std::fs::read(path)
        .and_then(decode_sepa_bytes)
        .map_err(|e| SepaError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })
}
