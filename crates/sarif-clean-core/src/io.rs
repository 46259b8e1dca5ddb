use std::{fs, path::Path};

use serde_json::Value;

use crate::error::CleanError;
use crate::sarif::model::SarifLog;

/// A raw SARIF document as read from disk.
#[derive(Debug, Clone)]
pub struct RawDocument {
    /// Source path (informational only).
    pub path: String,

    /// Size of the file in bytes.
    pub size_bytes: u64,

    /// Parsed, loosely-typed JSON tree.
    pub value: Value,
}

/// Read and parse a JSON document.
///
/// A missing file is reported as [`CleanError::InputNotFound`] so callers can
/// tell it apart from other read failures. Malformed JSON is fatal.
pub fn read_document(path: &Path) -> Result<RawDocument, CleanError> {
    if !path.exists() {
        return Err(CleanError::InputNotFound(path.to_path_buf()));
    }

    let bytes = fs::read(path).map_err(|source| CleanError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let value = serde_json::from_slice(&bytes).map_err(|source| CleanError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!(path = %path.display(), size_bytes = bytes.len(), "read document");

    Ok(RawDocument {
        path: path.display().to_string(),
        size_bytes: bytes.len() as u64,
        value,
    })
}

/// Render a cleaned log as pretty-printed JSON (2-space indentation).
pub fn render_document(log: &SarifLog) -> Result<String, CleanError> {
    serde_json::to_string_pretty(log).map_err(CleanError::Serialize)
}

/// Serialize `log` and write it to `path`, replacing any existing file.
///
/// Serialization completes before the file is touched, so a failure never
/// leaves a truncated output behind.
pub fn write_document(path: &Path, log: &SarifLog) -> Result<(), CleanError> {
    let output = render_document(log)?;

    fs::write(path, &output).map_err(|source| CleanError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!(path = %path.display(), size_bytes = output.len(), "wrote document");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn temp_document(data: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(data).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn reads_and_parses_json() {
        let data = br#"{"version":"2.0.0","runs":[]}"#;
        let file = temp_document(data);

        let doc = read_document(file.path()).expect("document read succeeds");

        assert_eq!(doc.size_bytes, data.len() as u64);
        assert_eq!(doc.value["version"], "2.0.0");
        assert!(doc.value["runs"].as_array().unwrap().is_empty());
    }

    #[test]
    fn missing_file_is_input_not_found() {
        let result = read_document(Path::new("non_existent.sarif"));
        assert!(matches!(result, Err(CleanError::InputNotFound(_))));
    }

    #[test]
    fn malformed_json_is_parse_error() {
        let file = temp_document(b"{\"runs\": [");
        let result = read_document(file.path());
        assert!(matches!(result, Err(CleanError::Parse { .. })));
    }

    #[test]
    fn written_document_uses_two_space_indent() {
        let file = NamedTempFile::new().unwrap();
        let log = SarifLog::default();

        write_document(file.path(), &log).unwrap();

        let text = std::fs::read_to_string(file.path()).unwrap();
        assert!(text.starts_with("{\n  \"$schema\""));
        assert!(text.contains("\n  \"version\": \"2.1.0\""));
    }
}
