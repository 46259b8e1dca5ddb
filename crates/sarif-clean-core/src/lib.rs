pub mod error;
pub mod io;
pub mod report;
pub mod sarif;

use std::path::Path;

pub use error::CleanError;
pub use report::CleanSummary;
pub use sarif::sanitize;

/// `$schema` written to every cleaned document.
pub const SARIF_SCHEMA_URI: &str =
    "https://raw.githubusercontent.com/oasis-tcs/sarif-spec/master/Schemata/sarif-schema-2.1.0.json";

/// SARIF version written to every cleaned document, whatever the input declared.
pub const SARIF_VERSION: &str = "2.1.0";

/// Read `input`, sanitize it and write the result to `output`.
///
/// `input` and `output` may be the same path; the input is fully read and
/// the output fully serialized before the output file is opened.
pub fn clean_file(input: &Path, output: &Path) -> Result<CleanSummary, CleanError> {
    let raw = io::read_document(input)?;
    let cleaned = sanitize(&raw.value);
    io::write_document(output, &cleaned)?;
    Ok(CleanSummary::from_log(&cleaned))
}
