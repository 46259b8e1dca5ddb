use serde::{Deserialize, Serialize};

use crate::sarif::model::SarifLog;

/// What a clean pass produced, for progress output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CleanSummary {
    pub runs: usize,
    pub results: usize,
    pub rules: usize,
    pub version: String,
}

impl CleanSummary {
    /// Count results and driver rules across all runs of a cleaned log.
    pub fn from_log(log: &SarifLog) -> Self {
        Self {
            runs: log.runs().len(),
            results: log.runs().iter().map(|r| r.results().len()).sum(),
            rules: log.runs().iter().map(|r| r.rules().len()).sum(),
            version: log.version.clone(),
        }
    }

    pub fn render_text(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "Done! {} results, {} rules\n",
            self.results, self.rules
        ));
        out.push_str(&format!("   Version: {}\n", self.version));
        out
    }
}
