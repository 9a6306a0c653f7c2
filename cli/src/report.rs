use serde::Serialize;

use crate::error::CliError;
use crate::search::{SearchReport, SearchRequest};

/// Machine-readable output for `--json`
#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    pub from: &'a str,
    pub to: &'a str,
    pub result: &'a SearchReport,
}

impl<'a> JsonReport<'a> {
    pub fn new(request: &'a SearchRequest, report: &'a SearchReport) -> Self {
        Self {
            from: &request.from_label,
            to: &request.to_label,
            result: report,
        }
    }

    pub fn to_json(&self) -> Result<String, CliError> {
        serde_json::to_string_pretty(self).map_err(CliError::from)
    }
}
