pub mod json;
pub mod md;

use crate::error::GradeError;
use crate::types::report::AssessmentReport;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Md,
}

pub fn render(report: &AssessmentReport, format: OutputFormat) -> Result<String, GradeError> {
    match format {
        OutputFormat::Json => json::to_json(report).map_err(GradeError::Json),
        OutputFormat::Md => Ok(md::to_markdown(report)),
    }
}
