pub mod backend;
pub mod fallback;
pub mod prompt;
pub mod simulation;

use crate::types::report::{NarrativeReport, NarrativeSource};
use crate::types::scoring::ScoringResult;
use crate::types::snapshot::Snapshot;
use backend::{BackendError, NarrativeBackend};
use tracing::{info, warn};

#[derive(Debug, Clone, PartialEq)]
pub struct NarrativeOutcome {
    pub report: NarrativeReport,
    pub source: NarrativeSource,
}

/// Decodes the outermost `{...}` span of a completion as a report.
pub fn parse_payload(text: &str) -> Result<NarrativeReport, BackendError> {
    let start = text.find('{').ok_or(BackendError::MissingPayload)?;
    let end = text.rfind('}').ok_or(BackendError::MissingPayload)?;
    if end < start {
        return Err(BackendError::MissingPayload);
    }
    let report: NarrativeReport = serde_json::from_str(&text[start..=end])
        .map_err(|e| BackendError::Payload(e.to_string()))?;
    if report.roadmap.is_empty() {
        return Err(BackendError::Payload("roadmap is empty".to_string()));
    }
    if let Some(item) = report
        .roadmap
        .iter()
        .find(|item| item.priority == 0 || item.estimated_impact > 100)
    {
        return Err(BackendError::Payload(format!(
            "roadmap item {:?} has priority {} and impact {}",
            item.title, item.priority, item.estimated_impact
        )));
    }
    if report.recruiter_lens.hireability_score > 100 {
        return Err(BackendError::Payload(format!(
            "hireability score {} exceeds 100",
            report.recruiter_lens.hireability_score
        )));
    }
    Ok(report)
}

fn from_backend(
    backend: &dyn NarrativeBackend,
    snapshot: &Snapshot,
    scoring: &ScoringResult,
) -> Result<NarrativeReport, BackendError> {
    let prompt = prompt::build_prompt(snapshot, scoring);
    let text = backend.complete(&prompt)?;
    parse_payload(&text)
}

/// Asks the backend when one is present; any failure degrades to the fallback.
pub fn generate(
    snapshot: &Snapshot,
    scoring: &ScoringResult,
    backend: Option<&dyn NarrativeBackend>,
) -> NarrativeOutcome {
    if let Some(backend) = backend {
        match from_backend(backend, snapshot, scoring) {
            Ok(report) => {
                info!(backend = backend.name(), "narrative produced by backend");
                return NarrativeOutcome {
                    report,
                    source: NarrativeSource::Backend,
                };
            }
            Err(e) => {
                warn!(backend = backend.name(), error = %e, "narrative backend failed, using fallback");
            }
        }
    }

    NarrativeOutcome {
        report: fallback::fallback_report(snapshot, scoring),
        source: NarrativeSource::Deterministic,
    }
}
