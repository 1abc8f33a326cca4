use crate::types::report::AssessmentReport;

pub fn to_json(report: &AssessmentReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assess::Assessor;
    use crate::types::snapshot::Snapshot;

    #[test]
    fn json_report_uses_camel_case_contract() {
        let now = "2024-06-01T00:00:00Z".parse().expect("date should parse");
        let report = Assessor::deterministic().assess_at(&Snapshot::default(), now);

        let rendered = to_json(&report).expect("json should serialize");
        assert!(rendered.contains("\"aiAnalysis\""));
        assert!(rendered.contains("\"totalScore\": 0"));
        assert!(rendered.contains("\"grade\": \"F\""));
        assert!(rendered.contains("\"level\": \"Not Ready\""));
        assert!(rendered.contains("\"narrativeSource\": \"deterministic\""));
        assert!(rendered.contains("\"analyzedAt\": \"2024-06-01T00:00:00Z\""));
    }
}
