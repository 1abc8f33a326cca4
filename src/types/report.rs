use crate::types::scoring::ScoringResult;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum HireLevel {
    #[serde(rename = "Not Ready")]
    NotReady,
    Intern,
    Junior,
    #[serde(rename = "Mid-Level")]
    MidLevel,
    Senior,
}

impl HireLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            HireLevel::NotReady => "Not Ready",
            HireLevel::Intern => "Intern",
            HireLevel::Junior => "Junior",
            HireLevel::MidLevel => "Mid-Level",
            HireLevel::Senior => "Senior",
        }
    }
}

impl fmt::Display for HireLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub summary: String,
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub weaknesses: Vec<String>,
    #[serde(default)]
    pub overall_impression: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapItem {
    pub priority: u32,
    pub title: String,
    pub description: String,
    pub why: String,
    pub how: String,
    pub estimated_impact: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecruiterLens {
    pub hireability_score: u32,
    pub level: HireLevel,
    pub verdict: String,
    #[serde(default)]
    pub red_flags: Vec<String>,
    #[serde(default)]
    pub green_flags: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillMap {
    #[serde(default)]
    pub detected: Vec<String>,
    #[serde(default)]
    pub missing: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NarrativeReport {
    pub summary: Summary,
    pub roadmap: Vec<RoadmapItem>,
    pub recruiter_lens: RecruiterLens,
    #[serde(default)]
    pub skill_map: SkillMap,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayCount {
    pub date: String,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Timeline {
    pub commits: Vec<DayCount>,
    pub activity_score: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NarrativeSource {
    Deterministic,
    Backend,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositorySummary {
    pub name: String,
    pub full_name: String,
    pub description: String,
    pub url: String,
    pub languages: BTreeMap<String, u64>,
    pub stars: u64,
    pub forks: u64,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportMetadata {
    pub analyzed_at: DateTime<Utc>,
    pub analysis_version: String,
    pub narrative_source: NarrativeSource,
    pub snapshot_digest: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentReport {
    pub repository: RepositorySummary,
    pub scoring: ScoringResult,
    pub ai_analysis: NarrativeReport,
    pub timeline: Timeline,
    pub metadata: ReportMetadata,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hire_level_uses_display_names_on_the_wire() {
        let rendered =
            serde_json::to_string(&HireLevel::NotReady).expect("level should serialize");
        assert_eq!(rendered, "\"Not Ready\"");
        let parsed: HireLevel =
            serde_json::from_str("\"Mid-Level\"").expect("level should parse");
        assert_eq!(parsed, HireLevel::MidLevel);
        assert_eq!(HireLevel::Junior.to_string(), "Junior");
    }
}
