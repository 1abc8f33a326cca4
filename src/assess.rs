use crate::narrative::{self, backend::NarrativeBackend};
use crate::score;
use crate::timeline;
use crate::types::report::{AssessmentReport, ReportMetadata, RepositorySummary};
use crate::types::snapshot::Snapshot;
use chrono::{DateTime, Utc};
use sha2::{Digest, Sha256};

pub const ANALYSIS_VERSION: &str = "1.0.0";

/// Sequences scoring, timeline and narrative into one report.
#[derive(Default)]
pub struct Assessor {
    backend: Option<Box<dyn NarrativeBackend>>,
}

impl Assessor {
    pub fn new(backend: Option<Box<dyn NarrativeBackend>>) -> Self {
        Self { backend }
    }

    #[cfg(test)]
    pub fn deterministic() -> Self {
        Self::default()
    }

    pub fn has_backend(&self) -> bool {
        self.backend.is_some()
    }

    pub fn assess(&self, snapshot: &Snapshot) -> AssessmentReport {
        self.assess_at(snapshot, Utc::now())
    }

    pub fn assess_at(&self, snapshot: &Snapshot, now: DateTime<Utc>) -> AssessmentReport {
        let scoring = score::score_snapshot(snapshot, now);
        let narrative = narrative::generate(snapshot, &scoring, self.backend.as_deref());
        let timeline = timeline::build_timeline(&snapshot.commits, now);

        AssessmentReport {
            repository: repository_summary(snapshot),
            scoring,
            ai_analysis: narrative.report,
            timeline,
            metadata: ReportMetadata {
                analyzed_at: now,
                analysis_version: ANALYSIS_VERSION.to_string(),
                narrative_source: narrative.source,
                snapshot_digest: snapshot_digest(snapshot),
            },
        }
    }
}

fn repository_summary(snapshot: &Snapshot) -> RepositorySummary {
    let repo = &snapshot.repo;
    RepositorySummary {
        name: repo.name.clone(),
        full_name: repo.full_name.clone(),
        description: repo.description.clone().unwrap_or_default(),
        url: repo.url.clone().unwrap_or_default(),
        languages: snapshot.languages.clone(),
        stars: repo.stars,
        forks: repo.forks,
        created_at: repo.created_at,
        updated_at: repo.updated_at,
    }
}

/// SHA-256 of the canonical snapshot JSON, hex encoded.
pub fn snapshot_digest(snapshot: &Snapshot) -> String {
    let canonical = serde_json::to_vec(snapshot).unwrap_or_default();
    let digest = Sha256::digest(&canonical);
    digest.iter().map(|byte| format!("{byte:02x}")).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::narrative::backend::BackendError;
    use crate::types::report::{HireLevel, NarrativeSource};
    use crate::types::scoring::Grade;
    use crate::types::snapshot::{CommitRecord, TreeEntry, Workflow};
    use chrono::Duration;

    fn now() -> DateTime<Utc> {
        "2024-06-01T12:00:00Z".parse().expect("date should parse")
    }

    struct Offline;

    impl NarrativeBackend for Offline {
        fn name(&self) -> &str {
            "offline"
        }

        fn complete(&self, _prompt: &str) -> Result<String, BackendError> {
            Err(BackendError::MissingCredential("OFFLINE".to_string()))
        }
    }

    fn typescript_service() -> Snapshot {
        let mut structure = vec![
            TreeEntry::file("package.json"),
            TreeEntry::file("tsconfig.json"),
            TreeEntry::file(".gitignore"),
            TreeEntry::file("LICENSE"),
        ];
        structure.extend((0..6).map(|index| TreeEntry::file(format!("tests/case_{index}.test.ts"))));
        structure.extend((0..14).map(|index| TreeEntry::file(format!("src/module_{index}.ts"))));
        let mut snapshot = Snapshot {
            structure,
            readme: Some("r".repeat(1200)),
            workflows: vec![Workflow {
                name: "CI".to_string(),
                path: ".github/workflows/ci.yml".to_string(),
            }],
            commits: (0..25)
                .map(|index| CommitRecord {
                    sha: format!("{index:07x}"),
                    message: if index % 5 == 0 {
                        "wip".to_string()
                    } else {
                        "feat: progress".to_string()
                    },
                    author_name: "dev".to_string(),
                    author_email: "dev@example.com".to_string(),
                    date: now() - Duration::days(index),
                })
                .collect(),
            ..Snapshot::default()
        };
        snapshot.repo.full_name = "octo/service".to_string();
        snapshot.repo.updated_at = Some(now());
        snapshot.repo.has_issues = true;
        snapshot.languages.insert("TypeScript".to_string(), 1);
        snapshot.branches.insert("main".to_string());
        snapshot.branches.insert("dev".to_string());
        snapshot
    }

    #[test]
    fn empty_snapshot_produces_complete_failing_report() {
        let report = Assessor::deterministic().assess_at(&Snapshot::default(), now());
        assert_eq!(report.scoring.grade, Grade::F);
        assert_eq!(report.ai_analysis.recruiter_lens.level, HireLevel::NotReady);
        assert!(report.timeline.commits.is_empty());
        assert_eq!(report.timeline.activity_score, 0);
        assert_eq!(report.metadata.narrative_source, NarrativeSource::Deterministic);
        assert_eq!(report.metadata.analysis_version, ANALYSIS_VERSION);
        assert_eq!(report.repository.description, "");
        let titles: Vec<&str> = report
            .ai_analysis
            .roadmap
            .iter()
            .map(|item| item.title.as_str())
            .collect();
        assert_eq!(
            titles,
            vec![
                "Add Unit Tests",
                "Enhance README",
                "Set Up CI/CD",
                "Improve Commit History",
                "Add Code Quality Tools"
            ]
        );
    }

    #[test]
    fn typescript_service_scenario() {
        let report = Assessor::deterministic().assess_at(&typescript_service(), now());
        let dimension = |name: &str| {
            report
                .scoring
                .dimensions
                .iter()
                .find(|dimension| dimension.name == name)
                .map(|dimension| dimension.score)
                .expect("dimension should exist")
        };

        assert!(dimension(score::testing::NAME) >= 9);
        assert_eq!(dimension(score::documentation::NAME), 8);
        assert_eq!(report.scoring.percentage, 65);
        assert_eq!(report.scoring.grade, Grade::C);
        assert!(report.ai_analysis.recruiter_lens.level >= HireLevel::Junior);
        assert_eq!(
            report.ai_analysis.recruiter_lens.hireability_score,
            report.scoring.percentage
        );
        assert!(report
            .ai_analysis
            .roadmap
            .iter()
            .all(|item| item.title != "Add Unit Tests"));
        assert_eq!(report.timeline.commits.len(), 25);
        assert_eq!(report.timeline.activity_score, 100);
    }

    #[test]
    fn failing_backend_degrades_to_deterministic_narrative() {
        let snapshot = typescript_service();
        let with_backend = Assessor::new(Some(Box::new(Offline)));
        assert!(with_backend.has_backend());

        let degraded = with_backend.assess_at(&snapshot, now());
        let deterministic = Assessor::deterministic().assess_at(&snapshot, now());
        assert_eq!(degraded, deterministic);
    }

    #[test]
    fn reassessing_unchanged_snapshot_is_identical() {
        let snapshot = typescript_service();
        let assessor = Assessor::deterministic();
        let first = assessor.assess_at(&snapshot, now());
        let second = assessor.assess_at(&snapshot, now());
        assert_eq!(first, second);
        assert_eq!(first.metadata.snapshot_digest.len(), 64);
    }

    #[test]
    fn digest_changes_with_snapshot_content() {
        let mut snapshot = typescript_service();
        let before = snapshot_digest(&snapshot);
        snapshot.readme = None;
        assert_ne!(before, snapshot_digest(&snapshot));
    }
}
