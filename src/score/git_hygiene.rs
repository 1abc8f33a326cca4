use super::rules::{self, Award, Rule, ScoreInput, Tier};
use crate::types::scoring::{DimensionScore, Score, Signal};
use crate::types::snapshot::CommitRecord;

pub const NAME: &str = "Git & Commit Hygiene";
pub const MAX_SCORE: Score = 15;

/// Only the most recent commits are judged for message quality.
pub const MESSAGE_WINDOW: usize = 20;

const CONVENTIONAL_PREFIXES: &[&str] = &[
    "feat",
    "fix",
    "docs",
    "style",
    "refactor",
    "test",
    "chore",
    "add",
    "update",
    "implement",
];

const COMMIT_COUNT_TIERS: &[Tier] = &[
    Tier::at_least(50, 6, "Active commit history"),
    Tier::at_least(20, 4, "Moderate commit activity"),
    Tier::at_least(10, 2, "Basic commit history"),
];

const MESSAGE_QUALITY_TIERS: &[Tier] = &[
    Tier::at_least(70, 5, "Well-structured commit messages"),
    Tier::at_least(50, 3, "Moderate commit message quality"),
    Tier::at_least(30, 1, "Basic commit messages"),
];

const BRANCH_TIERS: &[Tier] = &[
    Tier::at_least(3, 4, "Good branch management"),
    Tier::at_least(2, 2, "Basic branch usage"),
];

pub const RULES: &[Rule] = &[
    Rule {
        signal: "commitCount",
        measure: |input| Signal::from(input.snapshot.commits.len()),
        award: Award::Tiers(COMMIT_COUNT_TIERS),
        miss: Some("Limited commit history"),
    },
    Rule {
        signal: "commitQuality",
        measure: |input| Signal::from(message_quality(&input.snapshot.commits) as usize),
        award: Award::Tiers(MESSAGE_QUALITY_TIERS),
        miss: Some("Poor commit message quality"),
    },
    Rule {
        signal: "branchCount",
        measure: |input| Signal::from(input.snapshot.branches.len()),
        award: Award::Tiers(BRANCH_TIERS),
        miss: Some("Single branch (main/master only)"),
    },
];

pub fn is_conventional(message: &str) -> bool {
    let lower = message.to_lowercase();
    CONVENTIONAL_PREFIXES
        .iter()
        .any(|prefix| lower.starts_with(prefix))
}

/// Percentage of the recent window with a conventional prefix, rounded.
pub fn message_quality(commits: &[CommitRecord]) -> u32 {
    let window = &commits[..commits.len().min(MESSAGE_WINDOW)];
    if window.is_empty() {
        return 0;
    }
    let good = window
        .iter()
        .filter(|commit| is_conventional(&commit.message))
        .count();
    crate::types::scoring::rounded_percentage(good as Score, window.len() as Score)
}

pub fn git_hygiene_score(input: &ScoreInput<'_>) -> DimensionScore {
    rules::apply(NAME, MAX_SCORE, RULES, input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::snapshot::Snapshot;

    fn commits(messages: &[&str]) -> Vec<CommitRecord> {
        let date = "2024-03-01T12:00:00Z".parse().expect("date should parse");
        messages
            .iter()
            .enumerate()
            .map(|(index, message)| CommitRecord {
                sha: format!("{index:07x}"),
                message: message.to_string(),
                author_name: "dev".to_string(),
                author_email: "dev@example.com".to_string(),
                date,
            })
            .collect()
    }

    #[test]
    fn conventional_prefix_match_ignores_case() {
        assert!(is_conventional("Fix: handle empty tree"));
        assert!(is_conventional("feat(api): add route"));
        assert!(is_conventional("Implement parser"));
        assert!(!is_conventional("wip"));
        assert!(!is_conventional("Merge branch 'main'"));
    }

    #[test]
    fn leading_whitespace_is_not_a_conventional_prefix() {
        assert!(is_conventional("feat: x"));
        assert!(!is_conventional("  feat: x"));
        assert!(!is_conventional("\nfix: y"));
    }

    #[test]
    fn message_quality_only_reads_recent_window() {
        let mut messages = vec!["feat: x"; 16];
        messages.extend(vec!["wip"; 4]);
        messages.extend(vec!["wip"; 30]);
        assert_eq!(message_quality(&commits(&messages)), 80);
        assert_eq!(message_quality(&[]), 0);
    }

    #[test]
    fn active_repository_scores_full_marks() {
        let mut snapshot = Snapshot {
            commits: commits(&vec!["fix: bug"; 60]),
            ..Snapshot::default()
        };
        for branch in ["main", "dev", "feature/x"] {
            snapshot.branches.insert(branch.to_string());
        }

        let dimension = git_hygiene_score(&ScoreInput::new(&snapshot, chrono::Utc::now()));
        assert_eq!(dimension.score, 15);
        assert_eq!(dimension.signals.get("commitQuality"), Some(&Signal::Count(100)));
    }

    #[test]
    fn quiet_single_branch_repository_scores_low() {
        let mut snapshot = Snapshot {
            commits: commits(&["initial", "stuff", "update readme", "more"]),
            ..Snapshot::default()
        };
        snapshot.branches.insert("main".to_string());

        let dimension = git_hygiene_score(&ScoreInput::new(&snapshot, chrono::Utc::now()));
        assert_eq!(dimension.score, 0);
        assert_eq!(dimension.reasons[2], "Single branch (main/master only)");
    }

    #[test]
    fn rule_ceilings_fit_the_cap() {
        let ceiling: Score = RULES.iter().map(Rule::ceiling).sum();
        assert_eq!(ceiling, MAX_SCORE);
    }
}
