use super::paths;
use super::rules::{self, Award, Bucket, Rule, ScoreInput, Tier};
use crate::types::scoring::{DimensionScore, Score, Signal};

pub const NAME: &str = "Documentation Quality";
pub const MAX_SCORE: Score = 15;

const README_TIERS: &[Tier] = &[
    Tier::at_least(1001, 8, "Comprehensive README"),
    Tier::at_least(501, 5, "Moderate README content"),
    Tier::at_least(101, 3, "Basic README present"),
    Tier::at_least(1, 1, "Minimal README content"),
];

pub const RULES: &[Rule] = &[
    Rule {
        signal: "readmeLength",
        measure: |input| Signal::from(input.snapshot.readme_len()),
        award: Award::Tiers(README_TIERS),
        miss: Some("No README file found"),
    },
    Rule {
        signal: "hasDocs",
        measure: |input| Signal::from(input.snapshot.any_path(paths::is_docs_dir)),
        award: Award::Flag {
            points: 2,
            reason: "Dedicated documentation directory",
        },
        miss: None,
    },
    Rule {
        signal: "hasContributing",
        measure: |input| Signal::from(input.snapshot.any_path(paths::mentions_contributing)),
        award: Award::Flag {
            points: 1,
            reason: "Contribution guidelines documented",
        },
        miss: None,
    },
    Rule {
        signal: "hasChangelog",
        measure: |input| Signal::from(input.snapshot.any_path(paths::is_changelog)),
        award: Award::Flag {
            points: 1,
            reason: "Changelog maintained",
        },
        miss: None,
    },
    Rule {
        signal: "hasExamples",
        measure: |input| Signal::from(input.snapshot.any_path(paths::is_example)),
        award: Award::Flag {
            points: 3,
            reason: "Code examples or demos present",
        },
        miss: Some("No code examples detected"),
    },
];

const EXTRA_DOC_TIERS: &[(Score, &str)] = &[
    (3, "Additional documentation present"),
    (1, "Some additional documentation"),
];

pub const BUCKETS: &[Bucket] = &[Bucket {
    members: &["hasDocs", "hasContributing", "hasChangelog"],
    tiers: EXTRA_DOC_TIERS,
    miss: "No additional documentation",
}];

pub fn documentation_score(input: &ScoreInput<'_>) -> DimensionScore {
    rules::apply_grouped(NAME, MAX_SCORE, RULES, BUCKETS, input)
}
