use super::paths;
use super::rules::{self, Award, Rule, ScoreInput, Tier};
use crate::types::scoring::{DimensionScore, Score, Signal};

pub const NAME: &str = "Testing & Maintainability";
pub const MAX_SCORE: Score = 15;

const TEST_FILE_TIERS: &[Tier] = &[
    Tier::at_least(10, 8, "Comprehensive test coverage"),
    Tier::at_least(5, 5, "Moderate test coverage"),
    Tier::at_least(2, 3, "Basic test files present"),
    Tier::at_least(1, 1, "Minimal test files"),
];

pub const RULES: &[Rule] = &[
    Rule {
        signal: "testFileCount",
        measure: |input| Signal::from(paths::test_file_count(input.snapshot)),
        award: Award::Tiers(TEST_FILE_TIERS),
        miss: Some("No test files detected"),
    },
    Rule {
        signal: "hasTestConfig",
        measure: |input| Signal::from(input.snapshot.any_path(paths::is_test_config)),
        award: Award::Flag {
            points: 4,
            reason: "Test framework configured",
        },
        miss: Some("No test configuration detected"),
    },
    Rule {
        signal: "hasTestWorkflow",
        measure: |input| {
            let has_test_workflow = input.snapshot.workflows.iter().any(|workflow| {
                workflow.name.to_lowercase().contains("test") || workflow.path.contains("test")
            });
            Signal::from(has_test_workflow)
        },
        award: Award::Flag {
            points: 3,
            reason: "Automated testing in CI/CD",
        },
        miss: Some("No automated testing pipeline"),
    },
];

pub fn testing_score(input: &ScoreInput<'_>) -> DimensionScore {
    rules::apply(NAME, MAX_SCORE, RULES, input)
}
