use super::paths;
use super::rules::{self, Award, Rule, ScoreInput, Tier};
use crate::types::scoring::{DimensionScore, Score, Signal};

pub const NAME: &str = "Code Quality & Readability";
pub const MAX_SCORE: Score = 25;

const LANGUAGE_TIERS: &[Tier] = &[
    Tier::at_least(3, 5, "Good language diversity"),
    Tier::at_least(2, 3, "Moderate language diversity"),
    Tier::at_least(1, 1, "Limited language diversity"),
];

const ORGANIZATION_TIERS: &[Tier] = &[
    Tier::at_least(2, 8, "Well-organized code structure"),
    Tier::at_least(1, 4, "Basic code organization"),
];

const SIZE_TIERS: &[Tier] = &[
    Tier::between(20, 200, 7, "Appropriate project size"),
    Tier::at_least(10, 4, "Moderate project size"),
    Tier::at_least(5, 2, "Small project size"),
];

pub const RULES: &[Rule] = &[
    Rule {
        signal: "languageCount",
        measure: |input| Signal::from(input.snapshot.languages.len()),
        award: Award::Tiers(LANGUAGE_TIERS),
        miss: Some("No language data detected"),
    },
    Rule {
        signal: "organizationMarkers",
        measure: |input| {
            let snapshot = input.snapshot;
            let markers = usize::from(snapshot.any_path(paths::is_source_root))
                + usize::from(snapshot.any_path(paths::is_config_or_manifest));
            Signal::from(markers)
        },
        award: Award::Tiers(ORGANIZATION_TIERS),
        miss: Some("Lacks clear code organization"),
    },
    Rule {
        signal: "totalFiles",
        measure: |input| Signal::from(input.snapshot.file_count()),
        award: Award::Tiers(SIZE_TIERS),
        miss: Some("Very few files detected"),
    },
    Rule {
        signal: "hasLinter",
        measure: |input| Signal::from(input.snapshot.any_path(paths::is_linter_config)),
        award: Award::Flag {
            points: 5,
            reason: "Code quality tools configured",
        },
        miss: Some("No linting/formatting config detected"),
    },
];

pub fn code_quality_score(input: &ScoreInput<'_>) -> DimensionScore {
    rules::apply(NAME, MAX_SCORE, RULES, input)
}
