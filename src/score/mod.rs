pub mod applicability;
pub mod code_quality;
pub mod documentation;
pub mod git_hygiene;
pub mod paths;
pub mod rules;
pub mod structure;
pub mod testing;

use crate::types::scoring::{rounded_percentage, DimensionScore, Grade, ScoringResult};
use crate::types::snapshot::Snapshot;
use chrono::{DateTime, Utc};
use rules::ScoreInput;

pub fn score_snapshot(snapshot: &Snapshot, now: DateTime<Utc>) -> ScoringResult {
    let input = ScoreInput::new(snapshot, now);
    let dimensions = vec![
        code_quality::code_quality_score(&input),
        structure::structure_score(&input),
        documentation::documentation_score(&input),
        testing::testing_score(&input),
        git_hygiene::git_hygiene_score(&input),
        applicability::applicability_score(&input),
    ];
    aggregate(dimensions)
}

pub fn aggregate(dimensions: Vec<DimensionScore>) -> ScoringResult {
    let total_score = dimensions.iter().map(|dimension| dimension.score).sum();
    let max_score = dimensions.iter().map(|dimension| dimension.max_score).sum();
    let percentage = rounded_percentage(total_score, max_score);
    ScoringResult {
        dimensions,
        total_score,
        max_score,
        percentage,
        grade: Grade::from_percentage(percentage),
    }
}
