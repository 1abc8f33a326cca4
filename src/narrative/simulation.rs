use crate::types::report::RoadmapItem;
use serde::Serialize;

/// Roadmap items assumed to be completed in a projection.
pub const PROJECTED_ITEMS: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Simulation {
    pub current_score: u32,
    pub predicted_score: u32,
    pub improvement: u32,
    pub current_level: &'static str,
    pub predicted_level: &'static str,
    pub level_upgrade: bool,
}

fn ladder_level(score: u32) -> &'static str {
    match score {
        80.. => "Mid-Level",
        60..=79 => "Junior",
        40..=59 => "Intern",
        _ => "Beginner",
    }
}

/// Projects the score after the top roadmap items are done.
pub fn simulate(current_score: u32, roadmap: &[RoadmapItem]) -> Simulation {
    let gain: u32 = roadmap
        .iter()
        .take(PROJECTED_ITEMS)
        .map(|item| item.estimated_impact)
        .fold(0, u32::saturating_add);
    let predicted_score = current_score.saturating_add(gain).min(100);
    let current_level = ladder_level(current_score);
    let predicted_level = ladder_level(predicted_score);
    Simulation {
        current_score,
        predicted_score,
        improvement: predicted_score.saturating_sub(current_score),
        current_level,
        predicted_level,
        level_upgrade: current_level != predicted_level,
    }
}
