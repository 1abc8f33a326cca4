use crate::narrative::simulation::{simulate, Simulation, PROJECTED_ITEMS};
use crate::types::report::{AssessmentReport, RoadmapItem};

fn bullet_list(output: &mut String, items: &[String]) {
    if items.is_empty() {
        output.push_str("- none\n");
    } else {
        for item in items {
            output.push_str(&format!("- {item}\n"));
        }
    }
    output.push('\n');
}

/// Roadmap items followed by the projected score if the top items land.
pub fn roadmap_markdown(roadmap: &[RoadmapItem], simulation: &Simulation) -> String {
    let mut output = String::new();
    output.push_str("## Roadmap\n\n");
    if roadmap.is_empty() {
        output.push_str("- none\n\n");
    }
    for item in roadmap {
        output.push_str(&format!(
            "{}. **{}** (+{})\n   {}\n   - Why: {}\n   - How: {}\n",
            item.priority, item.title, item.estimated_impact, item.description, item.why, item.how
        ));
    }
    if !roadmap.is_empty() {
        output.push('\n');
    }

    output.push_str("## Improvement Simulation\n\n");
    output.push_str(&format!(
        "Completing the top {} items: {} -> {} (+{})\n",
        PROJECTED_ITEMS.min(roadmap.len()),
        simulation.current_score,
        simulation.predicted_score,
        simulation.improvement
    ));
    if simulation.level_upgrade {
        output.push_str(&format!(
            "Level: {} -> {}\n",
            simulation.current_level, simulation.predicted_level
        ));
    } else {
        output.push_str(&format!("Level: {} (unchanged)\n", simulation.current_level));
    }
    output
}

pub fn to_markdown(report: &AssessmentReport) -> String {
    let scoring = &report.scoring;
    let narrative = &report.ai_analysis;
    let mut output = String::new();

    let title = if report.repository.full_name.is_empty() {
        "repository"
    } else {
        report.repository.full_name.as_str()
    };
    output.push_str(&format!("# Assessment: {title}\n\n"));
    output.push_str(&format!(
        "Grade **{}** with {}/{} ({}%)\n\n",
        scoring.grade, scoring.total_score, scoring.max_score, scoring.percentage
    ));

    output.push_str("## Dimensions\n\n");
    output.push_str("| Dimension | Score | % |\n|---|---|---|\n");
    for dimension in &scoring.dimensions {
        output.push_str(&format!(
            "| {} | {}/{} | {} |\n",
            dimension.name, dimension.score, dimension.max_score, dimension.percentage
        ));
    }
    output.push('\n');
    for dimension in &scoring.dimensions {
        output.push_str(&format!("### {}\n\n", dimension.name));
        bullet_list(&mut output, &dimension.reasons);
    }

    output.push_str("## Summary\n\n");
    output.push_str(&format!("{}\n\n", narrative.summary.summary));
    output.push_str("### Strengths\n\n");
    bullet_list(&mut output, &narrative.summary.strengths);
    output.push_str("### Weaknesses\n\n");
    bullet_list(&mut output, &narrative.summary.weaknesses);
    output.push_str(&format!("{}\n\n", narrative.summary.overall_impression));

    let projection = simulate(scoring.percentage, &narrative.roadmap);
    output.push_str(&roadmap_markdown(&narrative.roadmap, &projection));
    output.push('\n');

    let lens = &narrative.recruiter_lens;
    output.push_str("## Recruiter Lens\n\n");
    output.push_str(&format!(
        "Hireability {}/100, level **{}**\n\n{}\n\n",
        lens.hireability_score, lens.level, lens.verdict
    ));
    output.push_str("### Green Flags\n\n");
    bullet_list(&mut output, &lens.green_flags);
    output.push_str("### Red Flags\n\n");
    bullet_list(&mut output, &lens.red_flags);

    output.push_str("## Skills\n\n");
    output.push_str(&format!(
        "- detected: {}\n- missing: {}\n\n",
        joined_or_none(&narrative.skill_map.detected),
        joined_or_none(&narrative.skill_map.missing)
    ));

    output.push_str("## Activity\n\n");
    output.push_str(&format!(
        "Activity score: {}/100 over {} active days\n",
        report.timeline.activity_score,
        report.timeline.commits.len()
    ));
    for day in report.timeline.commits.iter().rev().take(10) {
        output.push_str(&format!("- {}: {}\n", day.date, day.count));
    }
    output.push('\n');

    output.push_str(&format!(
        "_Narrative: {:?}, analyzed {}, engine {}_\n",
        report.metadata.narrative_source,
        report.metadata.analyzed_at.to_rfc3339(),
        report.metadata.analysis_version
    ));
    output
}

fn joined_or_none(items: &[String]) -> String {
    if items.is_empty() {
        "none".to_string()
    } else {
        items.join(", ")
    }
}
