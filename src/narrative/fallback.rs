use crate::score::paths;
use crate::types::report::{
    HireLevel, NarrativeReport, RecruiterLens, RoadmapItem, SkillMap, Summary,
};
use crate::types::scoring::ScoringResult;
use crate::types::snapshot::Snapshot;

/// README shorter than this earns an "Enhance README" roadmap item.
pub const README_TARGET_CHARS: usize = 500;

const LANGUAGE_SKILLS: &[(&[&str], &str)] = &[
    (&["JavaScript", "TypeScript"], "JavaScript/TypeScript"),
    (&["Python"], "Python"),
    (&["Java"], "Java"),
    (&["Rust"], "Rust"),
    (&["Go"], "Go"),
];

const PATH_SKILLS: &[(&str, &str)] = &[
    ("api/", "REST APIs"),
    ("react", "React"),
    ("database", "Database Design"),
];

/// Everything the rules below look at, computed once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Facts {
    pub percentage: u32,
    pub has_readme: bool,
    pub readme_len: usize,
    pub commit_count: usize,
    pub test_files: usize,
    pub has_workflows: bool,
    pub has_container: bool,
}

impl Facts {
    pub fn gather(snapshot: &Snapshot, scoring: &ScoringResult) -> Self {
        Self {
            percentage: scoring.percentage,
            has_readme: snapshot.has_readme(),
            readme_len: snapshot.readme_len(),
            commit_count: snapshot.commits.len(),
            test_files: paths::test_file_count(snapshot),
            has_workflows: !snapshot.workflows.is_empty(),
            has_container: paths::has_container_file(snapshot),
        }
    }
}

pub fn hire_level(facts: &Facts) -> HireLevel {
    if facts.percentage >= 80 && facts.test_files > 0 && facts.has_workflows {
        HireLevel::MidLevel
    } else if facts.percentage >= 60 && facts.has_readme && facts.commit_count >= 10 {
        HireLevel::Junior
    } else if facts.percentage >= 40 {
        HireLevel::Intern
    } else {
        HireLevel::NotReady
    }
}

/// Builds a complete report from the snapshot and its score; never fails.
pub fn fallback_report(snapshot: &Snapshot, scoring: &ScoringResult) -> NarrativeReport {
    let facts = Facts::gather(snapshot, scoring);

    let mut strengths = Vec::new();
    let mut weaknesses = Vec::new();
    let mut green_flags = Vec::new();
    let mut red_flags = Vec::new();
    let mut detected = Vec::new();
    let mut missing = Vec::new();

    if facts.percentage >= 70 {
        strengths.push("Solid foundational structure".to_string());
    }
    if facts.has_readme {
        strengths.push("Documentation present".to_string());
        green_flags.push("Has README".to_string());
    }
    if facts.commit_count >= 20 {
        strengths.push("Active development history".to_string());
        green_flags.push("Consistent commit history".to_string());
    }
    if facts.has_workflows {
        strengths.push("CI/CD pipeline configured".to_string());
        green_flags.push("Automated workflows".to_string());
        detected.push("CI/CD".to_string());
    }

    if facts.test_files == 0 {
        weaknesses.push("No test files detected".to_string());
        red_flags.push("Missing tests".to_string());
        missing.push("Testing".to_string());
    }
    if !facts.has_readme {
        weaknesses.push("No README file".to_string());
        red_flags.push("Missing documentation".to_string());
    }
    if facts.commit_count < 10 {
        weaknesses.push("Limited commit history".to_string());
        red_flags.push("Insufficient git activity".to_string());
    }

    for (languages, skill) in LANGUAGE_SKILLS {
        if languages
            .iter()
            .any(|language| snapshot.languages.contains_key(*language))
        {
            detected.push(skill.to_string());
        }
    }
    for (marker, skill) in PATH_SKILLS {
        if snapshot.any_path(|path| path.contains(*marker)) {
            detected.push(skill.to_string());
        }
    }

    if !facts.has_workflows {
        missing.push("CI/CD".to_string());
    }
    if !facts.has_container {
        missing.push("Containerization".to_string());
    }

    let roadmap = roadmap(&facts);
    let level = hire_level(&facts);

    NarrativeReport {
        summary: Summary {
            summary: summary_text(&facts, &strengths, &weaknesses),
            overall_impression: format!(
                "Overall grade: {} ({}/100). {}.",
                scoring.grade,
                facts.percentage,
                if facts.percentage >= 70 {
                    "Ready for professional development"
                } else {
                    "Needs improvement in key areas"
                }
            ),
            strengths,
            weaknesses,
        },
        roadmap,
        recruiter_lens: RecruiterLens {
            hireability_score: facts.percentage,
            level,
            verdict: verdict_text(facts.percentage, level),
            red_flags,
            green_flags,
        },
        skill_map: SkillMap { detected, missing },
    }
}

fn quality_band(percentage: u32) -> usize {
    match percentage {
        70.. => 2,
        50..=69 => 1,
        _ => 0,
    }
}

fn summary_text(facts: &Facts, strengths: &[String], weaknesses: &[String]) -> String {
    let opening = [
        "needs significant improvement",
        "shows developing capabilities",
        "demonstrates solid foundational skills",
    ][quality_band(facts.percentage)];
    let strength = strengths
        .first()
        .map(|strength| strength.to_lowercase())
        .unwrap_or_else(|| "basic structure".to_string());
    let weakness = weaknesses
        .first()
        .map(|weakness| weakness.to_lowercase())
        .unwrap_or_else(|| "lacks professional polish".to_string());
    format!("This repository {opening} with {strength}, but {weakness}.")
}

fn verdict_text(percentage: u32, level: HireLevel) -> String {
    let skills = ["basic", "developing", "solid"][quality_band(percentage)];
    let outlook = match level {
        HireLevel::NotReady => "Needs significant improvement before job readiness.".to_string(),
        other => format!("Suitable for {other} positions."),
    };
    format!("This repository shows {skills} skills. {outlook}")
}

fn roadmap(facts: &Facts) -> Vec<RoadmapItem> {
    let mut items: Vec<(&str, &str, &str, &str, u32)> = Vec::new();

    if facts.test_files == 0 {
        items.push((
            "Add Unit Tests",
            "Implement comprehensive test coverage for core functionality",
            "Tests improve reliability and demonstrate professional development practices",
            "Pick the standard test framework for your language and cover the main functions and API endpoints",
            20,
        ));
    }
    if !facts.has_readme || facts.readme_len < README_TARGET_CHARS {
        items.push((
            "Enhance README",
            "Create a comprehensive README with setup instructions, features, and usage examples",
            "A good README is the first thing recruiters and collaborators see",
            "Include the project description, installation steps, usage examples, tech stack, and contribution guidelines",
            15,
        ));
    }
    if !facts.has_workflows {
        items.push((
            "Set Up CI/CD",
            "Configure GitHub Actions for automated testing and deployment",
            "CI/CD shows production-ready mindset and automation skills",
            "Create .github/workflows/ci.yml with test and build steps",
            15,
        ));
    }
    if facts.commit_count < 20 {
        items.push((
            "Improve Commit History",
            "Make more frequent, meaningful commits with clear messages",
            "Good commit history shows consistent development and collaboration skills",
            "Follow the conventional commit format with \"feat:\", \"fix:\", \"docs:\" prefixes",
            10,
        ));
    }
    items.push((
        "Add Code Quality Tools",
        "Configure linters and formatters for the project's languages",
        "Code quality tools ensure consistency and catch errors early",
        "Install and configure linting/formatting tools for your language and run them in CI",
        10,
    ));

    items
        .into_iter()
        .zip(1..)
        .map(
            |((title, description, why, how, estimated_impact), priority)| RoadmapItem {
                priority,
                title: title.to_string(),
                description: description.to_string(),
                why: why.to_string(),
                how: how.to_string(),
                estimated_impact,
            },
        )
        .collect()
}
