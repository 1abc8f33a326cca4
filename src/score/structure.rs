use super::paths;
use super::rules::{self, Award, Bucket, Rule, ScoreInput};
use crate::types::scoring::{DimensionScore, Score, Signal};

pub const NAME: &str = "Project Structure & Organization";
pub const MAX_SCORE: Score = 15;

pub const RULES: &[Rule] = &[
    // root files
    Rule {
        signal: "hasReadme",
        measure: |input| Signal::from(input.snapshot.has_readme()),
        award: Award::Flag {
            points: 2,
            reason: "README at the repository root",
        },
        miss: Some("Missing README at the repository root"),
    },
    Rule {
        signal: "hasLicense",
        measure: |input| Signal::from(input.snapshot.any_path(paths::is_license)),
        award: Award::Flag {
            points: 1,
            reason: "License file present",
        },
        miss: None,
    },
    Rule {
        signal: "hasGitignore",
        measure: |input| Signal::from(input.snapshot.any_path(paths::is_gitignore)),
        award: Award::Flag {
            points: 1,
            reason: ".gitignore present",
        },
        miss: None,
    },
    Rule {
        signal: "hasContributing",
        measure: |input| Signal::from(input.snapshot.any_path(paths::mentions_contributing)),
        award: Award::Flag {
            points: 1,
            reason: "Contribution guide present",
        },
        miss: None,
    },
    // directories
    Rule {
        signal: "hasSrc",
        measure: |input| Signal::from(input.snapshot.any_path(paths::is_source_root)),
        award: Award::Flag {
            points: 2,
            reason: "Dedicated source directory",
        },
        miss: None,
    },
    Rule {
        signal: "hasTests",
        measure: |input| Signal::from(input.snapshot.any_path(paths::is_test_path)),
        award: Award::Flag {
            points: 2,
            reason: "Test directory or files present",
        },
        miss: None,
    },
    Rule {
        signal: "hasDocs",
        measure: |input| Signal::from(input.snapshot.any_path(paths::is_docs_dir)),
        award: Award::Flag {
            points: 1,
            reason: "Documentation directory present",
        },
        miss: None,
    },
    // configuration
    Rule {
        signal: "hasManifest",
        measure: |input| Signal::from(input.snapshot.any_path(paths::is_root_manifest)),
        award: Award::Flag {
            points: 2,
            reason: "Dependency manifest at the root",
        },
        miss: None,
    },
    Rule {
        signal: "hasDocker",
        measure: |input| Signal::from(paths::has_container_file(input.snapshot)),
        award: Award::Flag {
            points: 2,
            reason: "Container definition present",
        },
        miss: None,
    },
    Rule {
        signal: "hasEnvExample",
        measure: |input| Signal::from(input.snapshot.any_path(paths::is_env_example)),
        award: Award::Flag {
            points: 1,
            reason: "Environment example provided",
        },
        miss: None,
    },
];

const ROOT_TIERS: &[(Score, &str)] = &[
    (4, "Excellent root-level organization"),
    (2, "Basic root-level organization"),
];

const DIRECTORY_TIERS: &[(Score, &str)] = &[
    (4, "Well-structured directories"),
    (2, "Basic directory structure"),
];

const CONFIGURATION_TIERS: &[(Score, &str)] = &[
    (4, "Good configuration management"),
    (2, "Basic configuration files"),
];

pub const BUCKETS: &[Bucket] = &[
    Bucket {
        members: &["hasReadme", "hasLicense", "hasGitignore", "hasContributing"],
        tiers: ROOT_TIERS,
        miss: "Missing standard repository files",
    },
    Bucket {
        members: &["hasSrc", "hasTests", "hasDocs"],
        tiers: DIRECTORY_TIERS,
        miss: "Flat or unstructured directory layout",
    },
    Bucket {
        members: &["hasManifest", "hasDocker", "hasEnvExample"],
        tiers: CONFIGURATION_TIERS,
        miss: "Missing configuration files",
    },
];

pub fn structure_score(input: &ScoreInput<'_>) -> DimensionScore {
    rules::apply_grouped(NAME, MAX_SCORE, RULES, BUCKETS, input)
}
