use super::paths;
use super::rules::{self, Award, Bucket, Rule, ScoreInput};
use crate::types::scoring::{DimensionScore, Score, Signal};
use chrono::Duration;

pub const NAME: &str = "Real-World Applicability";
pub const MAX_SCORE: Score = 15;

pub const ACTIVE_WINDOW_DAYS: i64 = 90;

// Bonus ceilings sum past the cap; the total is clamped.
pub const RULES: &[Rule] = &[
    // maturity
    Rule {
        signal: "stars",
        measure: |input| Signal::from(input.snapshot.repo.stars),
        award: Award::Flag {
            points: 1,
            reason: "Starred by other developers",
        },
        miss: None,
    },
    Rule {
        signal: "forks",
        measure: |input| Signal::from(input.snapshot.repo.forks),
        award: Award::Flag {
            points: 1,
            reason: "Forked by other developers",
        },
        miss: None,
    },
    Rule {
        signal: "hasIssues",
        measure: |input| Signal::from(input.snapshot.repo.has_issues),
        award: Award::Flag {
            points: 1,
            reason: "Issue tracker enabled",
        },
        miss: None,
    },
    Rule {
        signal: "isActive",
        measure: |input| Signal::from(recently_updated(input)),
        award: Award::Flag {
            points: 2,
            reason: "Updated within the last 90 days",
        },
        miss: None,
    },
    // production readiness
    Rule {
        signal: "hasDocker",
        measure: |input| Signal::from(paths::has_container_file(input.snapshot)),
        award: Award::Flag {
            points: 2,
            reason: "Containerized deployment",
        },
        miss: None,
    },
    Rule {
        signal: "hasCI",
        measure: |input| Signal::from(!input.snapshot.workflows.is_empty()),
        award: Award::Flag {
            points: 2,
            reason: "Continuous integration configured",
        },
        miss: None,
    },
    Rule {
        signal: "hasEnvConfig",
        measure: |input| Signal::from(input.snapshot.any_path(paths::is_env_or_config)),
        award: Award::Flag {
            points: 1,
            reason: "Environment configuration present",
        },
        miss: None,
    },
    Rule {
        signal: "hasDeployScripts",
        measure: |input| Signal::from(input.snapshot.any_path(paths::is_deploy_path)),
        award: Award::Flag {
            points: 1,
            reason: "Deployment scripts present",
        },
        miss: None,
    },
    // application features
    Rule {
        signal: "hasAPI",
        measure: |input| Signal::from(input.snapshot.any_path(paths::is_api_path)),
        award: Award::Flag {
            points: 2,
            reason: "Exposes an API layer",
        },
        miss: None,
    },
    Rule {
        signal: "hasDatabase",
        measure: |input| Signal::from(input.snapshot.any_path(paths::is_data_path)),
        award: Award::Flag {
            points: 2,
            reason: "Data persistence layer",
        },
        miss: None,
    },
    Rule {
        signal: "hasAuth",
        measure: |input| Signal::from(input.snapshot.any_path(paths::is_auth_path)),
        award: Award::Flag {
            points: 1,
            reason: "Authentication handling",
        },
        miss: None,
    },
];

const MATURITY_TIERS: &[(Score, &str)] = &[
    (4, "Active and engaged project"),
    (2, "Moderate project engagement"),
];

const PRODUCTION_TIERS: &[(Score, &str)] = &[
    (4, "Production-ready infrastructure"),
    (2, "Some production considerations"),
];

const FEATURE_TIERS: &[(Score, &str)] = &[
    (4, "Real-world application features"),
    (2, "Some real-world features"),
];

pub const BUCKETS: &[Bucket] = &[
    Bucket {
        members: &["stars", "forks", "hasIssues", "isActive"],
        tiers: MATURITY_TIERS,
        miss: "Limited project engagement",
    },
    Bucket {
        members: &["hasDocker", "hasCI", "hasEnvConfig", "hasDeployScripts"],
        tiers: PRODUCTION_TIERS,
        miss: "Missing production infrastructure",
    },
    Bucket {
        members: &["hasAPI", "hasDatabase", "hasAuth"],
        tiers: FEATURE_TIERS,
        miss: "Limited real-world features",
    },
];

fn recently_updated(input: &ScoreInput<'_>) -> bool {
    input
        .snapshot
        .repo
        .updated_at
        .is_some_and(|updated| updated > input.now - Duration::days(ACTIVE_WINDOW_DAYS))
}

pub fn applicability_score(input: &ScoreInput<'_>) -> DimensionScore {
    rules::apply_grouped(NAME, MAX_SCORE, RULES, BUCKETS, input)
}
