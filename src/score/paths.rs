//! Path predicates shared by the dimension rules and the narrative generator.
//!
//! Matching is case-sensitive substring/prefix matching on the full relative
//! path, except root-file checks which compare lowercase names.

use crate::types::snapshot::Snapshot;

const TEST_MARKERS: &[&str] = &["test", "spec", "__tests__", "__test__"];
const TEST_SUFFIXES: &[&str] = &[
    ".test.js",
    ".test.ts",
    ".spec.js",
    ".spec.ts",
    "_test.py",
    "test_.py",
];
const TEST_CONFIG_MARKERS: &[&str] = &[
    "jest.config",
    "pytest.ini",
    "vitest.config",
    "mocha.opts",
    "test/",
    "tests/",
];
const LINTER_MARKERS: &[&str] = &[
    ".eslintrc",
    ".prettierrc",
    "pyproject.toml",
    "tsconfig.json",
    "rustfmt.toml",
    "clippy.toml",
];
const MANIFEST_FILES: &[&str] = &[
    "package.json",
    "requirements.txt",
    "Pipfile",
    "Cargo.toml",
    "go.mod",
    "pom.xml",
];

fn contains_any(path: &str, markers: &[&str]) -> bool {
    markers.iter().any(|marker| path.contains(marker))
}

pub fn is_test_path(path: &str) -> bool {
    contains_any(path, TEST_MARKERS) || TEST_SUFFIXES.iter().any(|suffix| path.ends_with(suffix))
}

pub fn is_test_config(path: &str) -> bool {
    contains_any(path, TEST_CONFIG_MARKERS)
}

pub fn is_source_root(path: &str) -> bool {
    path.starts_with("src/") || path.starts_with("lib/")
}

pub fn is_config_or_manifest(path: &str) -> bool {
    contains_any(path, &["config", "package.json", "requirements.txt"])
}

pub fn is_root_manifest(path: &str) -> bool {
    MANIFEST_FILES.contains(&path)
}

pub fn is_linter_config(path: &str) -> bool {
    contains_any(path, LINTER_MARKERS)
}

pub fn is_container_file(path: &str) -> bool {
    contains_any(path, &["Dockerfile", "docker-compose"])
}

pub fn is_env_example(path: &str) -> bool {
    path.contains(".env.example")
}

pub fn is_docs_dir(path: &str) -> bool {
    contains_any(path, &["docs/", "documentation/"])
}

pub fn is_license(path: &str) -> bool {
    matches!(
        path.to_lowercase().as_str(),
        "license" | "license.txt" | "license.md"
    )
}

pub fn is_gitignore(path: &str) -> bool {
    path.to_lowercase() == ".gitignore"
}

pub fn mentions_contributing(path: &str) -> bool {
    path.to_lowercase().contains("contributing")
}

pub fn is_changelog(path: &str) -> bool {
    let lower = path.to_lowercase();
    lower.contains("changelog") || lower.contains("history")
}

pub fn is_example(path: &str) -> bool {
    contains_any(path, &["example", "demo"])
}

pub fn is_env_or_config(path: &str) -> bool {
    contains_any(path, &[".env.example", "config"])
}

pub fn is_deploy_path(path: &str) -> bool {
    contains_any(path, &["deploy", "scripts"])
}

pub fn is_api_path(path: &str) -> bool {
    contains_any(path, &["api/", "routes/", "endpoints/"])
}

pub fn is_data_path(path: &str) -> bool {
    contains_any(path, &["db/", "database/", "models/", "schema"])
}

pub fn is_auth_path(path: &str) -> bool {
    contains_any(path, &["auth/", "login", "jwt", "oauth"])
}

pub fn test_file_count(snapshot: &Snapshot) -> usize {
    snapshot.count_paths(is_test_path)
}

pub fn has_container_file(snapshot: &Snapshot) -> bool {
    snapshot.any_path(is_container_file)
}
