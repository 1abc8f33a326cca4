use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Upper bound on commits a snapshot carries, newest first.
pub const COMMIT_PAGE_SIZE: usize = 100;

/// Frozen repository metadata handed to the engine by a collector.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Snapshot {
    pub repo: RepoInfo,
    pub languages: BTreeMap<String, u64>,
    pub commits: Vec<CommitRecord>,
    pub readme: Option<String>,
    pub structure: Vec<TreeEntry>,
    pub branches: BTreeSet<String>,
    pub workflows: Vec<Workflow>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RepoInfo {
    pub name: String,
    pub full_name: String,
    pub description: Option<String>,
    pub url: Option<String>,
    pub stars: u64,
    pub forks: u64,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub default_branch: String,
    pub has_issues: bool,
    pub has_wiki: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommitRecord {
    #[serde(default)]
    pub sha: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub author_name: String,
    #[serde(default)]
    pub author_email: String,
    pub date: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    File,
    Directory,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeEntry {
    pub path: String,
    pub kind: EntryKind,
}

impl TreeEntry {
    pub fn file(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            kind: EntryKind::File,
        }
    }

    pub fn directory(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            kind: EntryKind::Directory,
        }
    }

    pub fn is_file(&self) -> bool {
        self.kind == EntryKind::File
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Workflow {
    pub name: String,
    pub path: String,
}

impl Snapshot {
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.structure.iter().map(|entry| entry.path.as_str())
    }

    pub fn any_path(&self, predicate: impl Fn(&str) -> bool) -> bool {
        self.paths().any(predicate)
    }

    pub fn count_paths(&self, predicate: impl Fn(&str) -> bool) -> usize {
        self.paths().filter(|path| predicate(path)).count()
    }

    pub fn file_count(&self) -> usize {
        self.structure.iter().filter(|entry| entry.is_file()).count()
    }

    /// An empty README counts as absent.
    pub fn has_readme(&self) -> bool {
        self.readme.as_deref().is_some_and(|text| !text.is_empty())
    }

    pub fn readme_len(&self) -> usize {
        self.readme.as_deref().map_or(0, |text| text.chars().count())
    }

    /// Drops commits beyond the page size; returns how many were removed.
    pub fn truncate_commits(&mut self) -> usize {
        let excess = self.commits.len().saturating_sub(COMMIT_PAGE_SIZE);
        self.commits.truncate(COMMIT_PAGE_SIZE);
        excess
    }
}
