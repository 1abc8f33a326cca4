pub mod filesystem;
pub mod git_meta;

use crate::error::{GradeError, Result};
use crate::types::snapshot::{RepoInfo, Snapshot};
use std::path::Path;
use tracing::{debug, warn};

fn or_warn<T: Default>(step: &str, result: Result<T>) -> T {
    result.unwrap_or_else(|e| {
        warn!(step, error = %e, "git metadata unavailable");
        T::default()
    })
}

/// Builds a snapshot from a local checkout.
pub fn collect(root: &Path) -> Result<Snapshot> {
    if !root.exists() {
        return Err(GradeError::PathNotFound(root.display().to_string()));
    }
    if !root.join(".git").exists() {
        return Err(GradeError::NotGitRepo(root.display().to_string()));
    }

    let structure = filesystem::walk_tree(root);
    let languages = filesystem::language_bytes(root, &structure);
    let readme = filesystem::read_readme(root);
    let workflows = filesystem::read_workflows(root);
    debug!(
        entries = structure.len(),
        workflows = workflows.len(),
        "scanned working tree"
    );

    let commits = or_warn("log", git_meta::recent_commits(root));
    let branches = or_warn("branches", git_meta::local_branches(root));
    let default_branch = or_warn("head", git_meta::head_branch(root));
    let created_at = or_warn("root commit", git_meta::first_commit_date(root));
    debug!(
        commits = commits.len(),
        branches = branches.len(),
        "read git history"
    );

    let name = root
        .canonicalize()
        .ok()
        .and_then(|path| path.file_name().map(|name| name.to_string_lossy().into_owned()))
        .unwrap_or_else(|| root.display().to_string());
    let remote = git_meta::origin_url(root).ok();
    let full_name = remote
        .as_deref()
        .and_then(git_meta::full_name_from_remote)
        .unwrap_or_else(|| name.clone());

    Ok(Snapshot {
        repo: RepoInfo {
            name,
            full_name,
            description: None,
            url: remote,
            stars: 0,
            forks: 0,
            created_at,
            updated_at: commits.first().map(|commit| commit.date),
            default_branch,
            has_issues: false,
            has_wiki: false,
        },
        languages,
        commits,
        readme,
        structure,
        branches: branches.into_iter().collect(),
        workflows,
    })
}

/// Reads a snapshot JSON file, keeping at most one page of commits.
pub fn load_snapshot(path: &Path) -> Result<Snapshot> {
    if !path.exists() {
        return Err(GradeError::PathNotFound(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path)?;
    let mut snapshot: Snapshot = serde_json::from_str(&content)
        .map_err(|e| GradeError::InvalidSnapshot(format!("{}: {e}", path.display())))?;

    let dropped = snapshot.truncate_commits();
    if dropped > 0 {
        warn!(dropped, "snapshot carries more commits than one page, keeping the newest");
    }
    debug!(path = %path.display(), commits = snapshot.commits.len(), "loaded snapshot");
    Ok(snapshot)
}
