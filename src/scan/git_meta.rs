use crate::error::{GradeError, Result};
use crate::types::snapshot::{CommitRecord, COMMIT_PAGE_SIZE};
use chrono::{DateTime, Utc};
use std::path::Path;
use std::process::Command;

const FIELD_SEPARATOR: char = '\u{1f}';
const LOG_FORMAT: &str = "--format=%H%x1f%an%x1f%ae%x1f%aI%x1f%s";

fn git(root: &Path, args: &[&str]) -> Result<String> {
    let output = Command::new("git").arg("-C").arg(root).args(args).output()?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(GradeError::Git(format!(
            "git {}: {}",
            args.join(" "),
            stderr.trim()
        )));
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

fn parse_date(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw.trim())
        .ok()
        .map(|date| date.with_timezone(&Utc))
}

fn parse_commit(line: &str) -> Option<CommitRecord> {
    let mut fields = line.splitn(5, FIELD_SEPARATOR);
    let sha = fields.next()?.to_string();
    let author_name = fields.next()?.to_string();
    let author_email = fields.next()?.to_string();
    let date = parse_date(fields.next()?)?;
    let message = fields.next().unwrap_or_default().to_string();
    Some(CommitRecord {
        sha,
        message,
        author_name,
        author_email,
        date,
    })
}

/// Newest commits first, at most one page.
pub fn recent_commits(root: &Path) -> Result<Vec<CommitRecord>> {
    let limit = COMMIT_PAGE_SIZE.to_string();
    let stdout = git(root, &["log", "-n", &limit, LOG_FORMAT])?;
    Ok(stdout.lines().filter_map(parse_commit).collect())
}

pub fn local_branches(root: &Path) -> Result<Vec<String>> {
    let stdout = git(
        root,
        &["for-each-ref", "--format=%(refname:short)", "refs/heads"],
    )?;
    Ok(stdout
        .lines()
        .map(str::trim)
        .filter(|branch| !branch.is_empty())
        .map(str::to_string)
        .collect())
}

pub fn head_branch(root: &Path) -> Result<String> {
    Ok(git(root, &["symbolic-ref", "--short", "HEAD"])?.trim().to_string())
}

/// Author date of the oldest root commit.
pub fn first_commit_date(root: &Path) -> Result<Option<DateTime<Utc>>> {
    let stdout = git(root, &["log", "--max-parents=0", "--format=%aI"])?;
    Ok(stdout.lines().filter_map(parse_date).min())
}

pub fn origin_url(root: &Path) -> Result<String> {
    Ok(git(root, &["remote", "get-url", "origin"])?.trim().to_string())
}

/// `owner/name` from an https or scp-style remote URL.
pub fn full_name_from_remote(url: &str) -> Option<String> {
    let trimmed = url.trim().trim_end_matches('/');
    let trimmed = trimmed.strip_suffix(".git").unwrap_or(trimmed);
    let mut segments = trimmed
        .rsplit(|c| c == '/' || c == ':')
        .filter(|segment| !segment.is_empty());
    let name = segments.next()?;
    let owner = segments.next()?;
    if owner.contains('@') || owner.contains('.') {
        return None;
    }
    Some(format!("{owner}/{name}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn run_git(root: &Path, args: &[&str]) {
        let output = Command::new("git")
            .arg("-C")
            .arg(root)
            .args(["-c", "user.name=Dev", "-c", "user.email=dev@example.com"])
            .args(args)
            .output()
            .expect("git should run");
        assert!(output.status.success(), "git {:?} should succeed", args);
    }

    #[test]
    fn parse_commit_reads_unit_separated_fields() {
        let line = "abc123\u{1f}Ada\u{1f}ada@example.com\u{1f}2024-05-01T10:00:00+02:00\u{1f}feat: add parser";
        let commit = parse_commit(line).expect("commit should parse");
        assert_eq!(commit.sha, "abc123");
        assert_eq!(commit.author_name, "Ada");
        assert_eq!(commit.message, "feat: add parser");
        assert_eq!(commit.date.to_rfc3339(), "2024-05-01T08:00:00+00:00");
        assert!(parse_commit("garbage").is_none());
    }

    #[test]
    fn remote_urls_yield_owner_and_name() {
        assert_eq!(
            full_name_from_remote("https://github.com/octo/widget.git").as_deref(),
            Some("octo/widget")
        );
        assert_eq!(
            full_name_from_remote("git@github.com:octo/widget.git").as_deref(),
            Some("octo/widget")
        );
        assert_eq!(
            full_name_from_remote("ssh://git@example.com/team/tool/").as_deref(),
            Some("team/tool")
        );
        assert_eq!(full_name_from_remote("widget"), None);
    }

    #[test]
    fn reads_history_from_real_repository() {
        let dir = TempDir::new().expect("temp dir should be created");
        run_git(dir.path(), &["init", "-b", "main"]);
        fs::write(dir.path().join("a.txt"), "a").expect("file should write");
        run_git(dir.path(), &["add", "."]);
        run_git(dir.path(), &["commit", "-m", "feat: first"]);
        fs::write(dir.path().join("b.txt"), "b").expect("file should write");
        run_git(dir.path(), &["add", "."]);
        run_git(dir.path(), &["commit", "-m", "fix: second"]);
        run_git(dir.path(), &["branch", "dev"]);

        let commits = recent_commits(dir.path()).expect("log should succeed");
        assert_eq!(commits.len(), 2);
        assert_eq!(commits[0].message, "fix: second");
        assert_eq!(commits[1].author_email, "dev@example.com");

        let branches = local_branches(dir.path()).expect("branches should list");
        assert_eq!(branches, vec!["dev".to_string(), "main".to_string()]);
        assert_eq!(head_branch(dir.path()).expect("head should resolve"), "main");
        assert!(first_commit_date(dir.path())
            .expect("root commit should resolve")
            .is_some());
        assert!(origin_url(dir.path()).is_err());
    }

    #[test]
    fn git_failure_is_reported_as_error() {
        let dir = TempDir::new().expect("temp dir should be created");
        let result = recent_commits(dir.path());
        assert!(matches!(result, Err(GradeError::Git(_))));
    }
}
