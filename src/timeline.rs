//! Commit-activity timeline and the single activity score.
//!
//! The blend is scaled by 10 before clamping, so the frequency term dominates
//! for anything committing more than about once every ten days. Keep it that
//! way: published scores depend on it.

use crate::types::report::{DayCount, Timeline};
use crate::types::snapshot::CommitRecord;
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use tracing::debug;

const SECONDS_PER_DAY: f64 = 86_400.0;
const RECENCY_WINDOW_DAYS: f64 = 30.0;
const ACTIVITY_SCALE: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActivityMetrics {
    pub frequency: f64,
    pub recency: f64,
    pub consistency: f64,
    pub activity_score: u32,
}

pub fn build_timeline(commits: &[CommitRecord], now: DateTime<Utc>) -> Timeline {
    let days = commits_per_day(commits);
    let metrics = activity_metrics(commits, days.len(), now);
    debug!(
        frequency = metrics.frequency,
        recency = metrics.recency,
        consistency = metrics.consistency,
        activity_score = metrics.activity_score,
        "activity metrics"
    );
    Timeline {
        commits: days,
        activity_score: metrics.activity_score,
    }
}

fn commits_per_day(commits: &[CommitRecord]) -> Vec<DayCount> {
    let mut per_day: BTreeMap<String, u32> = BTreeMap::new();
    for commit in commits {
        let day = commit.date.date_naive().format("%Y-%m-%d").to_string();
        *per_day.entry(day).or_insert(0) += 1;
    }
    per_day
        .into_iter()
        .map(|(date, count)| DayCount { date, count })
        .collect()
}

fn days_between(earlier: DateTime<Utc>, later: DateTime<Utc>) -> f64 {
    (later - earlier).num_milliseconds() as f64 / 1000.0 / SECONDS_PER_DAY
}

pub fn activity_metrics(
    commits: &[CommitRecord],
    active_days: usize,
    now: DateTime<Utc>,
) -> ActivityMetrics {
    let first = commits.iter().map(|commit| commit.date).min();
    let last = commits.iter().map(|commit| commit.date).max();
    let (days_since_first, days_since_last) = match (first, last) {
        (Some(first), Some(last)) => (days_between(first, now), days_between(last, now)),
        _ => (0.0, 0.0),
    };

    let span = days_since_first.max(1.0);
    let frequency = commits.len() as f64 / span;
    let recency = (100.0 - (days_since_last / RECENCY_WINDOW_DAYS) * 100.0).max(0.0);
    let consistency = if active_days > 0 {
        (active_days as f64 / span * 100.0).min(100.0)
    } else {
        0.0
    };

    let blended = (frequency * 0.4 + recency * 0.3 + consistency * 0.3) * ACTIVITY_SCALE;
    let activity_score = if commits.is_empty() {
        0
    } else {
        blended.round().clamp(0.0, 100.0) as u32
    };

    ActivityMetrics {
        frequency,
        recency,
        consistency,
        activity_score,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn now() -> DateTime<Utc> {
        "2024-06-01T12:00:00Z".parse().expect("date should parse")
    }

    fn commit_at(date: DateTime<Utc>) -> CommitRecord {
        CommitRecord {
            sha: String::new(),
            message: "feat: x".to_string(),
            author_name: String::new(),
            author_email: String::new(),
            date,
        }
    }

    #[test]
    fn no_commits_yield_empty_timeline() {
        let timeline = build_timeline(&[], now());
        assert!(timeline.commits.is_empty());
        assert_eq!(timeline.activity_score, 0);
    }

    #[test]
    fn single_commit_now_has_full_recency() {
        let metrics = activity_metrics(&[commit_at(now())], 1, now());
        assert_eq!(metrics.recency, 100.0);
        assert_eq!(metrics.frequency, 1.0);
        assert_eq!(metrics.consistency, 100.0);
        assert_eq!(metrics.activity_score, 100);
    }

    #[test]
    fn timeline_carries_the_blended_activity_score() {
        let commits = vec![commit_at(now() - Duration::days(15))];
        let metrics = activity_metrics(&commits, 1, now());
        assert!(metrics.frequency > 0.0 && metrics.consistency > 0.0);
        assert_eq!(build_timeline(&commits, now()).activity_score, metrics.activity_score);
    }

    #[test]
    fn days_are_grouped_and_sorted_ascending() {
        let commits = vec![
            commit_at("2024-05-03T23:59:00Z".parse().expect("date should parse")),
            commit_at("2024-05-03T00:01:00Z".parse().expect("date should parse")),
            commit_at("2024-05-01T10:00:00Z".parse().expect("date should parse")),
        ];
        let timeline = build_timeline(&commits, now());
        assert_eq!(
            timeline.commits,
            vec![
                DayCount {
                    date: "2024-05-01".to_string(),
                    count: 1
                },
                DayCount {
                    date: "2024-05-03".to_string(),
                    count: 2
                },
            ]
        );
    }

    #[test]
    fn stale_sparse_history_keeps_the_ten_times_scaling() {
        // one commit 60 days ago: frequency 1/60, recency 0, consistency 100/60
        let commits = vec![commit_at(now() - Duration::days(60))];
        let metrics = activity_metrics(&commits, 1, now());
        assert_eq!(metrics.recency, 0.0);
        let expected = ((0.4 / 60.0 + 0.3 * 100.0 / 60.0) * 10.0_f64).round() as u32;
        assert_eq!(metrics.activity_score, expected);
        assert_eq!(metrics.activity_score, 5);
    }

    #[test]
    fn recency_decays_linearly_over_thirty_days() {
        let commits = vec![commit_at(now() - Duration::days(15))];
        let metrics = activity_metrics(&commits, 1, now());
        assert!((metrics.recency - 50.0).abs() < 1e-9);
    }

    #[test]
    fn score_is_clamped_to_one_hundred() {
        let commits: Vec<_> = (0..40).map(|hour| commit_at(now() - Duration::hours(hour))).collect();
        let timeline = build_timeline(&commits, now());
        assert_eq!(timeline.activity_score, 100);
    }
}
