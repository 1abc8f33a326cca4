use crate::types::scoring::{DimensionScore, Score, Signal};
use crate::types::snapshot::Snapshot;
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

/// What every scoring rule is evaluated against.
#[derive(Debug, Clone, Copy)]
pub struct ScoreInput<'a> {
    pub snapshot: &'a Snapshot,
    pub now: DateTime<Utc>,
}

impl<'a> ScoreInput<'a> {
    pub fn new(snapshot: &'a Snapshot, now: DateTime<Utc>) -> Self {
        Self { snapshot, now }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Tier {
    pub min: i64,
    pub max: Option<i64>,
    pub points: Score,
    pub reason: &'static str,
}

impl Tier {
    pub const fn at_least(min: i64, points: Score, reason: &'static str) -> Self {
        Self {
            min,
            max: None,
            points,
            reason,
        }
    }

    pub const fn between(min: i64, max: i64, points: Score, reason: &'static str) -> Self {
        Self {
            min,
            max: Some(max),
            points,
            reason,
        }
    }

    fn matches(&self, level: i64) -> bool {
        level >= self.min && self.max.map_or(true, |max| level <= max)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Award {
    /// Fires when the signal is true or a positive count.
    Flag { points: Score, reason: &'static str },
    /// First matching tier wins.
    Tiers(&'static [Tier]),
}

#[derive(Clone, Copy)]
pub struct Rule {
    pub signal: &'static str,
    pub measure: fn(&ScoreInput<'_>) -> Signal,
    pub award: Award,
    pub miss: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub signal: Signal,
    pub points: Score,
    pub reason: Option<&'static str>,
}

impl Rule {
    pub fn evaluate(&self, input: &ScoreInput<'_>) -> Outcome {
        let signal = (self.measure)(input);
        let level = signal.level().unwrap_or(0);
        let hit = match self.award {
            Award::Flag { points, reason } => (level > 0).then_some((points, reason)),
            Award::Tiers(tiers) => tiers
                .iter()
                .find(|tier| tier.matches(level))
                .map(|tier| (tier.points, tier.reason)),
        };
        match hit {
            Some((points, reason)) => Outcome {
                signal,
                points,
                reason: Some(reason),
            },
            None => Outcome {
                signal,
                points: 0,
                reason: self.miss,
            },
        }
    }

    /// Most points this rule can contribute.
    #[cfg(test)]
    pub fn ceiling(&self) -> Score {
        match self.award {
            Award::Flag { points, .. } => points,
            Award::Tiers(tiers) => tiers.iter().map(|tier| tier.points).max().unwrap_or(0),
        }
    }
}

/// Summary reason chosen from the combined points of a group of rules.
#[derive(Debug, Clone, Copy)]
pub struct Bucket {
    pub members: &'static [&'static str],
    /// `(minimum, reason)` pairs; the first minimum the group total reaches wins.
    pub tiers: &'static [(Score, &'static str)],
    pub miss: &'static str,
}

impl Bucket {
    pub fn reason(&self, points: &BTreeMap<&str, Score>) -> &'static str {
        let total: Score = self
            .members
            .iter()
            .filter_map(|member| points.get(member))
            .sum();
        self.tiers
            .iter()
            .find(|(minimum, _)| total >= *minimum)
            .map_or(self.miss, |(_, reason)| *reason)
    }
}

/// Sums every rule; reasons keep rule order, the total is clamped to `max_score`.
pub fn apply(
    name: &str,
    max_score: Score,
    rules: &[Rule],
    input: &ScoreInput<'_>,
) -> DimensionScore {
    apply_grouped(name, max_score, rules, &[], input)
}

/// Like [`apply`], then appends one summary reason per bucket.
pub fn apply_grouped(
    name: &str,
    max_score: Score,
    rules: &[Rule],
    buckets: &[Bucket],
    input: &ScoreInput<'_>,
) -> DimensionScore {
    let mut total: Score = 0;
    let mut reasons = Vec::new();
    let mut signals = BTreeMap::new();
    let mut points = BTreeMap::new();
    for rule in rules {
        let outcome = rule.evaluate(input);
        total = total.saturating_add(outcome.points);
        if let Some(reason) = outcome.reason {
            reasons.push(reason.to_string());
        }
        points.insert(rule.signal, outcome.points);
        signals.insert(rule.signal.to_string(), outcome.signal);
    }
    reasons.extend(buckets.iter().map(|bucket| bucket.reason(&points).to_string()));
    DimensionScore::new(name, total, max_score, reasons, signals)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::snapshot::TreeEntry;

    const COUNT_TIERS: &[Tier] = &[
        Tier::between(20, 200, 7, "sized"),
        Tier::at_least(10, 4, "moderate"),
        Tier::at_least(5, 2, "small"),
    ];

    fn now() -> DateTime<Utc> {
        "2024-06-01T00:00:00Z".parse().expect("date should parse")
    }

    const ENTRY_COUNT: Rule = Rule {
        signal: "entries",
        measure: |input| Signal::from(input.snapshot.structure.len()),
        award: Award::Tiers(COUNT_TIERS),
        miss: Some("tiny"),
    };

    fn with_entries(count: usize) -> Snapshot {
        Snapshot {
            structure: (0..count)
                .map(|index| TreeEntry::file(format!("f{index}.rs")))
                .collect(),
            ..Snapshot::default()
        }
    }

    #[test]
    fn tiers_pick_first_match_in_order() {
        let points = |count: usize| {
            let snapshot = with_entries(count);
            ENTRY_COUNT.evaluate(&ScoreInput::new(&snapshot, now()))
        };

        assert_eq!(points(25).points, 7);
        assert_eq!(points(250).points, 4);
        assert_eq!(points(5).reason, Some("small"));
        let miss = points(3);
        assert_eq!(miss.points, 0);
        assert_eq!(miss.reason, Some("tiny"));
        assert_eq!(miss.signal, Signal::Count(3));
        assert_eq!(ENTRY_COUNT.ceiling(), 7);
    }

    #[test]
    fn apply_clamps_and_keeps_reason_order() {
        let snapshot = Snapshot::default();
        let input = ScoreInput::new(&snapshot, now());
        let rules = [
            Rule {
                signal: "b",
                measure: |_| Signal::Flag(true),
                award: Award::Flag {
                    points: 4,
                    reason: "first",
                },
                miss: None,
            },
            Rule {
                signal: "a",
                measure: |_| Signal::Flag(false),
                award: Award::Flag {
                    points: 4,
                    reason: "never",
                },
                miss: Some("second"),
            },
            Rule {
                signal: "c",
                measure: |_| Signal::Count(2),
                award: Award::Flag {
                    points: 4,
                    reason: "third",
                },
                miss: None,
            },
        ];

        let dimension = apply("Sample", 6, &rules, &input);
        assert_eq!(dimension.score, 6);
        assert_eq!(dimension.percentage, 100);
        assert_eq!(dimension.reasons, vec!["first", "second", "third"]);
        assert_eq!(dimension.signals.get("a"), Some(&Signal::Flag(false)));
        assert_eq!(dimension.signals.len(), 3);
    }

    const PAIR_TIERS: &[(Score, &str)] = &[(6, "both"), (2, "some")];

    #[test]
    fn bucket_reason_follows_group_total() {
        let snapshot = Snapshot::default();
        let input = ScoreInput::new(&snapshot, now());
        let rules = [
            Rule {
                signal: "hit",
                measure: |_| Signal::Flag(true),
                award: Award::Flag {
                    points: 4,
                    reason: "hit fired",
                },
                miss: None,
            },
            Rule {
                signal: "skip",
                measure: |_| Signal::Flag(false),
                award: Award::Flag {
                    points: 2,
                    reason: "skip fired",
                },
                miss: None,
            },
        ];
        let buckets = [
            Bucket {
                members: &["hit", "skip"],
                tiers: PAIR_TIERS,
                miss: "neither",
            },
            Bucket {
                members: &["skip"],
                tiers: PAIR_TIERS,
                miss: "skip group empty",
            },
        ];

        let dimension = apply_grouped("Sample", 10, &rules, &buckets, &input);
        assert_eq!(dimension.score, 4);
        assert_eq!(dimension.reasons, vec!["hit fired", "some", "skip group empty"]);
    }
}
