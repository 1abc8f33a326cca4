use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

pub type Score = u32;

/// Raw value a scoring rule detected, kept for traceability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Signal {
    Flag(bool),
    Count(i64),
    Text(String),
}

impl Signal {
    /// Numeric level used for tier matching; text signals have none.
    pub fn level(&self) -> Option<i64> {
        match self {
            Signal::Flag(flag) => Some(i64::from(*flag)),
            Signal::Count(count) => Some(*count),
            Signal::Text(_) => None,
        }
    }
}

impl From<bool> for Signal {
    fn from(value: bool) -> Self {
        Signal::Flag(value)
    }
}

impl From<usize> for Signal {
    fn from(value: usize) -> Self {
        Signal::Count(i64::try_from(value).unwrap_or(i64::MAX))
    }
}

impl From<u64> for Signal {
    fn from(value: u64) -> Self {
        Signal::Count(i64::try_from(value).unwrap_or(i64::MAX))
    }
}

impl From<&str> for Signal {
    fn from(value: &str) -> Self {
        Signal::Text(value.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DimensionScore {
    pub name: String,
    pub score: Score,
    pub max_score: Score,
    pub percentage: u32,
    pub reasons: Vec<String>,
    pub signals: BTreeMap<String, Signal>,
}

impl DimensionScore {
    pub fn new(
        name: &str,
        raw_score: Score,
        max_score: Score,
        reasons: Vec<String>,
        signals: BTreeMap<String, Signal>,
    ) -> Self {
        let score = raw_score.min(max_score);
        Self {
            name: name.to_string(),
            score,
            max_score,
            percentage: rounded_percentage(score, max_score),
            reasons,
            signals,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Grade {
    #[serde(rename = "F")]
    F,
    #[serde(rename = "D")]
    D,
    #[serde(rename = "C")]
    C,
    #[serde(rename = "B")]
    B,
    #[serde(rename = "A")]
    A,
    #[serde(rename = "A+")]
    APlus,
}

impl Grade {
    pub fn from_percentage(percentage: u32) -> Self {
        match percentage {
            90.. => Grade::APlus,
            80..=89 => Grade::A,
            70..=79 => Grade::B,
            60..=69 => Grade::C,
            50..=59 => Grade::D,
            _ => Grade::F,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Grade::APlus => "A+",
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::F => "F",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoringResult {
    pub dimensions: Vec<DimensionScore>,
    pub total_score: Score,
    pub max_score: Score,
    pub percentage: u32,
    pub grade: Grade,
}

/// round(100 * score / max) with halves rounded up, in integer arithmetic.
pub fn rounded_percentage(score: Score, max_score: Score) -> u32 {
    if max_score == 0 {
        return 0;
    }
    let score = u64::from(score);
    let max_score = u64::from(max_score);
    ((200 * score + max_score) / (2 * max_score)) as u32
}
