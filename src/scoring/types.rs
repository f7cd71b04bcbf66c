use std::cmp::Ordering;
use std::collections::BTreeMap;
use serde::Serialize;

pub type PlayerId = i64;
pub type Score = i64;
/// Sums of `Score`s; wide enough that no realistic number of rounds overflows.
pub type TotalPoints = i128;
pub type TotalsMap = BTreeMap<PlayerId, Total>;

/// How a game turns round scores into match totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoringMode {
    /// Sum of scores, highest total leads
    SumHigh,
    /// Sum of scores, lowest total leads
    SumLow,
    /// Any other `sum*` mode string: totals are summed but nobody leads
    SumUnranked,
    /// Mean per-round placement, lowest mean leads
    Placement,
    Unrecognized,
}

impl ScoringMode {
    pub const SUM_HIGH: &'static str = "sum_high";
    pub const SUM_LOW: &'static str = "sum_low";
    pub const PLACEMENT: &'static str = "placement";

    pub fn from_mode(mode: &str) -> Self {
        match mode {
            Self::SUM_HIGH => ScoringMode::SumHigh,
            Self::SUM_LOW => ScoringMode::SumLow,
            Self::PLACEMENT => ScoringMode::Placement,
            m if m.starts_with("sum") => ScoringMode::SumUnranked,
            _ => ScoringMode::Unrecognized,
        }
    }

    pub fn is_sum(&self) -> bool {
        matches!(
            self,
            ScoringMode::SumHigh | ScoringMode::SumLow | ScoringMode::SumUnranked
        )
    }
}

/// A player's aggregate for one match.
///
/// Sum modes produce whole points, placement produces a mean rank.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Total {
    Points(TotalPoints),
    MeanRank(f64),
}

impl Total {
    pub fn as_f64(&self) -> f64 {
        match *self {
            Total::Points(points) => points as f64,
            Total::MeanRank(rank) => rank,
        }
    }
}

impl PartialOrd for Total {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Total::Points(a), Total::Points(b)) => a.partial_cmp(b),
            _ => self.as_f64().partial_cmp(&other.as_f64()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResultEntry {
    pub player_id: PlayerId,
    pub score: Score,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RoundSnapshot {
    pub number: i64,
    /// Results in insertion order
    pub results: Vec<ResultEntry>,
}

/// Everything the engine needs to know about one match.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchSnapshot {
    pub mode: String,
    /// Player ids in insertion order
    pub players: Vec<PlayerId>,
    pub rounds: Vec<RoundSnapshot>,
}

impl MatchSnapshot {
    pub fn scoring_mode(&self) -> ScoringMode {
        ScoringMode::from_mode(&self.mode)
    }
}
