pub mod highlight;
pub mod numbering;
pub mod totals;
pub mod types;

pub use highlight::{best_total, winners};
pub use numbering::next_round_number;
pub use totals::{compute_totals, rank_round};
pub use types::{MatchSnapshot, PlayerId, ResultEntry, RoundSnapshot, Score, ScoringMode, Total, TotalPoints, TotalsMap};
