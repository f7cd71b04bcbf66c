use std::collections::BTreeSet;

use super::types::{PlayerId, ScoringMode, Total, TotalsMap};

/// The total a player needs to be highlighted as leader, if the mode ranks at all.
pub fn best_total(mode: ScoringMode, totals: &TotalsMap) -> Option<Total> {
    let values = totals.values().copied();
    match mode {
        ScoringMode::SumHigh => values.reduce(|a, b| if b > a { b } else { a }),
        ScoringMode::SumLow | ScoringMode::Placement => {
            values.reduce(|a, b| if b < a { b } else { a })
        }
        ScoringMode::SumUnranked | ScoringMode::Unrecognized => None,
    }
}

/// Players whose total equals the best total exactly. Ties highlight everyone tied.
pub fn winners(mode: ScoringMode, totals: &TotalsMap) -> BTreeSet<PlayerId> {
    match best_total(mode, totals) {
        Some(best) => totals
            .iter()
            .filter(|(_, total)| **total == best)
            .map(|(&player_id, _)| player_id)
            .collect(),
        None => BTreeSet::new(),
    }
}
