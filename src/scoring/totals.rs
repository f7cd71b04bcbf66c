use std::collections::BTreeMap;
use log::debug;

use super::types::{MatchSnapshot, PlayerId, ResultEntry, RoundSnapshot, ScoringMode, Total, TotalPoints, TotalsMap};

/// Computes every player's total for a match under its game's scoring mode.
///
/// Sum modes give each match player the sum of their scores (0 without results).
/// Placement gives each player who appeared in at least one round the mean of
/// their per-round ranks. Unrecognized modes give an empty map.
pub fn compute_totals(snapshot: &MatchSnapshot) -> TotalsMap {
    let mode = snapshot.scoring_mode();
    debug!(
        "Computing totals for {} players over {} rounds (mode {:?})",
        snapshot.players.len(),
        snapshot.rounds.len(),
        mode
    );

    if mode.is_sum() {
        sum_totals(snapshot)
    } else if mode == ScoringMode::Placement {
        placement_totals(&snapshot.rounds)
    } else {
        TotalsMap::new()
    }
}

fn sum_totals(snapshot: &MatchSnapshot) -> TotalsMap {
    snapshot
        .players
        .iter()
        .map(|&player_id| (player_id, Total::Points(sum_for_player(&snapshot.rounds, player_id))))
        .collect()
}

fn sum_for_player(rounds: &[RoundSnapshot], player_id: PlayerId) -> TotalPoints {
    rounds
        .iter()
        .flat_map(|round| round.results.iter())
        .filter(|result| result.player_id == player_id)
        .map(|result| TotalPoints::from(result.score))
        .sum()
}

#[derive(Debug, Default, Clone, Copy)]
struct Placements {
    rank_sum: u64,
    rounds_played: u64,
}

fn placement_totals(rounds: &[RoundSnapshot]) -> TotalsMap {
    let mut placements: BTreeMap<PlayerId, Placements> = BTreeMap::new();

    for round in rounds {
        for (rank, player_id) in rank_round(&round.results) {
            let entry = placements.entry(player_id).or_default();
            entry.rank_sum += rank;
            entry.rounds_played += 1;
        }
    }

    placements
        .into_iter()
        .map(|(player_id, p)| {
            let mean = p.rank_sum as f64 / p.rounds_played as f64;
            (player_id, Total::MeanRank(mean))
        })
        .collect()
}

/// Ranks a round's results by ascending score, starting at 1.
///
/// The sort is stable, so equal scores keep their insertion order and
/// receive distinct consecutive ranks.
pub fn rank_round(results: &[ResultEntry]) -> Vec<(u64, PlayerId)> {
    let mut ordered: Vec<&ResultEntry> = results.iter().collect();
    ordered.sort_by_key(|result| result.score);

    ordered
        .into_iter()
        .enumerate()
        .map(|(idx, result)| (idx as u64 + 1, result.player_id))
        .collect()
}
