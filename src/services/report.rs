use std::fmt::Write as _;
use colored::Colorize;

use crate::domain::{GameView, MatchView};
use crate::scoring::Total;

/// Plain-text standings for a game, leaders in bold green.
pub fn render_game(view: &GameView) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} (#{}, mode {})",
        view.game.name.bold(),
        view.game.id,
        view.game.mode
    );

    if view.matches.is_empty() {
        let _ = writeln!(out, "  no matches yet");
    }
    for m in &view.matches {
        out.push_str(&render_match(m));
    }
    out
}

pub fn render_match(view: &MatchView) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "  Match #{} ({}), {} rounds",
        view.id,
        view.created_at.format("%Y-%m-%d %H:%M"),
        view.rounds.len()
    );

    for player in &view.players {
        let line = format!("    {:<20} {:>8}", player.name, format_total(player.total));
        if player.highlighted {
            let _ = writeln!(out, "{}", line.green().bold());
        } else {
            let _ = writeln!(out, "{}", line);
        }
    }
    out
}

fn format_total(total: Option<Total>) -> String {
    match total {
        Some(Total::Points(points)) => points.to_string(),
        Some(Total::MeanRank(rank)) => format!("{:.2}", rank),
        None => "-".to_string(),
    }
}
