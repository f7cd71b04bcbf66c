pub mod api;
pub mod cli;
pub mod config;
pub mod database;
pub mod domain;
pub mod scoring;
pub mod services;

use anyhow::{bail, Result};
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use cli::Cli;

use crate::cli::Command;
use crate::config::settings::AppConfig;
use crate::services::report;
use crate::services::server::ServerService;
use crate::services::tracker::ScoreTracker;

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_serve(port: u16) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = AppConfig::new();
        let service = ServerService::new(port, config);
        service.run().await
    })
}

pub fn handle_init() -> Result<()> {
    let config = AppConfig::new();
    let pool = database::create_pool(&config.server.database_path)?;
    let conn = database::get_connection(&pool)?;
    database::setup::ensure_schema(&conn)
}

pub fn handle_reset() -> Result<()> {
    let config = AppConfig::new();
    let pool = database::create_pool(&config.server.database_path)?;
    let conn = database::get_connection(&pool)?;
    database::setup::reset_database(&conn)
}

pub fn handle_show(game_id: i64) -> Result<()> {
    let config = AppConfig::new();
    let pool = database::create_pool(&config.server.database_path)?;
    print!("{}", standings_report(pool, game_id)?);
    Ok(())
}

/// Standings text for a game; creates the schema first so a fresh database reads as empty.
pub fn standings_report(pool: database::DbPool, game_id: i64) -> Result<String> {
    database::setup::ensure_schema(&*database::get_connection(&pool)?)?;
    let tracker = ScoreTracker::new(pool);

    match tracker.game_view(game_id)? {
        Some(view) => Ok(report::render_game(&view)),
        None => bail!("Game {} not found", game_id),
    }
}

pub fn handle_completions(shell: Shell) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
    Ok(())
}
