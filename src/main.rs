mod catalog;
mod cli;
mod config;
mod db;
mod models;
mod progress;
mod state;
mod tui;
mod utils;

use anyhow::{Context, Result};
use clap::Parser;
use rusqlite::Connection;

use cli::args::{Cli, Commands};
use cli::handlers;
use config::AppConfig;
use db::migrations::run_migrations;

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let mut config = AppConfig::load().context("Loading config")?;

    // Ensure data directory exists and open DB
    AppConfig::ensure_data_dir()?;
    let db_path = AppConfig::db_path()?;
    let conn = Connection::open(&db_path)
        .with_context(|| format!("Opening database at {:?}", db_path))?;
    log::debug!("using database {:?}", db_path);

    conn.execute_batch("PRAGMA journal_mode=WAL;")?;

    // Run migrations on every startup
    run_migrations(&conn)?;

    match cli.command {
        Some(Commands::Record { foods }) => {
            handlers::handle_record(&conn, &config, &foods)?;
        }
        Some(Commands::Stats { week }) => {
            handlers::handle_stats(&conn, &config, week)?;
        }
        Some(Commands::Badges) => {
            handlers::handle_badges(&conn, &config)?;
        }
        Some(Commands::Achievements { ack }) => {
            handlers::handle_achievements(&conn, &config, ack)?;
        }
        Some(Commands::Coupons { action }) => {
            handlers::handle_coupons(&conn, &config, &action)?;
        }
        Some(Commands::Resist) => {
            handlers::handle_resist(&conn, &config)?;
        }
        Some(Commands::Profile) => {
            handlers::handle_profile(&conn, &config)?;
        }
        Some(Commands::Compare { friend, overall }) => {
            handlers::handle_compare(&conn, &config, &friend, overall)?;
        }
        Some(Commands::Name { name }) => {
            handlers::handle_name(&mut config, &name)?;
        }
        Some(Commands::Reset { yes }) => {
            handlers::handle_reset(&conn, yes)?;
        }

        // No subcommand → launch TUI
        None => {
            tui::app::run(conn, config)?;
        }
    }

    Ok(())
}
