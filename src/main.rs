use anyhow::Result;
use clap::{Parser, Subcommand};

use fundboard::config::{paths::FundboardPaths, settings::Settings};
use fundboard::display::format_request_table;
use fundboard::sample;
use fundboard::tui::run_tui;

#[derive(Parser)]
#[command(
    name = "fundboard",
    version,
    about = "Terminal-based fund request dashboard",
    long_about = "fundboard is a terminal dashboard for creating and reviewing \
                  organizational fund requests, with aggregate statistics, a \
                  fund-creation form, and per-year budget planning."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI (default)
    #[command(alias = "ui")]
    Tui,

    /// Print the recent fund requests table
    Requests,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = FundboardPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        // The dashboard is the whole point; launch it by default
        Some(Commands::Tui) | None => {
            run_tui(settings)?;
        }
        Some(Commands::Requests) => {
            let requests = sample::recent_requests();
            println!("{}", format_request_table(&requests, &settings.date_format));
        }
        Some(Commands::Config) => {
            println!("fundboard Configuration");
            println!("=======================");
            println!("Config directory: {}", paths.config_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
            println!("  Tick rate:       {}ms", settings.tick_rate_ms);
            println!("  Start view:      {:?}", settings.start_view);
        }
    }

    Ok(())
}
