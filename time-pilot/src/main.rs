mod app;
mod catalog;
mod cli;
mod config;
mod form;
mod logging;
mod runtime;
mod terminal;
mod text_input;
mod ui;

use anyhow::Result;
use app::App;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    let cfg = config::TimePilotConfig::load()?;

    match cli.command.unwrap_or(cli::Commands::Run) {
        cli::Commands::Run => run(&cfg),
        cli::Commands::ConfigPath => {
            let path = config::TimePilotConfig::config_path()?;
            if !path.exists() {
                config::TimePilotConfig::default().save()?;
            }
            println!("{}", path.display());
            Ok(())
        }
    }
}

fn run(cfg: &config::TimePilotConfig) -> Result<()> {
    let log_path = config::TimePilotConfig::log_path()?;
    logging::init(&log_path, &cfg.log_filter)?;
    tracing::info!(mouse = cfg.mouse, "starting time-pilot");

    let mut app = App::new(cfg);
    let res = {
        let mut session = terminal::TerminalSession::enter(cfg.mouse)?;
        runtime::run_app(&mut session.terminal, &mut app)
    };

    if let Err(err) = &res {
        tracing::error!(error = ?err, "time-pilot exited with an error");
    }
    tracing::info!(entries = app.entries.len(), "session ended, entries discarded");
    res
}
