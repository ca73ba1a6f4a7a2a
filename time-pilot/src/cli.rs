use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "time-pilot")]
#[command(about = "Terminal widget for logging focused work against projects")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Open the time entry form (default)
    Run,
    /// Print config path and create default file if missing
    ConfigPath,
}
