use crate::commands::Commands;

use clap::Parser;

pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:3008";

#[derive(Parser)]
#[command(name = "pms")]
#[command(about = "Project management backend CLI")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Server URL
    #[arg(long, global = true, default_value = DEFAULT_SERVER_URL)]
    pub server: String,

    /// Session token from `pms login`, sent as a bearer token
    #[arg(long, global = true)]
    pub token: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,
}
