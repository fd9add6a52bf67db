//! CLI definitions for truthcheck.

use clap::{Parser, Subcommand};

/// truthcheck CLI.
#[derive(Parser)]
#[command(name = "truthcheck")]
#[command(about = "Truth-check YouTube video titles with Claude")]
#[command(version)]
pub(crate) struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "~/.truthcheck/config.toml", global = true)]
    pub config: String,

    /// API key, overriding the configured one
    #[arg(long, env = "ANTHROPIC_API_KEY", hide_env_values = true, global = true)]
    pub api_key: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Classify one title through the background service
    Check {
        /// Video title to check
        title: String,

        /// Watch page URL, used for deep search
        #[arg(long)]
        video_url: Option<String>,

        /// Scrape the watch page for extra context
        #[arg(long)]
        deep_search: bool,
    },

    /// Validate the configuration and show the effective settings
    Config,
}
