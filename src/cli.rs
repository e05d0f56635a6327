use crate::config::ToolConfig;
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Parse include/exclude filter expressions for stack-frame searches
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (overrides the config file)
    #[arg(short = 'F', long, global = true)]
    pub format: Option<OutputFormat>,

    /// When to use terminal colors (overrides the config file)
    #[arg(long, global = true)]
    pub color: Option<ColorMode>,

    /// Path to a TOML config file
    #[arg(short, long, global = true, env = "STACKFILTER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Also write the report to this file
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse one expression and print its include and exclude terms
    Parse {
        /// Expression to parse; read from stdin when omitted. Put it after `--`
        /// when it starts with `-` (e.g. `parse -- -idle`)
        #[arg(allow_hyphen_values = true)]
        expression: Option<String>,
    },
    /// Validate every line of one or more files as a filter expression
    Check {
        /// Files holding one expression per line
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    Auto,
    Always,
    Never,
}

impl Cli {
    pub fn effective_format(&self, config: &ToolConfig) -> OutputFormat {
        self.format.unwrap_or(config.output.format)
    }

    pub fn effective_color(&self, config: &ToolConfig) -> ColorMode {
        self.color.unwrap_or(config.output.color)
    }

    /// Default log level implied by `-q` / `-v`
    pub fn log_level(&self) -> tracing::Level {
        if self.quiet {
            return tracing::Level::ERROR;
        }
        match self.verbose {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            _ => tracing::Level::DEBUG,
        }
    }
}

pub fn cli_parse() -> Cli {
    Cli::parse()
}
