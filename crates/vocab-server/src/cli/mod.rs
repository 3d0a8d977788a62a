use clap::{Parser, Subcommand, ValueEnum};

/// Shared output mode for commands that print a response.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Raw,
}

/// Global flags available before or after subcommands.
#[derive(Clone, Debug)]
pub struct GlobalFlags {
    pub format: OutputFormat,
    pub quiet: bool,
}

/// Top-level CLI parser for the `vocab-mate` binary.
#[derive(Debug, Parser)]
#[command(
    name = "vocab-mate",
    version,
    about = "vocab-mate - daily trilingual sentence generator"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate one batch of daily sentences and print it
    Generate,
    /// Serve the daily sentence HTTP API
    Serve {
        /// Address to bind (host:port); overrides server.bind
        #[arg(short, long)]
        bind: Option<String>,
    },
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub const fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
        }
    }
}
