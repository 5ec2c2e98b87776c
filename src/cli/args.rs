//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueHint};

use crate::config::RawSettings;

/// Lexical scoping demo: a chain of nested closures printing composed greetings
#[derive(Parser, Debug)]
#[command(name = "scopechain")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Turn debugging information on (repeat for more: -d -d -d)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub debug: u8,

    /// Local config file (layered above the global config)
    #[arg(short, long, global = true, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Process-wide value printed on every line
    #[arg(long, global = true)]
    pub welcome: Option<String>,

    /// Value bound by the outermost unit
    #[arg(long, global = true)]
    pub course: Option<String>,

    /// Punctuation bound by the middle unit
    #[arg(long, global = true)]
    pub exclamation: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Values given on the command line, as the highest-precedence config layer.
    pub fn overrides(&self) -> RawSettings {
        RawSettings {
            welcome: self.welcome.clone(),
            course: self.course.clone(),
            exclamation: self.exclamation.clone(),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the closure chain (default)
    Run,

    /// Show the lines numbered by call order
    Lines,

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show effective configuration
    Show,
    /// Print a commented config template
    Template,
    /// Show global config file location
    Path,
}
