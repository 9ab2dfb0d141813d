//! CLI command implementations

use crate::error::CliResult;
use clap::Subcommand;

pub mod generate_config;
pub mod normalize;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Normalize punctuation and spacing in text or files
    Normalize(normalize::NormalizeArgs),

    /// Write the default configuration as a TOML file
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// Check that a configuration file loads and validates
    Validate(validate::ValidateArgs),
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> CliResult<()> {
        match self {
            Commands::Normalize(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
        }
    }
}
