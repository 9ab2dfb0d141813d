//! Validate command implementation

use crate::config::CliConfig;
use crate::error::CliResult;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the configuration file to validate
    #[arg(short, long, value_name = "FILE", required = true)]
    pub config: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> CliResult<()> {
        println!("Validating configuration: {}", self.config.display());

        let result = CliConfig::from_file(&self.config)
            .and_then(|cli_config| Ok((cli_config.normalizer_config()?, cli_config)));

        match result {
            Ok((normalizer, cli_config)) => {
                println!("✓ Configuration is valid!");
                println!("  Punctuation mappings: {}", normalizer.punctuation().len());
                println!("  Marker delimiters: {}", normalizer.delimiters().join(" "));
                println!(
                    "  Collapse: {} to {}",
                    normalizer.collapse_chars().iter().collect::<String>(),
                    normalizer.collapse_length()
                );
                println!("  Output format: {:?}", cli_config.output.format);
                Ok(())
            }
            Err(e) => {
                println!("✗ Configuration is invalid!");
                println!("  Error: {e}");
                Err(anyhow::anyhow!("Validation failed: {}", e))
            }
        }
    }
}
