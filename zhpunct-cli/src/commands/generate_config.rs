//! Generate config command implementation

use crate::config::CliConfig;
use crate::error::CliResult;
use anyhow::{Context, Result};
use clap::Args;
use std::fs;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> CliResult<()> {
        println!("Generating configuration template...");
        println!("  Output file: {}", self.output.display());

        let template = Self::generate_template()?;

        fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the configuration file to customize the rules");
        println!("2. Validate your configuration:");
        println!("   zhpunct validate -c {}", self.output.display());
        println!("3. Use it for normalization:");
        println!("   zhpunct normalize -i input.txt -c {}", self.output.display());

        Ok(())
    }

    /// Default configuration rendered as commented TOML
    fn generate_template() -> Result<String> {
        let body = CliConfig::template().to_toml_string()?;
        Ok(format!(
            r#"# zhpunct configuration
#
# [output]       default format ("text" or "json") and JSON layout
# [performance]  worker threads for --parallel (0 = one per CPU)
# [normalizer]   punctuation table, paired markers, run collapsing, spacing
#
# With replace_defaults = true only the entries listed under
# [normalizer.punctuation.map] are converted.

{body}"#
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use zhpunct_core::NormalizerConfig;

    #[test]
    fn test_generated_template_is_valid() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("zhpunct.toml");

        GenerateConfigArgs {
            output: output.clone(),
        }
        .execute()
        .unwrap();

        let config = CliConfig::from_file(&output).unwrap();
        assert_eq!(
            config.normalizer_config().unwrap(),
            NormalizerConfig::default()
        );
    }

    #[test]
    fn test_unwritable_destination() {
        let args = GenerateConfigArgs {
            output: PathBuf::from("/nonexistent/dir/zhpunct.toml"),
        };
        let err = args.execute().unwrap_err();
        assert!(err.to_string().contains("Failed to write"));
    }
}
