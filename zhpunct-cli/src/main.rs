//! zhpunct command-line entry point

use clap::Parser;
use zhpunct_cli::commands::Commands;

/// Normalize punctuation and spacing in mixed Chinese/English text
#[derive(Debug, Parser)]
#[command(name = "zhpunct", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_normalize_text() {
        let cli = Cli::try_parse_from(["zhpunct", "normalize", "-t", "你好，世界"]).unwrap();
        match cli.command {
            Commands::Normalize(args) => assert_eq!(args.text.as_deref(), Some("你好，世界")),
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
