//! Normalize command implementation

use crate::config::CliConfig;
use crate::error::{CliError, CliResult};
use crate::input::{read_stdin, resolve_patterns, Document, FileReader, Source};
use crate::output::{JsonFormatter, OutputFormat, OutputFormatter, TextFormatter};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::Args;
use rayon::prelude::*;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use zhpunct_core::Normalizer;

/// Arguments for the normalize command
#[derive(Debug, Args)]
pub struct NormalizeArgs {
    /// Input files or patterns (supports glob); reads stdin when absent
    #[arg(short, long, value_name = "FILE/PATTERN", conflicts_with = "text")]
    pub input: Vec<String>,

    /// Normalize this text instead of reading input
    #[arg(short, long, value_name = "TEXT")]
    pub text: Option<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE", conflicts_with = "in_place")]
    pub output: Option<PathBuf>,

    /// Output format (default: from config, else text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Rewrite each input file with its normalized text
    #[arg(long, requires = "input")]
    pub in_place: bool,

    /// Normalize multiple files in parallel
    #[arg(short, long)]
    pub parallel: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl NormalizeArgs {
    /// Execute the normalize command
    pub fn execute(&self) -> CliResult<()> {
        // Initialize logging based on verbosity
        self.init_logging()?;

        log::info!("Starting normalization");
        log::debug!("Arguments: {:?}", self);

        let cli_config = match &self.config {
            Some(path) => CliConfig::from_file(path)?,
            None => CliConfig::default(),
        };
        let normalizer = Normalizer::new(cli_config.normalizer_config()?);

        let results = if let Some(text) = &self.text {
            let document = Document::new(Source::Text, text.as_str());
            let result = normalizer.normalize(&document.content);
            vec![(document, result)]
        } else if self.input.is_empty() {
            let document = Document::new(Source::Stdin, read_stdin()?);
            let result = normalizer.normalize(&document.content);
            vec![(document, result)]
        } else {
            let files = resolve_patterns(&self.input)?;
            log::info!("Found {} file(s) to normalize", files.len());
            self.normalize_files(&normalizer, &files, &cli_config)?
        };

        if self.in_place {
            return self.write_in_place(&results);
        }

        let format = self.format.unwrap_or(cli_config.output.format);
        self.write_output(&results, format, cli_config.output.pretty_json)?;

        log::info!("Normalization complete");
        Ok(())
    }

    /// Read and normalize files, in parallel when requested
    fn normalize_files(
        &self,
        normalizer: &Normalizer,
        files: &[PathBuf],
        cli_config: &CliConfig,
    ) -> Result<Vec<(Document, String)>> {
        let mut progress = ProgressReporter::new(self.quiet || files.len() < 2);
        progress.init_files(files.len() as u64);

        let process_file = |path: &PathBuf| -> Result<(Document, String)> {
            let content = FileReader::read_text(path)?;
            let result = normalizer.normalize(&content);
            progress.file_completed(&path.display().to_string());
            Ok((Document::new(Source::File(path.clone()), content), result))
        };

        let results = if self.parallel && files.len() > 1 {
            let threads = cli_config.performance.resolved_threads();
            log::debug!("Using {threads} worker thread(s)");
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build()
                .context("Failed to build worker thread pool")?;
            pool.install(|| files.par_iter().map(process_file).collect::<Result<Vec<_>>>())?
        } else {
            files.iter().map(process_file).collect::<Result<Vec<_>>>()?
        };

        progress.finish();
        Ok(results)
    }

    /// Write results back to their source files
    fn write_in_place(&self, results: &[(Document, String)]) -> Result<()> {
        let mut changed = 0;
        for (document, result) in results {
            if let Source::File(path) = &document.source {
                if FileReader::write_if_changed(path, &document.content, result)? {
                    log::info!("Rewrote {}", path.display());
                    changed += 1;
                }
            }
        }
        if !self.quiet {
            eprintln!("{changed} of {} file(s) changed", results.len());
        }
        Ok(())
    }

    /// Write results to the output file or stdout
    fn write_output(
        &self,
        results: &[(Document, String)],
        format: OutputFormat,
        pretty_json: bool,
    ) -> Result<()> {
        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => {
                let file = File::create(path).map_err(|e| {
                    CliError::OutputError(format!("cannot create {}: {e}", path.display()))
                })?;
                Box::new(BufWriter::new(file))
            }
            None => Box::new(io::stdout()),
        };

        let mut formatter: Box<dyn OutputFormatter> = match format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer, pretty_json)),
        };

        for (document, result) in results {
            formatter.format_document(document, result)?;
        }
        formatter.finish()
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) -> Result<()> {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }

        Ok(())
    }
}
