//! Segment command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::io::Write;
use std::path::PathBuf;

use osalau_core::clause;
use osalau_core::relay;
use osalau_core::{JavaCommand, PipeSegmenter, Segmenter};

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader};
use crate::progress::ProgressReporter;

/// Arguments for the segment command
#[derive(Debug, Args)]
pub struct SegmentArgs {
    /// Input files or patterns (supports glob); reads stdin when omitted
    #[arg(short, long, value_name = "FILE/PATTERN")]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Path to the Osalausestaja jar
    #[arg(long, value_name = "FILE")]
    pub jar: Option<PathBuf>,

    /// Java executable used to launch the jar
    #[arg(long, value_name = "PATH")]
    pub java: Option<PathBuf>,

    /// Arbitrary segmenter command (split on whitespace), overriding --jar
    #[arg(long, value_name = "CMD")]
    pub segmenter_cmd: Option<String>,

    /// Guess clause boundaries even when commas are missing from the input
    #[arg(long)]
    pub ignore_missing_commas: bool,

    /// Rewrite clause markers into clause ids and types
    #[arg(long)]
    pub annotate: bool,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl SegmentArgs {
    /// Execute the segment command
    pub fn execute(&self) -> Result<()> {
        self.init_logging();

        log::info!("Starting line relay");
        log::debug!("Arguments: {self:?}");

        let config = match &self.config {
            Some(path) => CliConfig::load(path)?,
            None => CliConfig::default(),
        };

        let segmenter = self.launch_segmenter(&config)?;
        log::info!("Segmenter running: {}", segmenter.command());

        if self.annotate || config.output.annotate {
            self.relay_all(Annotating(segmenter))
        } else {
            self.relay_all(segmenter)
        }
    }

    /// Relay stdin or every resolved input file through the segmenter.
    fn relay_all<S: Segmenter>(&self, mut segmenter: S) -> Result<()> {
        let mut writer = self.open_output()?;

        if self.input.is_empty() {
            let stdin = std::io::stdin();
            let relayed = relay::run(stdin.lock(), &mut writer, &mut segmenter)?;
            log::info!("Relayed {relayed} lines from stdin");
            return Ok(());
        }

        let files = resolve_patterns(&self.input)?;
        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(files.len() as u64);

        let mut total = 0u64;
        for path in &files {
            let reader = FileReader::open(path)?;
            let relayed = relay::run(reader, &mut writer, &mut segmenter)
                .with_context(|| format!("Failed while relaying: {}", path.display()))?;
            progress.file_completed(&path.display().to_string(), relayed);
            total += relayed;
        }
        progress.finish();

        log::info!("Relayed {total} lines from {} files", files.len());
        Ok(())
    }

    /// Launch the segmenter process resolved from flags and config.
    ///
    /// Precedence: --segmenter-cmd, then the config command override, then
    /// --jar, then the config jar path.
    fn launch_segmenter(&self, config: &CliConfig) -> Result<PipeSegmenter> {
        let raw_command = self
            .segmenter_cmd
            .as_deref()
            .or(config.segmenter.command.as_deref());
        if let Some(raw) = raw_command {
            let mut parts = raw.split_whitespace();
            let program = parts
                .next()
                .ok_or_else(|| CliError::ConfigError("empty segmenter command".to_string()))?;
            let args: Vec<&str> = parts.collect();
            return Ok(PipeSegmenter::spawn(program, &args)?);
        }

        let jar = self
            .jar
            .clone()
            .or_else(|| config.segmenter.jar_path.clone())
            .ok_or(CliError::NoSegmenter)?;
        let java = self
            .java
            .clone()
            .unwrap_or_else(|| PathBuf::from(&config.segmenter.java_path));
        let command = JavaCommand::new(jar)
            .java(java)
            .ignore_missing_commas(
                self.ignore_missing_commas || config.segmenter.ignore_missing_commas,
            );
        Ok(command.spawn()?)
    }

    /// Open the output sink: a file when requested, stdout otherwise.
    fn open_output(&self) -> Result<Box<dyn Write>> {
        match &self.output {
            Some(path) => {
                let file = std::fs::File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?;
                Ok(Box::new(file))
            }
            None => Ok(Box::new(std::io::stdout())),
        }
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
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
    }
}

/// Segmenter adapter that rewrites each analysis into grouped clauses.
struct Annotating<S>(S);

impl<S: Segmenter> Segmenter for Annotating<S> {
    fn analyze(&mut self, line: &str) -> osalau_core::Result<String> {
        let analysis = self.0.analyze(line)?;
        clause::annotate_line(&analysis)
    }
}
