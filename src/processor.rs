//! Core processing engine
//!
//! Runs the pipeline: parse the pattern, estimate the output, confirm large
//! runs, then stream every combination into the output file.

use crate::cli::Args;
use crate::estimate::{confirm_large_output, estimate, SizeEstimate};
use crate::generator::Combinations;
use crate::output::OutputWriter;
use crate::pattern::parse_pattern;
use crate::progress::{
    create_progress_bar, format_duration, format_number, print_header, print_info, print_success,
    print_warning,
};

use anyhow::Context;
use bytesize::ByteSize;
use colored::*;
use indicatif::ProgressBar;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Words generated between progress bar updates
const PROGRESS_BATCH: u64 = 16 * 1024;

/// Processor configuration
#[derive(Debug, Clone)]
pub struct ProcessorConfig {
    pub pattern: String,
    pub output: PathBuf,
    pub assume_yes: bool,
    pub dry_run: bool,
    pub buffer_size: usize,
    pub quiet: bool,
    pub verbose: bool,
}

impl ProcessorConfig {
    /// Build from parsed arguments and the already resolved output path
    pub fn from_args(args: &Args, output: PathBuf) -> anyhow::Result<Self> {
        Ok(Self {
            pattern: args.pattern.clone(),
            output,
            assume_yes: args.yes,
            dry_run: args.dry_run,
            buffer_size: args.parse_buffer_size()?,
            quiet: args.quiet,
            verbose: args.verbose,
        })
    }
}

/// Summary of a completed run
#[derive(Debug, Clone)]
pub struct GenerationReport {
    pub estimate: SizeEstimate,
    pub output: PathBuf,
    pub lines_written: u128,
    pub bytes_written: u128,
    pub elapsed: Duration,
}

impl GenerationReport {
    pub fn print_summary(&self) {
        print_info(&format!("Words written: {}", format_number(self.lines_written)));
        print_info(&format!(
            "Data written:  {}",
            ByteSize(u64::try_from(self.bytes_written).unwrap_or(u64::MAX))
        ));
        print_info(&format!("Duration:      {}", format_duration(self.elapsed)));
    }
}

/// Main processor
pub struct Processor {
    config: ProcessorConfig,
}

impl Processor {
    pub fn new(config: ProcessorConfig) -> Self {
        Self { config }
    }

    /// Run against the process stdin/stdout for the confirmation prompt
    pub fn run(&self) -> anyhow::Result<Option<GenerationReport>> {
        self.run_with(io::stdin().lock(), io::stdout())
    }

    /// Run the full pipeline.
    ///
    /// Returns `None` for a dry run. Declining the confirmation surfaces as
    /// [`crate::GeneratorError::Aborted`] before the output file is touched.
    pub fn run_with<R, W>(&self, input: R, prompt: W) -> anyhow::Result<Option<GenerationReport>>
    where
        R: BufRead,
        W: Write,
    {
        if !self.config.quiet {
            print_header("Parsing pattern...");
        }

        let parsed = parse_pattern(&self.config.pattern);
        log::debug!("Parsed {} segments: {}", parsed.len(), parsed);

        let estimate = estimate(&parsed)?;

        if !self.config.quiet && self.config.verbose {
            print_info(&format!("Segments:     {}", parsed.len()));
            print_info(&format!("Word length:  {}", estimate.avg_segment_length));
            print_info(&format!("Line bytes:   {}", estimate.line_length()));
            print_info(&format!("Estimate:     {}", estimate.human_size()));
        }

        if self.config.dry_run {
            self.dry_run_report(&estimate);
            return Ok(None);
        }

        if estimate.exceeds_threshold() {
            if self.config.assume_yes {
                log::info!(
                    "Skipping confirmation for {:.2} MB output",
                    estimate.estimated_mib()
                );
            } else {
                confirm_large_output(input, prompt, &estimate)?;
            }
        }

        let mut output = OutputWriter::new(self.config.output.clone(), self.config.buffer_size)
            .with_context(|| format!("Cannot open output file {:?}", self.config.output))?;

        if !self.config.quiet {
            print_header(&format!(
                "Generating {} combinations...",
                format_number(estimate.total_combinations)
            ));
        }

        let start = Instant::now();
        let pb = if self.config.quiet {
            ProgressBar::hidden()
        } else {
            create_progress_bar(estimate.total_combinations, "")
        };

        let mut pending = 0u64;
        for word in Combinations::new(&parsed) {
            output
                .write_line(&word)
                .with_context(|| format!("Failed writing to {:?}", self.config.output))?;

            pending += 1;
            if pending == PROGRESS_BATCH {
                pb.inc(pending);
                pending = 0;
            }
        }
        pb.inc(pending);

        output
            .flush()
            .with_context(|| format!("Failed flushing {:?}", self.config.output))?;
        pb.finish_with_message("Complete".green().to_string());

        let report = GenerationReport {
            estimate,
            output: output.path().to_path_buf(),
            lines_written: output.lines_written(),
            bytes_written: output.bytes_written(),
            elapsed: start.elapsed(),
        };

        log::debug!("Generation finished: {:?}", report);

        if !self.config.quiet {
            print_success(&format!(
                "Done. Wordlist saved to {}",
                self.config.output.display()
            ));
            if self.config.verbose {
                report.print_summary();
            }
        }

        Ok(Some(report))
    }

    /// Dry run report
    fn dry_run_report(&self, estimate: &SizeEstimate) {
        print_header("DRY RUN - No files will be written");
        print_info(&format!("Pattern:      {}", self.config.pattern));
        print_info(&format!("Output:       {}", self.config.output.display()));
        print_info(&format!(
            "Combinations: {}",
            format_number(estimate.total_combinations)
        ));
        print_info(&format!("Line bytes:   {}", estimate.line_length()));
        print_info(&format!(
            "Estimated:    {:.2} MB ({})",
            estimate.estimated_mib(),
            estimate.human_size()
        ));

        if estimate.exceeds_threshold() {
            print_warning("Output exceeds 100 MB and would require confirmation");
        }
    }
}
