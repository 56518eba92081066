//! Wordlist Generator - HashCat-style mask expansion for penetration testing
//!
//! Main entry point for the command-line application.

use clap::Parser;
use std::io;
use std::path::PathBuf;
use std::process;

use wordlist_generator::cli::{prompt_output_name, Args};
use wordlist_generator::processor::{Processor, ProcessorConfig};
use wordlist_generator::progress::{print_banner, print_error};
use wordlist_generator::GeneratorError;

fn main() {
    // Parse command-line arguments
    let args = Args::parse();

    // Set up logging
    if args.verbose {
        std::env::set_var("RUST_LOG", "debug");
    } else if !args.quiet {
        std::env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    if let Err(e) = run(args) {
        if let Some(GeneratorError::Aborted) = e.downcast_ref::<GeneratorError>() {
            println!("Aborted.");
            process::exit(1);
        }

        print_error(&format!("{}", e));

        // Print chain of errors
        for cause in e.chain().skip(1) {
            print_error(&format!("  Caused by: {}", cause));
        }

        process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    if args.verbose && !args.quiet {
        print_banner();
    }

    let output = resolve_output(&args)?;
    let config = ProcessorConfig::from_args(&args, output)?;

    let processor = Processor::new(config);
    processor.run()?;

    Ok(())
}

/// Use `-o` when given, otherwise ask on stdin
fn resolve_output(args: &Args) -> anyhow::Result<PathBuf> {
    match args.output {
        Some(ref path) => Ok(path.clone()),
        None if args.dry_run => Ok(PathBuf::from(wordlist_generator::output::DEFAULT_OUTPUT_NAME)),
        None => Ok(prompt_output_name(io::stdin().lock(), io::stdout())?),
    }
}
