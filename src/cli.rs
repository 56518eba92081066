//! Command-line interface definition for wordlist-generator
//!
//! Provides argument parsing and the interactive output-filename prompt.

use crate::output::DEFAULT_OUTPUT_NAME;
use clap::Parser;
use std::io::{BufRead, Write};
use std::path::PathBuf;

/// Generate a wordlist from a HashCat-style mask
///
/// Every combination the mask allows is written to the output file,
/// one word per line.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "wordlist-generator",
    author = "m0h1nd4",
    version,
    about = "Generate wordlist from HashCat-style pattern",
    long_about = r#"
Expand a HashCat-style mask into every word it matches.

WILDCARDS:
    ?a  - Letters, digits, space and punctuation (95 chars)
    ?d  - Digits 0-9
    ?l  - Lowercase a-z
    ?u  - Uppercase A-Z
    ?h  - Lowercase hex 0-9a-f
    ?H  - Uppercase hex 0-9A-F
    ?s  - Space and punctuation (33 chars)

Any other character, including a '?' not followed by one of the letters
above, is copied literally.

EXAMPLES:
    # License-plate style keyspace
    wordlist-generator "NCL-?u?u?u?u-?d?d?d?d" -o plates.txt

    # Four-digit PINs
    wordlist-generator "?d?d?d?d" -o pins.txt

    # Show the estimate only
    wordlist-generator "Summer20?d?d?s" --dry-run
"#
)]
pub struct Args {
    /// Pattern string using HashCat-style wildcards (e.g. NCL-?u?u?u?u-?d?d?d?d)
    #[arg(value_name = "PATTERN")]
    pub pattern: String,

    /// Output filename (prompted for when omitted, default: wordlist.txt)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Skip the confirmation for outputs larger than 100 MB
    #[arg(short, long, default_value_t = false)]
    pub yes: bool,

    /// Only print the estimate, do not write anything
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,

    /// Quiet mode - minimal output
    #[arg(short, long, default_value_t = false)]
    pub quiet: bool,

    /// Verbose mode - detailed logging
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,

    /// Write buffer size (default: 64MB)
    #[arg(long, value_name = "SIZE", default_value = "64MB")]
    pub buffer_size: String,
}

impl Args {
    /// Parse buffer size string to bytes
    pub fn parse_buffer_size(&self) -> anyhow::Result<usize> {
        let size = parse_size(&self.buffer_size)?;
        if size == 0 {
            anyhow::bail!("Buffer size must be greater than zero");
        }
        Ok(size)
    }
}

/// Ask for the output filename. Empty input selects `wordlist.txt`.
pub fn prompt_output_name<R, W>(mut input: R, mut prompt: W) -> std::io::Result<PathBuf>
where
    R: BufRead,
    W: Write,
{
    write!(prompt, "Enter output filename [{}]: ", DEFAULT_OUTPUT_NAME)?;
    prompt.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;

    let name = answer.trim();
    if name.is_empty() {
        Ok(PathBuf::from(DEFAULT_OUTPUT_NAME))
    } else {
        Ok(PathBuf::from(name))
    }
}

/// Parse human-readable size string to bytes
fn parse_size(size_str: &str) -> anyhow::Result<usize> {
    let size_str = size_str.trim().to_uppercase();

    let (num_str, multiplier) = if let Some(n) = size_str.strip_suffix("GB") {
        (n, 1024 * 1024 * 1024)
    } else if let Some(n) = size_str.strip_suffix("MB") {
        (n, 1024 * 1024)
    } else if let Some(n) = size_str.strip_suffix("KB") {
        (n, 1024)
    } else if let Some(n) = size_str.strip_suffix('B') {
        (n, 1)
    } else {
        (size_str.as_str(), 1)
    };

    let num: usize = num_str
        .trim()
        .parse()
        .map_err(|_| anyhow::anyhow!("Invalid size format: '{}'", size_str))?;

    num.checked_mul(multiplier)
        .ok_or_else(|| anyhow::anyhow!("Size too large: '{}'", size_str))
}
