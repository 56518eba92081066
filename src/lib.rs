//! # Wordlist Generator
//!
//! Expands HashCat-style masks into exhaustive wordlists.
//!
//! ## Features
//!
//! - **Wildcards**: `?a ?d ?l ?u ?h ?H ?s`, everything else is literal
//! - **Size estimate**: exact keyspace and byte count before anything is written
//! - **Confirmation gate**: outputs over 100 MB need an explicit `y`
//! - **Streaming**: combinations are generated lazily, memory use is constant
//!
//! ## Usage
//!
//! ```bash
//! # Every plate from NCL-AAAA-0000 to NCL-ZZZZ-9999
//! wordlist-generator "NCL-?u?u?u?u-?d?d?d?d" -o plates.txt
//!
//! # Prompt for the output name
//! wordlist-generator "?d?d?d?d"
//! ```
//!
//! ## Example
//!
//! ```rust
//! use wordlist_generator::estimate::estimate;
//! use wordlist_generator::generator::Combinations;
//! use wordlist_generator::pattern::parse_pattern;
//!
//! let parsed = parse_pattern("pin?d?d");
//! assert_eq!(estimate(&parsed).unwrap().total_combinations, 100);
//!
//! let mut words = Combinations::new(&parsed);
//! assert_eq!(words.next().as_deref(), Some("pin00"));
//! assert_eq!(words.last().as_deref(), Some("pin99"));
//! ```

pub mod cli;
pub mod error;
pub mod estimate;
pub mod generator;
pub mod output;
pub mod pattern;
pub mod processor;
pub mod progress;

pub use cli::Args;
pub use error::GeneratorError;
pub use pattern::{parse_pattern, ParsedPattern, Segment};
pub use processor::{Processor, ProcessorConfig};
