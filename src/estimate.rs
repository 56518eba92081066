//! Keyspace and output size estimation
//!
//! Computes how many words a pattern expands to and how large the resulting
//! file will be, and gates very large runs behind an operator confirmation.

use crate::error::{GeneratorError, Result};
use crate::pattern::ParsedPattern;
use bytesize::ByteSize;
use std::io::{BufRead, Write};

/// Outputs larger than this (100 MiB) require confirmation
pub const LARGE_OUTPUT_THRESHOLD: u128 = 100 * 1024 * 1024;

const MIB: f64 = 1024.0 * 1024.0;

/// Size estimate for a parsed pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeEstimate {
    /// Product of every segment's element count
    pub total_combinations: u128,
    /// Sum of segment widths, i.e. characters per generated word
    pub avg_segment_length: usize,
    /// `total_combinations * (avg_segment_length + 1)`
    pub estimated_bytes: u128,
}

impl SizeEstimate {
    /// Bytes per output line including the newline
    pub fn line_length(&self) -> usize {
        self.avg_segment_length + 1
    }

    pub fn estimated_mib(&self) -> f64 {
        self.estimated_bytes as f64 / MIB
    }

    pub fn exceeds_threshold(&self) -> bool {
        self.estimated_bytes > LARGE_OUTPUT_THRESHOLD
    }

    /// Human-readable size, saturating at `u64::MAX`
    pub fn human_size(&self) -> ByteSize {
        ByteSize(u64::try_from(self.estimated_bytes).unwrap_or(u64::MAX))
    }
}

/// Estimate keyspace and output size, failing instead of wrapping on overflow
pub fn estimate(pattern: &ParsedPattern) -> Result<SizeEstimate> {
    let overflow = || GeneratorError::KeyspaceOverflow {
        segments: pattern.len(),
    };

    let total_combinations = pattern
        .segments()
        .iter()
        .try_fold(1u128, |acc, seg| acc.checked_mul(seg.len() as u128))
        .ok_or_else(overflow)?;

    let avg_segment_length: usize = pattern.segments().iter().map(|s| s.width()).sum();

    let estimated_bytes = total_combinations
        .checked_mul(avg_segment_length as u128 + 1)
        .ok_or_else(overflow)?;

    let estimate = SizeEstimate {
        total_combinations,
        avg_segment_length,
        estimated_bytes,
    };

    log::debug!(
        "Estimated {} combinations, {} bytes per line, {} bytes total",
        estimate.total_combinations,
        estimate.line_length(),
        estimate.estimated_bytes
    );

    Ok(estimate)
}

/// Ask the operator to confirm a large output.
///
/// Only `y` / `yes` (any case) proceeds. Anything else, including an empty
/// line or end of input, yields [`GeneratorError::Aborted`].
pub fn confirm_large_output<R, W>(mut input: R, mut prompt: W, estimate: &SizeEstimate) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    write!(
        prompt,
        "[!] Estimated file size is {:.2} MB. Continue? [y/N] ",
        estimate.estimated_mib()
    )?;
    prompt.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;

    match answer.trim().to_lowercase().as_str() {
        "y" | "yes" => Ok(()),
        _ => Err(GeneratorError::Aborted),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::parse_pattern;
    use std::io::Cursor;

    #[test]
    fn test_literal_pattern() {
        let est = estimate(&parse_pattern("password")).unwrap();
        assert_eq!(est.total_combinations, 1);
        assert_eq!(est.avg_segment_length, 8);
        assert_eq!(est.estimated_bytes, 9);
    }

    #[test]
    fn test_empty_pattern() {
        let est = estimate(&parse_pattern("")).unwrap();
        assert_eq!(est.total_combinations, 1);
        assert_eq!(est.estimated_bytes, 1);
    }

    #[test]
    fn test_mixed_pattern() {
        // "NCL-" + 4 upper + "-" + 4 digits = 13 chars per word
        let est = estimate(&parse_pattern("NCL-?u?u?u?u-?d?d?d?d")).unwrap();
        assert_eq!(est.total_combinations, 26u128.pow(4) * 10u128.pow(4));
        assert_eq!(est.avg_segment_length, 13);
        assert_eq!(est.estimated_bytes, est.total_combinations * 14);
        assert!(est.exceeds_threshold());
    }

    #[test]
    fn test_threshold_far_from_boundary() {
        // 10^6 * 9 bytes is well below 100 MiB
        let est = estimate(&parse_pattern("?d?d?d?d?d?d??")).unwrap();
        assert!(!est.exceeds_threshold());
        // 10^8 * 9 bytes is above it
        let est = estimate(&parse_pattern("?d?d?d?d?d?d?d?d")).unwrap();
        assert!(est.exceeds_threshold());
    }

    #[test]
    fn test_threshold_is_strictly_greater() {
        // 16^5 words of 100 bytes each is exactly 100 MiB
        let exact = format!("{}?h?h?h?h?h", "x".repeat(94));
        let est = estimate(&parse_pattern(&exact)).unwrap();
        assert_eq!(est.estimated_bytes, LARGE_OUTPUT_THRESHOLD);
        assert!(!est.exceeds_threshold());

        let over = format!("{}?h?h?h?h?h", "x".repeat(95));
        let est = estimate(&parse_pattern(&over)).unwrap();
        assert_eq!(est.estimated_bytes, LARGE_OUTPUT_THRESHOLD + 16u128.pow(5));
        assert!(est.exceeds_threshold());
    }

    #[test]
    fn test_line_length_includes_newline() {
        let est = estimate(&parse_pattern("ab?d-?u")).unwrap();
        assert_eq!(est.avg_segment_length, 5);
        assert_eq!(est.line_length(), 6);
        assert_eq!(est.estimated_bytes, est.total_combinations * est.line_length() as u128);

        assert_eq!(estimate(&parse_pattern("")).unwrap().line_length(), 1);
    }

    #[test]
    fn test_overflow_is_reported() {
        let pattern = "?a".repeat(40);
        let err = estimate(&parse_pattern(&pattern)).unwrap_err();
        assert!(matches!(err, GeneratorError::KeyspaceOverflow { segments: 40 }));
        assert!(err.to_string().contains("--yes does not bypass"));
    }

    #[test]
    fn test_confirm_accepts_yes() {
        let est = estimate(&parse_pattern("?d?d?d?d?d?d?d?d")).unwrap();
        let mut out = Vec::new();
        confirm_large_output(Cursor::new("Y\n"), &mut out, &est).unwrap();
        confirm_large_output(Cursor::new("yes\n"), &mut Vec::new(), &est).unwrap();

        let prompt = String::from_utf8(out).unwrap();
        assert!(prompt.contains("858.31 MB"), "prompt was {:?}", prompt);
    }

    #[test]
    fn test_confirm_rejects_other_answers() {
        let est = estimate(&parse_pattern("?d?d?d?d?d?d?d?d")).unwrap();
        for answer in ["n\n", "\n", "", "sure\n"] {
            let result = confirm_large_output(Cursor::new(answer), &mut Vec::new(), &est);
            assert!(matches!(result, Err(GeneratorError::Aborted)), "answer {:?}", answer);
        }
    }
}
