//! Lazy combination generator
//!
//! Walks the cartesian product of a pattern's segments with an odometer:
//! one index per segment, the last segment turning fastest. Nothing beyond
//! the current index vector is ever held in memory.

use crate::pattern::ParsedPattern;

/// Iterator over every word a pattern expands to, in odometer order
#[derive(Debug, Clone)]
pub struct Combinations<'a> {
    pattern: &'a ParsedPattern,
    indices: Vec<usize>,
    width_hint: usize,
    produced: u128,
    done: bool,
}

impl<'a> Combinations<'a> {
    /// Start at the first combination (all indices zero)
    pub fn new(pattern: &'a ParsedPattern) -> Self {
        let width_hint = pattern.segments().iter().map(|s| s.width()).sum();

        Self {
            pattern,
            indices: vec![0; pattern.len()],
            width_hint,
            produced: 0,
            done: false,
        }
    }

    /// Number of words yielded so far
    pub fn produced(&self) -> u128 {
        self.produced
    }

    fn current(&self) -> String {
        let mut word = String::with_capacity(self.width_hint);
        for (segment, &index) in self.pattern.segments().iter().zip(&self.indices) {
            segment.push_element(index, &mut word);
        }
        word
    }

    /// Increment with carry. Returns false once the leftmost index rolls over.
    fn advance(&mut self) -> bool {
        let pattern = self.pattern;
        for (pos, segment) in pattern.segments().iter().enumerate().rev() {
            self.indices[pos] += 1;
            if self.indices[pos] < segment.len() {
                return true;
            }
            self.indices[pos] = 0;
        }
        false
    }
}

impl Iterator for Combinations<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.done {
            return None;
        }

        let word = self.current();
        self.produced += 1;
        if !self.advance() {
            self.done = true;
        }

        Some(word)
    }
}
