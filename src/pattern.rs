//! Pattern parsing module
//!
//! Turns a HashCat-style mask such as `NCL-?u?u?u?u-?d?d?d?d` into an ordered
//! list of segments: fixed literal strings and wildcard character classes.

use std::fmt;

/// Marker character that introduces a wildcard token
pub const WILDCARD_MARKER: char = '?';

const DIGITS: &[char] = &['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];

const LOWER: &[char] = &[
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm',
    'n', 'o', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
];

const UPPER: &[char] = &[
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M',
    'N', 'O', 'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

const LOWER_HEX: &[char] = &[
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'a', 'b', 'c', 'd', 'e', 'f',
];

const UPPER_HEX: &[char] = &[
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'A', 'B', 'C', 'D', 'E', 'F',
];

/// Space followed by ASCII punctuation
const SYMBOLS: &[char] = &[
    ' ', '!', '"', '#', '$', '%', '&', '\'', '(', ')', '*', '+', ',', '-', '.', '/',
    ':', ';', '<', '=', '>', '?', '@', '[', '\\', ']', '^', '_', '`', '{', '|', '}', '~',
];

/// Letters, digits, space and punctuation
const ALL_PRINTABLE: &[char] = &[
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm',
    'n', 'o', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M',
    'N', 'O', 'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9',
    ' ', '!', '"', '#', '$', '%', '&', '\'', '(', ')', '*', '+', ',', '-', '.', '/',
    ':', ';', '<', '=', '>', '?', '@', '[', '\\', ']', '^', '_', '`', '{', '|', '}', '~',
];

/// Wildcard table: class letter following the marker, and the characters it expands to
pub const WILDCARDS: &[(char, &[char])] = &[
    ('a', ALL_PRINTABLE),
    ('d', DIGITS),
    ('l', LOWER),
    ('u', UPPER),
    ('h', LOWER_HEX),
    ('H', UPPER_HEX),
    ('s', SYMBOLS),
];

/// Look up the character set for the class letter of a `?x` token
pub fn lookup_wildcard(class: char) -> Option<&'static [char]> {
    WILDCARDS
        .iter()
        .find(|(c, _)| *c == class)
        .map(|(_, chars)| *chars)
}

/// One unit of a parsed pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Fixed text, contributes a single element
    Literal(String),
    /// Character class, one element per candidate character
    Class(&'static [char]),
}

impl Segment {
    /// Number of alternatives this segment offers
    #[inline]
    pub fn len(&self) -> usize {
        match self {
            Self::Literal(_) => 1,
            Self::Class(chars) => chars.len(),
        }
    }

    /// Segments always offer at least one alternative
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Characters this segment contributes to every generated word
    #[inline]
    pub fn width(&self) -> usize {
        match self {
            Self::Literal(text) => text.chars().count(),
            Self::Class(_) => 1,
        }
    }

    /// Append the alternative at `index` to `buf`
    #[inline]
    pub fn push_element(&self, index: usize, buf: &mut String) {
        match self {
            Self::Literal(text) => buf.push_str(text),
            Self::Class(chars) => buf.push(chars[index]),
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(text) => write!(f, "{:?}", text),
            Self::Class(chars) => write!(f, "[{} chars]", chars.len()),
        }
    }
}

/// Ordered list of segments produced from a pattern string
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedPattern {
    segments: Vec<Segment>,
}

impl ParsedPattern {
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// True for the empty pattern, which still yields one (empty) word
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

impl fmt::Display for ParsedPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.segments.iter().map(|s| s.to_string()).collect();
        write!(f, "{}", parts.join(" + "))
    }
}

/// Parse a pattern into segments.
///
/// A marker not followed by a known class letter (including a trailing
/// marker) is kept as literal text. Adjacent wildcards are never merged.
pub fn parse_pattern(pattern: &str) -> ParsedPattern {
    let chars: Vec<char> = pattern.chars().collect();
    let mut segments = Vec::new();
    let mut buffer = String::new();
    let mut i = 0;

    while i < chars.len() {
        if chars[i] == WILDCARD_MARKER && i + 1 < chars.len() {
            if let Some(class) = lookup_wildcard(chars[i + 1]) {
                if !buffer.is_empty() {
                    segments.push(Segment::Literal(std::mem::take(&mut buffer)));
                }
                segments.push(Segment::Class(class));
                i += 2;
                continue;
            }
        }

        buffer.push(chars[i]);
        i += 1;
    }

    if !buffer.is_empty() {
        segments.push(Segment::Literal(buffer));
    }

    ParsedPattern { segments }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wildcard_sizes() {
        assert_eq!(lookup_wildcard('a').unwrap().len(), 95);
        assert_eq!(lookup_wildcard('d').unwrap().len(), 10);
        assert_eq!(lookup_wildcard('l').unwrap().len(), 26);
        assert_eq!(lookup_wildcard('u').unwrap().len(), 26);
        assert_eq!(lookup_wildcard('h').unwrap().len(), 16);
        assert_eq!(lookup_wildcard('H').unwrap().len(), 16);
        assert_eq!(lookup_wildcard('s').unwrap().len(), 33);
        assert!(lookup_wildcard('x').is_none());
    }

    #[test]
    fn test_wildcard_classes_have_distinct_chars() {
        for (class, chars) in WILDCARDS {
            let mut sorted = chars.to_vec();
            sorted.sort_unstable();
            sorted.dedup();
            assert_eq!(sorted.len(), chars.len(), "duplicate in ?{}", class);
        }
    }

    #[test]
    fn test_literal_only() {
        let parsed = parse_pattern("password");
        assert_eq!(parsed.segments(), &[Segment::Literal("password".to_string())]);
    }

    #[test]
    fn test_mixed_pattern() {
        let parsed = parse_pattern("NCL-?u?u-?d");
        assert_eq!(
            parsed.segments(),
            &[
                Segment::Literal("NCL-".to_string()),
                Segment::Class(UPPER),
                Segment::Class(UPPER),
                Segment::Literal("-".to_string()),
                Segment::Class(DIGITS),
            ]
        );
    }

    #[test]
    fn test_empty_pattern() {
        let parsed = parse_pattern("");
        assert!(parsed.is_empty());
        assert_eq!(parsed.len(), 0);
    }

    #[test]
    fn test_trailing_marker() {
        let parsed = parse_pattern("abc?");
        assert_eq!(parsed.segments(), &[Segment::Literal("abc?".to_string())]);
    }

    #[test]
    fn test_unknown_token() {
        let parsed = parse_pattern("?x");
        assert_eq!(parsed.segments(), &[Segment::Literal("?x".to_string())]);
    }

    #[test]
    fn test_double_marker() {
        // "??" is not a token, the second marker still starts "?d"
        let parsed = parse_pattern("??d");
        assert_eq!(
            parsed.segments(),
            &[Segment::Literal("?".to_string()), Segment::Class(DIGITS)]
        );
    }

    #[test]
    fn test_unicode_literal() {
        let parsed = parse_pattern("hëllo?d");
        assert_eq!(parsed.segments()[0], Segment::Literal("hëllo".to_string()));
        assert_eq!(parsed.segments()[0].width(), 5);
    }

    #[test]
    fn test_display() {
        let parsed = parse_pattern("ab?d");
        assert_eq!(parsed.to_string(), "\"ab\" + [10 chars]");
    }
}
