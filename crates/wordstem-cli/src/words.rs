//! Splitting raw text into words and the gaps between them.

use once_cell::sync::Lazy;
use regex::Regex;

static SEGMENT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\p{Alphabetic}+|\P{Alphabetic}+").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    Word,
    Gap,
}

/// A slice of the source text with its byte span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    pub kind: SegmentKind,
    pub text: &'a str,
    pub start: usize,
    pub end: usize,
}

/// Split `text` into alternating word / gap segments covering all of it.
pub fn split_words(text: &str) -> Vec<Segment<'_>> {
    SEGMENT_RE
        .find_iter(text)
        .map(|m| {
            let kind = if m.as_str().chars().next().is_some_and(char::is_alphabetic) {
                SegmentKind::Word
            } else {
                SegmentKind::Gap
            };
            Segment {
                kind,
                text: m.as_str(),
                start: m.start(),
                end: m.end(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_covers_input() {
        let text = "Cats, hopping\nponies 42x!";
        let segments = split_words(text);
        let rebuilt: String = segments.iter().map(|s| s.text).collect();
        assert_eq!(rebuilt, text);

        let words: Vec<&str> = segments
            .iter()
            .filter(|s| s.kind == SegmentKind::Word)
            .map(|s| s.text)
            .collect();
        assert_eq!(words, ["Cats", "hopping", "ponies", "x"]);
    }

    #[test]
    fn test_spans_are_byte_offsets() {
        let segments = split_words("café au");
        assert_eq!(segments[0].text, "café");
        assert_eq!((segments[0].start, segments[0].end), (0, 5));
        assert_eq!(segments[2].start, 6);
    }

    #[test]
    fn test_empty_text() {
        assert!(split_words("").is_empty());
    }
}
