//! Call-local working buffer with the suffix primitives.
//!
//! The live stem is `chars[..]` (the classic `k` is `chars.len() - 1`). After a
//! successful [`StemBuffer::ends`], `mark` is the length of the part in front of
//! the suffix (the classic `j + 1`).

use crate::measure::{cvc, double_consonant, has_vowel, measure};

#[derive(Debug, Clone)]
pub struct StemBuffer {
    chars: Vec<char>,
    mark: usize,
}

impl StemBuffer {
    pub fn new(word: &str) -> Self {
        let chars: Vec<char> = word.chars().collect();
        let mark = chars.len();
        Self { chars, mark }
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn last(&self) -> Option<char> {
        self.chars.last().copied()
    }

    /// Test whether the stem ends with `suffix`. On success the mark moves to
    /// the start of the suffix; on failure nothing changes.
    pub fn ends(&mut self, suffix: &str) -> bool {
        let n = suffix.chars().count();
        if n > self.chars.len() {
            return false;
        }
        let start = self.chars.len() - n;
        if !self.chars[start..].iter().copied().eq(suffix.chars()) {
            return false;
        }
        self.mark = start;
        true
    }

    /// Replace everything after the mark with `replacement`.
    pub fn set_to(&mut self, replacement: &str) {
        self.chars.truncate(self.mark);
        self.chars.extend(replacement.chars());
    }

    /// Cut the stem back to the mark, dropping the matched suffix.
    pub fn truncate_to_mark(&mut self) {
        self.chars.truncate(self.mark);
        self.mark = self.chars.len();
    }

    pub fn pop(&mut self) -> Option<char> {
        let c = self.chars.pop();
        self.mark = self.mark.min(self.chars.len());
        c
    }

    pub fn push(&mut self, c: char) {
        self.chars.push(c);
    }

    /// Character just before the mark, if any.
    pub fn before_mark(&self) -> Option<char> {
        self.mark.checked_sub(1).map(|i| self.chars[i])
    }

    /// Measure of the part in front of the mark.
    pub fn stem_measure(&self) -> usize {
        measure(&self.chars[..self.mark])
    }

    /// Measure of the whole live stem.
    pub fn word_measure(&self) -> usize {
        measure(&self.chars)
    }

    /// True if the part in front of the mark contains a vowel.
    pub fn vowel_in_stem(&self) -> bool {
        has_vowel(&self.chars[..self.mark])
    }

    /// True if the stem ends in a doubled consonant.
    pub fn ends_double_consonant(&self) -> bool {
        !self.chars.is_empty() && double_consonant(&self.chars, self.chars.len() - 1)
    }

    /// True if the stem has a consonant-vowel-consonant shape ending `back`
    /// positions before its last character.
    pub fn cvc_from_end(&self, back: usize) -> bool {
        match self.chars.len().checked_sub(1 + back) {
            Some(i) => cvc(&self.chars, i),
            None => false,
        }
    }

    pub fn as_string(&self) -> String {
        self.chars.iter().collect()
    }

    pub fn into_string(self) -> String {
        self.chars.into_iter().collect()
    }
}
