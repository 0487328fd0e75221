//! Vowel / consonant classification of buffer positions.
//!
//! `a e i o u` are vowels. `y` is a vowel when it follows a consonant and a
//! consonant otherwise (word start, after a vowel, after a non-letter). Any
//! other alphabetic character is a consonant. Non-alphabetic characters are
//! neither, so no rule that needs a letter can ever match across them.

/// Class of a single position in a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Class {
    Vowel,
    Consonant,
    Other,
}

impl Class {
    /// Class of `c` given the class of the character just before it
    /// (`None` at the start of the word). Only `y` looks at `prev`.
    pub fn of(c: char, prev: Option<Class>) -> Class {
        match c {
            'a' | 'e' | 'i' | 'o' | 'u' => Class::Vowel,
            'y' => match prev {
                Some(Class::Consonant) => Class::Vowel,
                _ => Class::Consonant,
            },
            c if c.is_alphabetic() => Class::Consonant,
            _ => Class::Other,
        }
    }
}

/// Classify position `i` of `word`.
///
/// Only a run of `y`s makes the answer depend on earlier positions. The scan
/// walks back to the start of that run, where the predecessor is fixed, and
/// then folds forward, so cost is bounded by the run length.
pub fn class_at(word: &[char], i: usize) -> Class {
    if word[i] != 'y' {
        return Class::of(word[i], None);
    }

    let mut start = i;
    while start > 0 && word[start - 1] == 'y' {
        start -= 1;
    }

    let mut class = if start == 0 {
        None
    } else {
        Some(Class::of(word[start - 1], None))
    };
    for _ in start..=i {
        class = Some(Class::of('y', class));
    }
    class.unwrap_or(Class::Consonant)
}

pub fn is_consonant(word: &[char], i: usize) -> bool {
    class_at(word, i) == Class::Consonant
}

pub fn is_vowel(word: &[char], i: usize) -> bool {
    class_at(word, i) == Class::Vowel
}
