//! Measure and shape predicates over a classified word.

use crate::classify::{is_consonant, is_vowel, Class};

/// Number of vowel-run to consonant-run transitions in `stem`.
///
/// Writing a word as `[C](VC){m}[V]`, this is `m`. A non-letter ends the
/// current vowel run without counting.
pub fn measure(stem: &[char]) -> usize {
    let mut m = 0;
    let mut prev: Option<Class> = None;

    for &c in stem {
        let class = Class::of(c, prev);
        if prev == Some(Class::Vowel) && class == Class::Consonant {
            m += 1;
        }
        prev = Some(class);
    }

    m
}

/// True if any position of `stem` is a vowel.
pub fn has_vowel(stem: &[char]) -> bool {
    let mut prev: Option<Class> = None;
    for &c in stem {
        let class = Class::of(c, prev);
        if class == Class::Vowel {
            return true;
        }
        prev = Some(class);
    }
    false
}

/// True if `word[i]` and `word[i - 1]` are the same consonant.
pub fn double_consonant(word: &[char], i: usize) -> bool {
    i >= 1 && i < word.len() && word[i] == word[i - 1] && is_consonant(word, i)
}

/// True if `word[i - 2..=i]` is consonant-vowel-consonant and the last
/// consonant is not `w`, `x` or `y`.
pub fn cvc(word: &[char], i: usize) -> bool {
    if i < 2 || i >= word.len() {
        return false;
    }
    if matches!(word[i], 'w' | 'x' | 'y') {
        return false;
    }
    is_consonant(word, i) && is_vowel(word, i - 1) && is_consonant(word, i - 2)
}
