//! The eight rewrite steps and their ordered suffix tables.
//!
//! Each step runs once per word, in [`Step::all`] order. The table-driven steps
//! (2, 3, 4) stop at the first suffix that matches, whether or not its guard
//! then allows the rewrite.

use std::fmt;

use crate::buffer::StemBuffer;

/// A pipeline stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Step {
    /// Plurals: `sses`, `ies`, `ss`, `s`.
    Step1a,
    /// Past and progressive: `eed`, `ed`, `ing`, with clean-up.
    Step1b,
    /// Terminal `y` to `i`.
    Step1c,
    Step2,
    Step3,
    Step4,
    /// Final `e`.
    Step5a,
    /// Final `ll`.
    Step5b,
}

impl Step {
    pub fn all() -> &'static [Step] {
        &[
            Self::Step1a,
            Self::Step1b,
            Self::Step1c,
            Self::Step2,
            Self::Step3,
            Self::Step4,
            Self::Step5a,
            Self::Step5b,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Step1a => "1a",
            Self::Step1b => "1b",
            Self::Step1c => "1c",
            Self::Step2 => "2",
            Self::Step3 => "3",
            Self::Step4 => "4",
            Self::Step5a => "5a",
            Self::Step5b => "5b",
        }
    }

    pub(crate) fn run(&self, buf: &mut StemBuffer) {
        match self {
            Self::Step1a => step1a(buf),
            Self::Step1b => step1b(buf),
            Self::Step1c => step1c(buf),
            Self::Step2 => {
                apply_rules(buf, STEP2_RULES);
            }
            Self::Step3 => {
                apply_rules(buf, STEP3_RULES);
            }
            Self::Step4 => {
                apply_rules(buf, STEP4_RULES);
            }
            Self::Step5a => step5a(buf),
            Self::Step5b => step5b(buf),
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "step {}", self.name())
    }
}

/// Condition on the stem in front of a matched suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guard {
    /// `m() > n`
    MeasureAbove(usize),
    /// `m() > n` and the stem ends in one of the listed characters.
    MeasureAboveAfter(usize, &'static [char]),
}

impl Guard {
    fn holds(&self, buf: &StemBuffer) -> bool {
        match *self {
            Guard::MeasureAbove(n) => buf.stem_measure() > n,
            Guard::MeasureAboveAfter(n, endings) => {
                buf.before_mark().is_some_and(|c| endings.contains(&c)) && buf.stem_measure() > n
            }
        }
    }
}

/// One `suffix -> replacement` rewrite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuffixRule {
    pub suffix: &'static str,
    pub replacement: &'static str,
    pub guard: Guard,
}

const fn rule(suffix: &'static str, replacement: &'static str, guard: Guard) -> SuffixRule {
    SuffixRule {
        suffix,
        replacement,
        guard,
    }
}

const M0: Guard = Guard::MeasureAbove(0);
const M1: Guard = Guard::MeasureAbove(1);

pub const STEP2_RULES: &[SuffixRule] = &[
    rule("ational", "ate", M0),
    rule("tional", "tion", M0),
    rule("enci", "ence", M0),
    rule("anci", "ance", M0),
    rule("izer", "ize", M0),
    rule("abli", "able", M0),
    rule("alli", "al", M0),
    rule("entli", "ent", M0),
    rule("eli", "e", M0),
    rule("ousli", "ous", M0),
    rule("ization", "ize", M0),
    rule("ation", "ate", M0),
    rule("ator", "ate", M0),
    rule("alism", "al", M0),
    rule("iveness", "ive", M0),
    rule("fulness", "ful", M0),
    rule("ousness", "ous", M0),
    rule("aliti", "al", M0),
    rule("iviti", "ive", M0),
    rule("biliti", "ble", M0),
    rule("logi", "log", M0),
];

pub const STEP3_RULES: &[SuffixRule] = &[
    rule("icate", "ic", M0),
    rule("ative", "", M0),
    rule("alize", "al", M0),
    rule("iciti", "ic", M0),
    rule("ical", "ic", M0),
    rule("ful", "", M0),
    rule("ness", "", M0),
];

pub const STEP4_RULES: &[SuffixRule] = &[
    rule("al", "", M1),
    rule("ance", "", M1),
    rule("ence", "", M1),
    rule("er", "", M1),
    rule("ic", "", M1),
    rule("able", "", M1),
    rule("ible", "", M1),
    rule("ant", "", M1),
    rule("ement", "", M1),
    rule("ment", "", M1),
    rule("ent", "", M1),
    rule("ion", "", Guard::MeasureAboveAfter(1, &['s', 't'])),
    rule("ou", "", M1),
    rule("ism", "", M1),
    rule("ate", "", M1),
    rule("iti", "", M1),
    rule("ous", "", M1),
    rule("ive", "", M1),
    rule("ize", "", M1),
];

/// Apply the first rule whose suffix matches, if its guard holds.
/// Returns the matched rule.
pub(crate) fn apply_rules(buf: &mut StemBuffer, rules: &'static [SuffixRule]) -> Option<&'static SuffixRule> {
    let matched = rules.iter().find(|r| buf.ends(r.suffix))?;
    if matched.guard.holds(buf) {
        buf.set_to(matched.replacement);
    }
    Some(matched)
}

fn step1a(buf: &mut StemBuffer) {
    if buf.last() != Some('s') {
        return;
    }
    if buf.ends("sses") {
        buf.set_to("ss");
    } else if buf.ends("ies") {
        buf.set_to("i");
    } else if buf.ends("ss") {
        // kept as is
    } else {
        buf.pop();
    }
}

fn step1b(buf: &mut StemBuffer) {
    if buf.ends("eed") {
        if buf.stem_measure() > 0 {
            buf.set_to("ee");
        }
        return;
    }

    let stripped = (buf.ends("ed") || buf.ends("ing")) && buf.vowel_in_stem();
    if !stripped {
        return;
    }
    buf.truncate_to_mark();

    if buf.ends("at") || buf.ends("bl") || buf.ends("iz") {
        buf.push('e');
    } else if buf.ends_double_consonant() {
        if !matches!(buf.last(), Some('l' | 's' | 'z')) {
            buf.pop();
        }
    } else if buf.word_measure() == 1 && buf.cvc_from_end(0) {
        buf.push('e');
    }
}

fn step1c(buf: &mut StemBuffer) {
    if buf.ends("y") && buf.vowel_in_stem() {
        buf.set_to("i");
    }
}

fn step5a(buf: &mut StemBuffer) {
    if buf.last() != Some('e') {
        return;
    }
    let m = buf.word_measure();
    if m > 1 || (m == 1 && !buf.cvc_from_end(1)) {
        buf.pop();
    }
}

fn step5b(buf: &mut StemBuffer) {
    if buf.last() == Some('l') && buf.ends_double_consonant() && buf.word_measure() > 1 {
        buf.pop();
    }
}
