//! Public stemming entry points.
//!
//! [`PorterStemmer`] is the pure algorithm: every call works in its own
//! buffer, so one value can be shared across threads. [`StemEngine`] adds the
//! token attribute policy and remembers the most recent result.

use parking_lot::Mutex;
use tracing::trace;

use wordstem_core::{Error, Result, StemConfig, TagPolicy};

use crate::buffer::StemBuffer;
use crate::steps::Step;
use crate::token::{Token, TokenTransform};

/// Words of this many characters or fewer are returned unchanged.
pub const MIN_STEMMABLE_LEN: usize = 3;

/// Output of one step while tracing a word through the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepTrace {
    pub step: Step,
    pub stem: String,
}

/// The Porter suffix-stripping algorithm.
#[derive(Debug, Clone, Copy, Default)]
pub struct PorterStemmer;

impl PorterStemmer {
    pub fn new() -> Self {
        Self
    }

    /// Stem `word`. Case is preserved and never folded.
    ///
    /// The result is the stem after the last step (5b). Single-step examples
    /// such as `agreed -> agree` (step 1b) or `relational -> relate` (step 2)
    /// are intermediate results: step 5a then drops the final `e`, giving
    /// `agre` and `relat`. Use [`stem_through`](Self::stem_through) to stop
    /// after an earlier step.
    pub fn stem(&self, word: &str) -> String {
        self.stem_through(word, Step::Step5b)
    }

    /// Run the pipeline up to and including `last`, returning the stem at
    /// that point.
    pub fn stem_through(&self, word: &str, last: Step) -> String {
        let mut buf = StemBuffer::new(word);
        if buf.len() < MIN_STEMMABLE_LEN {
            return word.to_string();
        }

        for step in Step::all().iter().take_while(|s| **s <= last) {
            if tracing::enabled!(tracing::Level::TRACE) {
                let before = buf.as_string();
                step.run(&mut buf);
                let after = buf.as_string();
                if before != after {
                    trace!("{}: {} -> {}", step, before, after);
                }
            } else {
                step.run(&mut buf);
            }
        }

        buf.into_string()
    }

    /// Stem `word`, recording the stem after every step.
    pub fn trace(&self, word: &str) -> Vec<StepTrace> {
        let mut buf = StemBuffer::new(word);
        let stemmable = buf.len() >= MIN_STEMMABLE_LEN;

        Step::all()
            .iter()
            .map(|&step| {
                if stemmable {
                    step.run(&mut buf);
                }
                StepTrace {
                    step,
                    stem: buf.as_string(),
                }
            })
            .collect()
    }
}

impl TokenTransform for PorterStemmer {
    fn apply(&self, token: &Token) -> Token {
        token.with_word(self.stem(&token.word), TagPolicy::Keep)
    }

    fn name(&self) -> &'static str {
        "porter"
    }
}

/// Stemmer front end for text and tokens.
///
/// Keeps the last stem produced for inspection. That record is the only
/// state shared between calls and sits behind a lock, so concurrent callers
/// see the result of whichever call finished last.
pub struct StemEngine {
    stemmer: PorterStemmer,
    tag_policy: TagPolicy,
    last: Mutex<Option<String>>,
}

impl StemEngine {
    pub fn new() -> Self {
        Self::with_tag_policy(TagPolicy::default())
    }

    pub fn with_tag_policy(tag_policy: TagPolicy) -> Self {
        Self {
            stemmer: PorterStemmer::new(),
            tag_policy,
            last: Mutex::new(None),
        }
    }

    pub fn from_config(config: &StemConfig) -> Self {
        Self::with_tag_policy(config.tag_policy)
    }

    pub fn tag_policy(&self) -> TagPolicy {
        self.tag_policy
    }

    /// The underlying algorithm, for callers that need per-step output.
    pub fn stemmer(&self) -> &PorterStemmer {
        &self.stemmer
    }

    pub fn stem(&self, text: &str) -> String {
        let stem = self.stemmer.stem(text);
        *self.last.lock() = Some(stem.clone());
        stem
    }

    /// Stem possibly-absent text. `None` is an invalid argument and leaves the
    /// last result untouched.
    pub fn stem_checked(&self, text: Option<&str>) -> Result<String> {
        let text = text.ok_or_else(|| Error::InvalidArgument("cannot stem null text".into()))?;
        Ok(self.stem(text))
    }

    /// New token carrying the stem of `token.word`.
    pub fn stem_token(&self, token: &Token) -> Token {
        token.with_word(self.stem(&token.word), self.tag_policy)
    }

    pub fn stem_token_checked(&self, token: Option<&Token>) -> Result<Token> {
        let token = token.ok_or_else(|| Error::InvalidArgument("cannot stem null token".into()))?;
        Ok(self.stem_token(token))
    }

    pub fn apply_checked(&self, token: Option<&Token>) -> Result<Token> {
        self.stem_token_checked(token)
    }

    /// The stem produced by the most recent successful call, if any.
    pub fn last_stem(&self) -> Option<String> {
        self.last.lock().clone()
    }
}

impl Default for StemEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenTransform for StemEngine {
    fn apply(&self, token: &Token) -> Token {
        self.stem_token(token)
    }

    fn name(&self) -> &'static str {
        "porter"
    }
}
