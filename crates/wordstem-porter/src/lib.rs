//! Wordstem Porter — suffix-stripping stemmer for English words.
//!
//! The algorithm runs eight fixed rewrite steps over a per-call buffer.
//! Rules are gated by the *measure* of the remaining stem (its count of
//! vowel-consonant transitions), so short roots keep their endings.

pub mod buffer;
pub mod classify;
pub mod measure;
pub mod stage;
pub mod stemmer;
pub mod steps;
pub mod token;

pub use stage::{StageReport, StemStage};
pub use stemmer::{PorterStemmer, StemEngine, StepTrace, MIN_STEMMABLE_LEN};
pub use steps::{Guard, Step, SuffixRule};
pub use token::{Token, TokenTransform};
