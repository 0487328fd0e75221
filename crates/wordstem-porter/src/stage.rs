//! Batch stage: run a [`TokenTransform`] over a token sequence.

use serde::Serialize;
use tracing::debug;

use crate::token::{Token, TokenTransform};

/// Summary of one stage run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StageReport {
    /// Tokens seen.
    pub tokens: usize,
    /// Tokens whose word was rewritten.
    pub changed: usize,
}

/// Pipeline stage applying one transform to every token, in order.
pub struct StemStage<T: TokenTransform> {
    transform: T,
}

impl<T: TokenTransform> StemStage<T> {
    pub fn new(transform: T) -> Self {
        Self { transform }
    }

    pub fn transform(&self) -> &T {
        &self.transform
    }

    pub fn run<'a, I>(&self, tokens: I) -> (Vec<Token>, StageReport)
    where
        I: IntoIterator<Item = &'a Token>,
    {
        let mut report = StageReport::default();
        let out: Vec<Token> = tokens
            .into_iter()
            .map(|token| {
                let next = self.transform.apply(token);
                report.tokens += 1;
                if next.word != token.word {
                    report.changed += 1;
                }
                next
            })
            .collect();

        debug!(
            "Stage {}: {} tokens, {} changed",
            self.transform.name(),
            report.tokens,
            report.changed
        );

        (out, report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stemmer::{PorterStemmer, StemEngine};

    #[test]
    fn test_stage_stems_in_order() {
        let stage = StemStage::new(PorterStemmer::new());
        let tokens: Vec<Token> = ["The", "developers", "are", "programming", "applications"]
            .into_iter()
            .map(Token::new)
            .collect();

        let (out, report) = stage.run(&tokens);
        let words: Vec<&str> = out.iter().map(|t| t.word.as_str()).collect();
        assert_eq!(words, ["The", "develop", "ar", "program", "applic"]);
        assert_eq!(report, StageReport { tokens: 5, changed: 4 });
    }

    #[test]
    fn test_stage_with_engine_tracks_last() {
        let stage = StemStage::new(StemEngine::new());
        let tokens = vec![Token::new("cats"), Token::new("hopping")];
        let (_, report) = stage.run(tokens.iter());
        assert_eq!(report.changed, 2);
        assert_eq!(stage.transform().last_stem().as_deref(), Some("hop"));
    }

    #[test]
    fn test_empty_input() {
        let stage = StemStage::new(PorterStemmer::new());
        let empty: Vec<Token> = Vec::new();
        let (out, report) = stage.run(&empty);
        assert!(out.is_empty());
        assert_eq!(report, StageReport::default());
    }
}
