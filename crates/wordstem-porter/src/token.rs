//! Token model and the single-argument transform contract.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use wordstem_core::{Error, Result, TagPolicy};

/// A word with optional annotations, as produced by an upstream tokenizer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub word: String,
    /// Grammatical tag (e.g. a part-of-speech label).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    /// Byte offset of the word in its source text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<usize>,
    /// Byte offset one past the end of the word in its source text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<usize>,
}

impl Token {
    pub fn new(word: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            ..Default::default()
        }
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    pub fn with_span(mut self, start: usize, end: usize) -> Self {
        self.start = Some(start);
        self.end = Some(end);
        self
    }

    /// Copy of this token carrying `word`, with attributes handled per `policy`.
    pub fn with_word(&self, word: String, policy: TagPolicy) -> Self {
        Self {
            word,
            tag: match policy {
                TagPolicy::Keep => self.tag.clone(),
                TagPolicy::Clear => None,
            },
            start: self.start,
            end: self.end,
        }
    }

    /// Decode a token from a JSON object. A missing or `null` word is an
    /// invalid argument rather than an empty word.
    pub fn from_json(value: &Value) -> Result<Self> {
        let obj = value
            .as_object()
            .ok_or_else(|| Error::InvalidArgument("token must be a JSON object".into()))?;
        match obj.get("word") {
            None | Some(Value::Null) => {
                return Err(Error::InvalidArgument("token has no word".into()));
            }
            Some(Value::String(_)) => {}
            Some(other) => {
                return Err(Error::InvalidArgument(format!(
                    "token word must be a string, got {}",
                    other
                )));
            }
        }
        Ok(serde_json::from_value(value.clone())?)
    }
}

/// A transform from one token to a new token.
pub trait TokenTransform: Send + Sync {
    fn apply(&self, token: &Token) -> Token;

    /// Name of this transform (for logs and reports).
    fn name(&self) -> &'static str;
}
