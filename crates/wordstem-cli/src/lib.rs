//! Wordstem CLI — command parsing and execution behind the `wordstem` binary.

pub mod words;

use std::io::Write;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use wordstem_core::{Error, OutputFormat, Result, StemConfig};
use wordstem_porter::{StageReport, StemEngine, StemStage, Token};

use crate::words::{split_words, SegmentKind};

pub const USAGE: &str = "\
Wordstem — Porter stemmer for English words

Usage: wordstem [command]

Commands:
  <word>...                Print the stem of each word
  -- <word>...             Stem the words literally, even 'help' or '-5'
  file <path>...           Stem every word of each file ('-' for stdin)
  tokens <path>            Stem JSON Lines tokens {\"word\": .., \"tag\": ..}
  trace <word>...          Show the stem after every step
  help                     Show this help message

With no command, words are read from stdin. Command names and arguments
starting with '-' are not taken as words unless they follow '--'.

Environment:
  WORDSTEM_OUTPUT          text | json            (default text)
  WORDSTEM_TAG_POLICY      keep | clear           (default keep)
  RUST_LOG                 log filter for stderr  (default warn)
";

/// A parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Words(Vec<String>),
    Files(Vec<PathBuf>),
    Tokens(PathBuf),
    Trace(Vec<String>),
    Help,
}

impl Command {
    /// Parse arguments (without the program name).
    pub fn parse(args: &[String]) -> Result<Self> {
        let Some(first) = args.first() else {
            return Ok(Command::Files(vec![PathBuf::from("-")]));
        };
        let rest = &args[1..];

        match first.as_str() {
            "--" => Ok(Command::Words(rest.to_vec())),
            "help" | "--help" | "-h" => Ok(Command::Help),
            "file" | "--file" | "-file" => {
                if rest.is_empty() {
                    return Err(Error::InvalidArgument("file needs at least one path".into()));
                }
                Ok(Command::Files(rest.iter().map(PathBuf::from).collect()))
            }
            "tokens" | "--tokens" => match rest {
                [path] => Ok(Command::Tokens(PathBuf::from(path))),
                _ => Err(Error::InvalidArgument("tokens needs exactly one path".into())),
            },
            "trace" | "--trace" => {
                if rest.is_empty() {
                    return Err(Error::InvalidArgument("trace needs at least one word".into()));
                }
                Ok(Command::Trace(rest.to_vec()))
            }
            other if other.starts_with('-') => {
                Err(Error::InvalidArgument(format!("unknown command: {}", other)))
            }
            _ => Ok(Command::Words(args.to_vec())),
        }
    }
}

/// One stemmed word as written in JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StemRecord {
    pub word: String,
    pub stem: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<usize>,
}

impl StemRecord {
    fn new(input: &Token, output: &Token) -> Self {
        Self {
            word: input.word.clone(),
            stem: output.word.clone(),
            tag: output.tag.clone(),
            start: output.start,
            end: output.end,
        }
    }
}

#[derive(Debug, Serialize)]
struct TraceRecord<'a> {
    word: &'a str,
    steps: Vec<TraceStep>,
}

#[derive(Debug, Serialize)]
struct TraceStep {
    step: &'static str,
    stem: String,
}

/// Executes commands against one engine.
pub struct Runner {
    stage: StemStage<StemEngine>,
    format: OutputFormat,
}

impl Runner {
    pub fn new(config: &StemConfig) -> Self {
        let runner = Self {
            stage: StemStage::new(StemEngine::from_config(config)),
            format: config.output,
        };
        debug!(
            "Runner ready: output {}, tag policy {}",
            runner.format,
            runner.engine().tag_policy()
        );
        runner
    }

    pub fn engine(&self) -> &StemEngine {
        self.stage.transform()
    }

    pub fn run<W: Write>(&self, command: &Command, out: &mut W) -> Result<()> {
        match command {
            Command::Help => {
                out.write_all(USAGE.as_bytes())?;
            }
            Command::Words(words) => {
                self.stem_words(words, out)?;
            }
            Command::Files(paths) => {
                for path in paths {
                    let text = read_input(path)?;
                    debug!("Stemming {} ({} bytes)", path.display(), text.len());
                    let report = self.stem_text(&text, out)?;
                    info!(
                        "{}: {} words, {} changed",
                        path.display(),
                        report.tokens,
                        report.changed
                    );
                }
            }
            Command::Tokens(path) => {
                let input = read_input(path)?;
                let report = self.stem_token_lines(&input, out)?;
                info!(
                    "{}: {} tokens, {} changed",
                    path.display(),
                    report.tokens,
                    report.changed
                );
            }
            Command::Trace(words) => {
                self.trace_words(words, out)?;
            }
        }
        Ok(())
    }

    /// Stem each word, one result per line.
    pub fn stem_words<W: Write>(&self, words: &[String], out: &mut W) -> Result<StageReport> {
        let tokens: Vec<Token> = words.iter().map(Token::new).collect();
        let (stemmed, report) = self.stage.run(&tokens);

        for (input, output) in tokens.iter().zip(&stemmed) {
            match self.format {
                OutputFormat::Text => writeln!(out, "{}", output.word)?,
                OutputFormat::Json => write_json_line(out, &StemRecord::new(input, output))?,
            }
        }
        Ok(report)
    }

    /// Stem every word of `text`. Text output keeps the gaps between words
    /// verbatim; JSON output lists words with their byte spans.
    pub fn stem_text<W: Write>(&self, text: &str, out: &mut W) -> Result<StageReport> {
        let segments = split_words(text);
        let tokens: Vec<Token> = segments
            .iter()
            .filter(|s| s.kind == SegmentKind::Word)
            .map(|s| Token::new(s.text).with_span(s.start, s.end))
            .collect();
        let (stemmed, report) = self.stage.run(&tokens);

        match self.format {
            OutputFormat::Text => {
                let mut stems = stemmed.iter();
                for segment in &segments {
                    match segment.kind {
                        SegmentKind::Gap => out.write_all(segment.text.as_bytes())?,
                        SegmentKind::Word => {
                            if let Some(token) = stems.next() {
                                out.write_all(token.word.as_bytes())?;
                            }
                        }
                    }
                }
            }
            OutputFormat::Json => {
                for (input, output) in tokens.iter().zip(&stemmed) {
                    write_json_line(out, &StemRecord::new(input, output))?;
                }
            }
        }
        Ok(report)
    }

    /// Stem JSON Lines tokens. Blank lines are skipped; the first malformed
    /// line aborts with its 1-based line number.
    pub fn stem_token_lines<W: Write>(&self, input: &str, out: &mut W) -> Result<StageReport> {
        let mut tokens = Vec::new();
        for (i, line) in input.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let token = serde_json::from_str(line)
                .map_err(Error::from)
                .and_then(|value| Token::from_json(&value))
                .map_err(|e| Error::InvalidArgument(format!("line {}: {}", i + 1, e)))?;
            tokens.push(token);
        }

        let (stemmed, report) = self.stage.run(&tokens);
        for (input, output) in tokens.iter().zip(&stemmed) {
            match self.format {
                OutputFormat::Text => writeln!(out, "{}", output.word)?,
                OutputFormat::Json => write_json_line(out, &StemRecord::new(input, output))?,
            }
        }
        Ok(report)
    }

    /// Show each word's stem after every pipeline step.
    pub fn trace_words<W: Write>(&self, words: &[String], out: &mut W) -> Result<()> {
        let stemmer = self.engine().stemmer();
        for word in words {
            let trace = stemmer.trace(word);
            match self.format {
                OutputFormat::Text => {
                    writeln!(out, "{}", word)?;
                    for t in &trace {
                        writeln!(out, "  {:<8} {}", t.step.to_string(), t.stem)?;
                    }
                }
                OutputFormat::Json => {
                    let record = TraceRecord {
                        word,
                        steps: trace
                            .into_iter()
                            .map(|t| TraceStep {
                                step: t.step.name(),
                                stem: t.stem,
                            })
                            .collect(),
                    };
                    write_json_line(out, &record)?;
                }
            }
        }
        Ok(())
    }
}

fn write_json_line<W: Write, T: Serialize>(out: &mut W, value: &T) -> Result<()> {
    serde_json::to_writer(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

/// Read a whole input; `-` is stdin.
pub fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        Ok(std::io::read_to_string(std::io::stdin())?)
    } else {
        Ok(std::fs::read_to_string(path)?)
    }
}
