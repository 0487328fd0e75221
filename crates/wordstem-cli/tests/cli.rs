//! Command execution tests. These drive the runner the way the binary does, with
//! real files on disk.

use std::io::Write;

use wordstem_cli::{Command, Runner, StemRecord};
use wordstem_core::{Error, OutputFormat, StemConfig, TagPolicy};

fn run(config: &StemConfig, command: &Command) -> Result<String, Error> {
    let runner = Runner::new(config);
    let mut out = Vec::new();
    runner.run(command, &mut out)?;
    Ok(String::from_utf8(out).unwrap())
}

fn json_config(tag_policy: TagPolicy) -> StemConfig {
    StemConfig {
        tag_policy,
        output: OutputFormat::Json,
    }
}

#[test]
fn test_file_mode_keeps_layout() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "Cats are hopping,\n  ponies relational!\n").unwrap();

    let command = Command::Files(vec![file.path().to_path_buf()]);
    let out = run(&StemConfig::default(), &command).unwrap();
    assert_eq!(out, "Cat ar hop,\n  poni relat!\n");
}

#[test]
fn test_file_mode_json_spans() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "the cats").unwrap();

    let command = Command::Files(vec![file.path().to_path_buf()]);
    let out = run(&json_config(TagPolicy::Keep), &command).unwrap();
    let records: Vec<StemRecord> = out
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();

    assert_eq!(records.len(), 2);
    assert_eq!(records[1].word, "cats");
    assert_eq!(records[1].stem, "cat");
    assert_eq!((records[1].start, records[1].end), (Some(4), Some(8)));
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let command = Command::Files(vec![dir.path().join("absent.txt")]);
    let err = run(&StemConfig::default(), &command).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn test_tokens_keep_and_clear_tags() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, r#"{{"word": "ponies", "tag": "NNS"}}"#).unwrap();
    writeln!(file).unwrap();
    writeln!(file, r#"{{"word": "controlled", "tag": "VBD"}}"#).unwrap();
    let command = Command::Tokens(file.path().to_path_buf());

    let kept = run(&json_config(TagPolicy::Keep), &command).unwrap();
    let records: Vec<StemRecord> = kept
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(records[0].stem, "poni");
    assert_eq!(records[0].tag.as_deref(), Some("NNS"));
    assert_eq!(records[1].stem, "control");

    let cleared = run(&json_config(TagPolicy::Clear), &command).unwrap();
    assert!(!cleared.contains("\"tag\""));

    let text = run(&StemConfig::default(), &command).unwrap();
    assert_eq!(text, "poni\ncontrol\n");
}

#[test]
fn test_null_token_reports_line() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, r#"{{"word": "cats"}}"#).unwrap();
    writeln!(file, r#"{{"word": null, "tag": "NN"}}"#).unwrap();

    let err = run(&StemConfig::default(), &Command::Tokens(file.path().to_path_buf())).unwrap_err();
    assert!(matches!(err, Error::InvalidArgument(_)));
    assert!(err.to_string().contains("line 2"), "{}", err);
}

#[test]
fn test_malformed_json_reports_line() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "not json").unwrap();

    let err = run(&StemConfig::default(), &Command::Tokens(file.path().to_path_buf())).unwrap_err();
    assert!(err.to_string().contains("line 1"), "{}", err);
}

#[test]
fn test_words_json() {
    let command = Command::Words(vec!["generalizations".into()]);
    let out = run(&json_config(TagPolicy::Keep), &command).unwrap();
    assert_eq!(out, "{\"word\":\"generalizations\",\"stem\":\"gener\"}\n");
}

#[test]
fn test_trace_json() {
    let command = Command::Trace(vec!["relational".into()]);
    let out = run(&json_config(TagPolicy::Keep), &command).unwrap();
    let value: serde_json::Value = serde_json::from_str(out.trim()).unwrap();
    assert_eq!(value["word"], "relational");
    assert_eq!(value["steps"].as_array().unwrap().len(), 8);
    assert_eq!(value["steps"][3]["step"], "2");
    assert_eq!(value["steps"][3]["stem"], "relate");
    assert_eq!(value["steps"][7]["stem"], "relat");
}

#[test]
fn test_help() {
    let out = run(&StemConfig::default(), &Command::Help).unwrap();
    assert!(out.contains("Usage: wordstem"));
}

#[test]
fn test_separator_stems_command_names() {
    let args: Vec<String> = ["--", "help", "files", "-cats"].iter().map(|s| s.to_string()).collect();
    let command = Command::parse(&args).unwrap();
    let out = run(&StemConfig::default(), &command).unwrap();
    assert_eq!(out, "help\nfile\n-cat\n");
}
