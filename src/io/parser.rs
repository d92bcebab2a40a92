// src/io/parser.rs
//
// Reads free-form composition text:
//
//   Glass 1: optional description
//   1. [SiO2][Si] : [70][wt%][oxide];
//   2. [Na2O][Na] : [30][wt%][oxide];
//
// Unrecognized lines are dropped. A malformed `[number][unit%][type]` part
// aborts the whole read.

use crate::error::ParseError;
use crate::model::{ComponentRecord, Compositions, GlassEntries, UnitTag};
use regex::Regex;
use std::sync::OnceLock;

const HEADER_KEYWORD: &str = "Glass";

static INDEX_PREFIX: OnceLock<Regex> = OnceLock::new();
static RECORD_PREFIX: OnceLock<Regex> = OnceLock::new();
static PART: OnceLock<Regex> = OnceLock::new();

fn index_prefix() -> &'static Regex {
    INDEX_PREFIX.get_or_init(|| Regex::new(r"^\d+\.").expect("index prefix pattern"))
}

fn record_prefix() -> &'static Regex {
    RECORD_PREFIX.get_or_init(|| {
        Regex::new(r"^\d+\. \[(?P<oxide>\w+)\]\[(?P<element>\w+)\] :")
            .expect("record prefix pattern")
    })
}

fn part() -> &'static Regex {
    PART.get_or_init(|| {
        Regex::new(r"\[(?P<number>[\d.]*)\]\[(?P<unit>\w+%)\]\[(?P<kind>\w+)\]")
            .expect("part pattern")
    })
}

/// One classified input line.
#[derive(Debug, PartialEq)]
enum Line<'a> {
    Blank,
    Header(&'a str),
    Data,
    Other,
}

fn classify(line: &str) -> Line<'_> {
    if line.is_empty() {
        Line::Blank
    } else if line.starts_with(HEADER_KEYWORD) {
        let label = line.split(':').next().unwrap_or(line).trim();
        Line::Header(label)
    } else if index_prefix().is_match(line) {
        Line::Data
    } else {
        Line::Other
    }
}

/// Splits `text` into glasses and their component records, in input order.
///
/// Data lines before the first header have no glass to go to and are dropped.
/// A repeated header clears the earlier glass of the same label.
pub fn parse(text: &str) -> Result<Compositions, ParseError> {
    let mut glasses = Compositions::new();
    let mut current: Option<String> = None;

    for (line_no, raw) in text.split('\n').enumerate() {
        let line = raw.trim();

        match classify(line) {
            Line::Blank => {}
            Line::Header(label) => {
                if glasses.contains_key(&label.to_string()) {
                    log::debug!("Line {}: glass '{}' redefined, earlier records discarded", line_no + 1, label);
                }
                glasses.insert(label.to_string(), GlassEntries::default());
                current = Some(label.to_string());
            }
            Line::Data => {
                let Some(label) = current.as_ref() else {
                    log::debug!("Line {}: data before any glass header, skipped", line_no + 1);
                    continue;
                };
                match parse_line(line)? {
                    Some(record) => {
                        if let Some(GlassEntries::Raw(records)) = glasses.get_mut(label) {
                            records.push(record);
                        }
                    }
                    None => log::debug!("Line {}: unrecognized record '{}', skipped", line_no + 1, line),
                }
            }
            Line::Other => log::debug!("Line {}: ignored '{}'", line_no + 1, line),
        }
    }

    Ok(glasses)
}

/// Parses one `<index>. [<oxide>][<element>] : <part>; <part>` line.
///
/// Returns `Ok(None)` when the `[oxide][element] :` prefix does not match.
pub fn parse_line(line: &str) -> Result<Option<ComponentRecord>, ParseError> {
    let Some(caps) = record_prefix().captures(line) else {
        return Ok(None);
    };
    let mut record = ComponentRecord::new(&caps["oxide"], &caps["element"]);

    // Parts live between the first and the second colon.
    let body = line.split(':').nth(1).unwrap_or("");
    for fragment in body.trim().split(';') {
        let fragment = fragment.trim();
        if fragment.is_empty() {
            continue;
        }
        let (tag, value) = parse_part(fragment)?;
        record.values.insert(tag, value);
    }

    Ok(Some(record))
}

/// Parses a `[number][unit%][type]` part, e.g. `[12.5][wt%][oxide]`.
pub fn parse_part(fragment: &str) -> Result<(UnitTag, f64), ParseError> {
    let malformed = || ParseError::MalformedPart {
        fragment: fragment.to_string(),
    };

    let caps = part().captures(fragment).ok_or_else(malformed)?;
    let number = &caps["number"];
    let value = if number.is_empty() {
        0.0
    } else {
        number.parse::<f64>().map_err(|_| malformed())?
    };

    Ok((UnitTag::from_parts(&caps["unit"], &caps["kind"]), value))
}
