//! Delimited event-file ingestion: parsing, validation, and node-id
//! remapping. Runs entirely before the fold begins.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::errors::IngestError;
use crate::event::{Event, NodeIndex};

/// Field separator accepted in event files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    Comma,
    Semicolon,
    Tab,
}

impl Delimiter {
    pub fn as_char(&self) -> char {
        match self {
            Self::Comma => ',',
            Self::Semicolon => ';',
            Self::Tab => '\t',
        }
    }
}

impl FromStr for Delimiter {
    type Err = IngestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "," | "comma" => Ok(Self::Comma),
            ";" | "semicolon" => Ok(Self::Semicolon),
            "\t" | "\\t" | "tab" => Ok(Self::Tab),
            other => Err(IngestError::UnsupportedDelimiter {
                value: other.to_string(),
            }),
        }
    }
}

/// A parsed event file: the chronological event sequence with node ids
/// remapped to dense indices, plus the bijection back to external ids.
#[derive(Debug, Clone)]
pub struct EventLog {
    pub events: Vec<Event>,
    pub nodes: NodeIndex,
}

/// Read `sender<d>receiver<d>timestamp` rows from `path`.
///
/// The first line is a header and is discarded; blank lines are skipped.
/// Node ids are interned in first-seen order, sender before receiver.
/// Timestamp order is not enforced here; the fold surfaces violations.
pub fn read_events(path: &Path, delimiter: Delimiter) -> Result<EventLog, IngestError> {
    if !path.exists() {
        return Err(IngestError::FileNotFound {
            path: path.display().to_string(),
        });
    }

    let content = fs::read_to_string(path).map_err(|source| IngestError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let mut events = Vec::new();
    let mut nodes = NodeIndex::new();

    // Line numbers are 1-based and include the header.
    for (line_number, line) in content.lines().enumerate().skip(1) {
        if line.trim().is_empty() {
            continue;
        }
        let (sender, receiver, timestamp) = parse_line(path, line_number + 1, line, delimiter)?;
        events.push(Event {
            source: nodes.intern(sender),
            target: nodes.intern(receiver),
            timestamp,
        });
    }

    if events.is_empty() {
        return Err(IngestError::NoEvents {
            path: path.display().to_string(),
        });
    }

    tracing::debug!(
        path = %path.display(),
        events = events.len(),
        nodes = nodes.len(),
        "read event file"
    );

    Ok(EventLog { events, nodes })
}

fn parse_line(
    path: &Path,
    line_number: usize,
    line: &str,
    delimiter: Delimiter,
) -> Result<(i64, i64, i64), IngestError> {
    let mut fields = line.split(delimiter.as_char());

    let mut next_field = |name: &str| -> Result<i64, IngestError> {
        let field = fields.next().ok_or_else(|| IngestError::MalformedLine {
            path: path.display().to_string(),
            line: line_number,
            message: format!("missing {name} field"),
        })?;
        field
            .trim()
            .parse::<i64>()
            .map_err(|_| IngestError::MalformedLine {
                path: path.display().to_string(),
                line: line_number,
                message: format!("{name} is not an integer: '{}'", field.trim()),
            })
    };

    let sender = next_field("sender")?;
    let receiver = next_field("receiver")?;
    let timestamp = next_field("timestamp")?;
    Ok((sender, receiver, timestamp))
}
