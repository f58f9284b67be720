//! Dialog lines, grouped by speaker and wrapped for the text box.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{LoadResult, read_file};

/// Column at which dialog lines break.
const WRAP_COLUMN: usize = 40;

/// Every dialog line in the game, grouped by speaker tag.
///
/// Tags are lowercase and lines come pre-wrapped; both happen at load
/// time so nothing downstream has to care.
#[derive(Clone, Debug, Default)]
pub struct DialogTable {
    responses: HashMap<String, Vec<String>>,
}

impl DialogTable {
    /// The pool of lines a speaker can say. Unknown tags get an empty
    /// pool rather than an error: a talker with nothing to say just
    /// stays quiet.
    pub fn responses(&self, tag: &str) -> &[String] {
        self.responses.get(tag).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Adds a line to a speaker's pool, lowercasing the tag and
    /// wrapping the text.
    pub fn insert(&mut self, tag: &str, text: &str) {
        self.responses
            .entry(tag.to_lowercase())
            .or_default()
            .push(wrap_line(text));
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct DialogDataRon {
    lines: Vec<DialogLineRon>,
}

#[derive(Debug, Serialize, Deserialize)]
struct DialogLineRon {
    tag: String,
    text: String,
}

/// Loads the dialog table from a RON file.
pub struct DialogLoader;

impl DialogLoader {
    pub fn load(path: &Path) -> LoadResult<DialogTable> {
        let content = read_file(path)?;
        Self::from_ron(&content)
    }

    pub fn from_ron(content: &str) -> LoadResult<DialogTable> {
        let data: DialogDataRon = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse dialog data: {}", e))?;

        let mut table = DialogTable::default();
        for line in &data.lines {
            table.insert(&line.tag, &line.text);
        }
        Ok(table)
    }
}

/// Breaks a line into pieces of at most [`WRAP_COLUMN`] characters.
///
/// Each break lands on the last space at or before the column limit,
/// and the space itself is replaced by the newline. A piece with no
/// space in reach is left long.
pub fn wrap_line(text: &str) -> String {
    let mut chars: Vec<char> = text.chars().collect();
    let mut out = String::new();

    while chars.len() > WRAP_COLUMN {
        let Some(split) = (1..=WRAP_COLUMN).rev().find(|&i| chars[i] == ' ') else {
            break;
        };
        out.extend(&chars[..split]);
        out.push('\n');
        chars.drain(..=split);
    }

    out.extend(&chars);
    out
}
