//! Best-effort conversion of loosely structured fragment text into blocks.
//!
//! Fragments arrive as newline separated text that may carry inline highlight
//! markup. Lines are classified one at a time:
//!
//! - `•`, `-` or `*` followed by whitespace starts a list item; contiguous items
//!   are grouped into a single [`Block::List`]
//! - a trailing `:` (ASCII or full-width) or a known section keyword makes a
//!   [`Block::Heading`]
//! - everything else is a [`Block::Paragraph`]
//!
//! Blank lines are dropped. There are no nested lists, and inline markup is
//! passed through untouched.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

lazy_static! {
    static ref BULLET: Regex = Regex::new(r"^\s*[•\-*]\s+").expect("valid bullet regex");
    static ref TRAILING_COLON: Regex = Regex::new(r"[:：]\s*$").expect("valid colon regex");
    static ref SECTION_KEYWORD: Regex = Regex::new(
        r"(?i)^(Classes|Delves|Items|Quests|Dungeons|Raids|Player versus Player|PvP)\b"
    )
    .expect("valid section regex");
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Block {
    Heading(String),
    List(Vec<String>),
    Paragraph(String),
}

pub fn is_bullet(line: &str) -> bool {
    BULLET.is_match(line)
}

pub fn is_section(line: &str) -> bool {
    TRAILING_COLON.is_match(line) || SECTION_KEYWORD.is_match(line.trim())
}

/// Transform a block of text into structured blocks.
pub fn transform(text: &str) -> Vec<Block> {
    let text = text.replace('\r', "");
    let mut blocks = Vec::new();
    let mut list: Option<Vec<String>> = None;

    for line in text.split('\n').map(str::trim).filter(|l| !l.is_empty()) {
        if is_bullet(line) {
            list.get_or_insert_with(Vec::new)
                .push(BULLET.replace(line, "").into_owned());
            continue;
        }

        if let Some(items) = list.take() {
            blocks.push(Block::List(items));
        }

        if is_section(line) {
            blocks.push(Block::Heading(
                TRAILING_COLON.replace(line, "").into_owned(),
            ));
        } else {
            blocks.push(Block::Paragraph(line.to_string()));
        }
    }

    if let Some(items) = list {
        blocks.push(Block::List(items));
    }

    blocks
}
