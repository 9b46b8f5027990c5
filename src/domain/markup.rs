//! Inline markup handling for terminal output.
//!
//! Fragment text carries `<mark>` spans around matched terms; post bodies may
//! contain arbitrary HTML. Neither is rendered by a browser here, so tags are
//! interpreted (highlights) or removed (everything else) and the common
//! entities are decoded.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref TAG: Regex = Regex::new(r"<[^>]*>").expect("valid tag regex");
    static ref MARK: Regex = Regex::new(r"(?is)<mark\b[^>]*>(.*?)</mark\s*>").expect("valid mark regex");
}

/// A run of text that is either highlighted or plain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub highlighted: bool,
}

impl Segment {
    fn plain(text: &str) -> Self {
        Self {
            text: clean(text),
            highlighted: false,
        }
    }

    fn highlighted(text: &str) -> Self {
        Self {
            text: clean(text),
            highlighted: true,
        }
    }
}

fn clean(text: &str) -> String {
    decode_entities(&TAG.replace_all(text, ""))
}

/// Split a line into plain and highlighted segments.
///
/// Tags other than `<mark>` are stripped; empty segments are skipped.
pub fn parse_highlights(line: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut last = 0;

    for caps in MARK.captures_iter(line) {
        let (Some(whole), Some(inner)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        segments.push(Segment::plain(&line[last..whole.start()]));
        segments.push(Segment::highlighted(inner.as_str()));
        last = whole.end();
    }
    segments.push(Segment::plain(&line[last..]));

    segments.retain(|s| !s.text.is_empty());
    segments
}

/// Remove every tag and decode entities.
pub fn strip_tags(html: &str) -> String {
    clean(html)
}

pub fn decode_entities(text: &str) -> String {
    if !text.contains('&') {
        return text.to_string();
    }
    text.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&apos;", "'")
        // last, so that "&amp;lt;" decodes to "&lt;" and not "<"
        .replace("&amp;", "&")
}
