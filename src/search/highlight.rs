//! Highlight Rendering
//!
//! Turns raw match spans into an alternating sequence of plain and
//! highlighted segments covering the whole text, merging overlapping and
//! touching spans first.

use serde::Serialize;

use super::fuzzy::Span;

/// Whether a segment is plain text or a matched region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentKind {
    Text,
    Highlight,
}

/// One slice of the partitioned text
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Segment {
    pub kind: SegmentKind,
    pub content: String,
}

impl Segment {
    fn text(content: String) -> Self {
        Segment {
            kind: SegmentKind::Text,
            content,
        }
    }

    fn highlight(content: String) -> Self {
        Segment {
            kind: SegmentKind::Highlight,
            content,
        }
    }
}

/// Sort spans, clamp them to the text, and merge any that overlap or
/// touch (`next.start <= current.end`).
fn merge_spans(spans: &[Span], len: usize) -> Vec<Span> {
    let mut sorted: Vec<Span> = spans
        .iter()
        .map(|span| Span {
            start: span.start.min(len),
            end: span.end.min(len),
        })
        .filter(|span| span.start < span.end)
        .collect();
    sorted.sort_by_key(|span| span.start);

    let mut merged: Vec<Span> = Vec::new();
    for span in sorted {
        match merged.last_mut() {
            Some(last) if span.start <= last.end => {
                if span.end > last.end {
                    last.end = span.end;
                }
            }
            _ => merged.push(span),
        }
    }
    merged
}

fn slice(chars: &[char], start: usize, end: usize) -> String {
    chars[start..end].iter().collect()
}

/// Partition `text` into alternating plain and highlighted segments.
///
/// Spans may arrive unordered and overlapping; the output covers the
/// entire text with no gaps. Without matches the whole text comes back as
/// a single plain segment.
pub fn highlight_matches(text: &str, spans: &[Span]) -> Vec<Segment> {
    let chars: Vec<char> = text.chars().collect();
    let merged = merge_spans(spans, chars.len());

    if merged.is_empty() {
        return vec![Segment::text(text.to_string())];
    }

    let mut segments = Vec::new();
    let mut cursor = 0usize;

    for span in merged {
        if span.start > cursor {
            segments.push(Segment::text(slice(&chars, cursor, span.start)));
        }
        segments.push(Segment::highlight(slice(&chars, span.start, span.end)));
        cursor = span.end;
    }

    if cursor < chars.len() {
        segments.push(Segment::text(slice(&chars, cursor, chars.len())));
    }

    segments
}

/// Render the partition with highlighted regions wrapped in `**` markers,
/// for terminal output.
pub fn render_marked(text: &str, spans: &[Span]) -> String {
    highlight_matches(text, spans)
        .into_iter()
        .map(|segment| match segment.kind {
            SegmentKind::Highlight => format!("**{}**", segment.content),
            SegmentKind::Text => segment.content,
        })
        .collect()
}
