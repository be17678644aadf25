//! Plain text and Markdown documents as text ranges
//!
//! Paragraphs are separated by blank lines. A Markdown heading line becomes
//! its own range styled `Heading N`, a leading `Title:` line is styled
//! `Title`, and everything else is `Normal`. Sentence boundaries come from
//! Unicode sentence segmentation.

use edittools_core::{Result, TextRange};
use std::path::Path;
use unicode_segmentation::UnicodeSegmentation;

const TITLE_PREFIX: &str = "Title:";
const MAX_HEADING_LEVEL: usize = 6;

/// Read and split a UTF-8 document file
pub fn load_document(path: &Path) -> Result<Vec<TextRange>> {
    let source = std::fs::read_to_string(path)?;
    parse_document(&source)
}

/// Split a document into styled text ranges with sentence boundaries
pub fn parse_document(source: &str) -> Result<Vec<TextRange>> {
    let mut ranges = Vec::new();
    let mut paragraph: Vec<&str> = Vec::new();

    for line in source.lines() {
        let line = line.trim();

        if line.is_empty() {
            flush_paragraph(&mut paragraph, &mut ranges)?;
            continue;
        }

        if let Some((level, text)) = heading(line) {
            flush_paragraph(&mut paragraph, &mut ranges)?;
            ranges.push(with_sentences(text, &format!("Heading {}", level))?);
            continue;
        }

        if ranges.is_empty() && paragraph.is_empty() {
            if let Some(title) = line.strip_prefix(TITLE_PREFIX) {
                ranges.push(with_sentences(title.trim(), "Title")?);
                continue;
            }
        }

        paragraph.push(line);
    }
    flush_paragraph(&mut paragraph, &mut ranges)?;

    tracing::debug!(ranges = ranges.len(), "Parsed document");
    Ok(ranges)
}

/// `(level, text)` for a Markdown ATX heading line
fn heading(line: &str) -> Option<(usize, &str)> {
    let level = line.chars().take_while(|&c| c == '#').count();
    if level == 0 || level > MAX_HEADING_LEVEL {
        return None;
    }

    let rest = &line[level..];
    if !rest.is_empty() && !rest.starts_with(char::is_whitespace) {
        return None;
    }
    Some((level, rest.trim().trim_end_matches('#').trim_end()))
}

fn flush_paragraph(paragraph: &mut Vec<&str>, ranges: &mut Vec<TextRange>) -> Result<()> {
    if paragraph.is_empty() {
        return Ok(());
    }
    let text = paragraph.join(" ");
    paragraph.clear();
    ranges.push(with_sentences(&text, edittools_core::text::DEFAULT_STYLE)?);
    Ok(())
}

fn with_sentences(text: &str, style: &str) -> Result<TextRange> {
    let bounds = text
        .split_sentence_bound_indices()
        .map(|(start, sentence)| start..start + sentence.len())
        .collect();
    TextRange::new(text, style).with_sentences(bounds)
}
