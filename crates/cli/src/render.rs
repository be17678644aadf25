//! Report rendering
//!
//! Text reports follow the layout of the proofreading report documents: a
//! title, a short explanation, then the entries. JSON output serializes the
//! result collections directly.

use clap::ValueEnum;
use edittools_text_processing::{CommentSite, FrequencyTable, ProperNounReport, SentenceFlag};
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt::{self, Write};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Format {
    #[default]
    Text,
    Json,
}

#[derive(Serialize)]
struct FrequencyEntry<'a> {
    text: &'a str,
    count: u32,
}

fn frequency_entries(entries: &[(String, u32)]) -> Vec<FrequencyEntry<'_>> {
    entries
        .iter()
        .map(|(text, count)| FrequencyEntry {
            text: text.as_str(),
            count: *count,
        })
        .collect()
}

fn json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

fn header(out: &mut String, title: &str, intro: &[&str]) -> fmt::Result {
    writeln!(out, "{}", title)?;
    writeln!(out, "{}", "=".repeat(title.chars().count()))?;
    for line in intro {
        writeln!(out, "{}", line)?;
    }
    writeln!(out)
}

pub fn word_list(words: &BTreeSet<String>, format: Format) -> anyhow::Result<String> {
    if format == Format::Json {
        return json(words);
    }

    let mut out = String::new();
    header(
        &mut out,
        "Word List",
        &[
            "Every word in the document with punctuation stripped and numbers removed, \
             in alphabetical order.",
            "Capitalization is retained, so words that start a sentence appear capitalized.",
        ],
    )?;
    for word in words {
        writeln!(out, "{}", word)?;
    }
    Ok(out)
}

pub fn word_frequencies(table: &FrequencyTable, format: Format) -> anyhow::Result<String> {
    let sorted = table.sorted();
    if format == Format::Json {
        return json(&frequency_entries(&sorted));
    }

    let mut out = String::new();
    header(
        &mut out,
        "Word Frequency List",
        &["Capitalization is retained, so words that start a sentence appear capitalized."],
    )?;
    writeln!(out, "Total words found (case sensitive): {}\n", table.len())?;
    for (word, count) in &sorted {
        writeln!(out, "{}\t{}", word, count)?;
    }
    Ok(out)
}

/// Only phrases seen more than once are reported
pub fn phrase_frequencies(table: &FrequencyTable, format: Format) -> anyhow::Result<String> {
    let repeated = table.repeated();
    if format == Format::Json {
        return json(&frequency_entries(&repeated));
    }

    let mut out = String::new();
    header(
        &mut out,
        "Phrase Frequency List",
        &[
            "Punctuation (other than apostrophes) has been removed. \
             All words have been lowercased for comparison.",
        ],
    )?;
    if repeated.is_empty() {
        writeln!(out, "No repeated phrases found.")?;
    }
    for (phrase, count) in &repeated {
        writeln!(out, "{}\t{}", count, phrase)?;
    }
    Ok(out)
}

pub fn proper_nouns(report: &ProperNounReport, format: Format) -> anyhow::Result<String> {
    if format == Format::Json {
        return json(report);
    }

    let mut out = String::new();
    header(
        &mut out,
        "Proper Noun Checker",
        &[
            "Only words that start with a capital letter are checked. Similar proper nouns \
             are found by phonetic comparison and edit distance. Words in all caps \
             (acronyms) are not included.",
            "Words in headings and titles are ignored, so some errors may go unseen.",
            "Expect false positives; the list still surfaces misspellings that are hard \
             to find otherwise.",
        ],
    )?;

    writeln!(out, "Edit Distance ({})", report.distance_threshold)?;
    for (anchor, group) in &report.distance_groups {
        writeln!(out, "{}, {}", anchor, group.join(", "))?;
    }
    writeln!(out)?;

    writeln!(out, "Phonetic Comparisons")?;
    for group in report.phonetic_groups.values() {
        writeln!(out, "{}", group.join(", "))?;
    }
    Ok(out)
}

/// Flagged sentences only
pub fn singular_usage(
    flags: &[SentenceFlag],
    target: &str,
    format: Format,
) -> anyhow::Result<String> {
    let flagged: Vec<&SentenceFlag> = flags.iter().filter(|f| f.flagged).collect();
    if format == Format::Json {
        return json(&flagged);
    }

    let mut out = String::new();
    let title = format!("Singular \"{}\"", target);
    let intro = format!(
        "Sentences where \"{}\" appears to take singular agreement. \
         This is a heuristic and over-reports.",
        target
    );
    header(&mut out, &title, &[intro.as_str()])?;
    if flagged.is_empty() {
        writeln!(out, "No sentences flagged.")?;
    }
    for flag in flagged {
        writeln!(
            out,
            "[paragraph {}, sentence {}] {}",
            flag.range_index + 1,
            flag.sentence_index + 1,
            flag.sentence
        )?;
    }
    Ok(out)
}

pub fn comment_sites(sites: &[CommentSite], format: Format) -> anyhow::Result<String> {
    if format == Format::Json {
        return json(sites);
    }

    let mut out = String::new();
    header(&mut out, "Standard Comments", &[])?;
    if sites.is_empty() {
        writeln!(out, "No comment sites found.")?;
    }
    for site in sites {
        writeln!(
            out,
            "[paragraph {}, bytes {}..{}] {}: {}",
            site.range_index + 1,
            site.span.start,
            site.span.end,
            site.matched,
            site.comment
        )?;
    }
    Ok(out)
}
