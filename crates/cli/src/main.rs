//! edittools command-line entry point
//!
//! Reads a plain text or Markdown file, runs one proofreading check over it
//! and prints the report to stdout. Logs go to stderr.

mod document;
mod render;

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer};

use edittools_config::{load_settings, Settings};
use edittools_core::TextRange;
use edittools_text_processing::DocumentAnalyzer;

use crate::render::Format;

#[derive(Parser)]
#[command(name = "edittools", version, about = "Proofreading checks for text documents")]
struct Cli {
    /// Configuration file (TOML, YAML or JSON)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Report format
    #[arg(long, value_enum, default_value_t = Format::Text, global = true)]
    format: Format,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Alphabetical list of distinct words, numbers removed
    Words { input: PathBuf },

    /// Case-sensitive word counts
    Frequencies { input: PathBuf },

    /// Repeated phrases
    Phrases {
        input: PathBuf,

        /// Shortest phrase in words
        #[arg(long)]
        min: Option<usize>,

        /// Longest phrase in words
        #[arg(long)]
        max: Option<usize>,
    },

    /// Similar-sounding or similarly-spelled proper nouns
    ProperNouns {
        input: PathBuf,

        /// Edit distance threshold
        #[arg(long)]
        distance: Option<usize>,
    },

    /// Sentences treating the target noun as singular
    Singular { input: PathBuf },

    /// Places where standard comments apply
    Comments {
        input: PathBuf,

        /// Only the comment with this trigger
        #[arg(long)]
        trigger: Option<String>,
    },
}

impl Command {
    fn input(&self) -> &Path {
        match self {
            Command::Words { input }
            | Command::Frequencies { input }
            | Command::Phrases { input, .. }
            | Command::ProperNouns { input, .. }
            | Command::Singular { input }
            | Command::Comments { input, .. } => input.as_path(),
        }
    }

    /// Apply command-line overrides on top of loaded settings and validate the result
    fn resolve_settings(&self, mut settings: Settings) -> anyhow::Result<Settings> {
        self.apply_overrides(&mut settings);
        settings.validate().context("Invalid command-line option")?;
        Ok(settings)
    }

    fn apply_overrides(&self, settings: &mut Settings) {
        match self {
            Command::Phrases { min, max, .. } => {
                if let Some(min) = min {
                    settings.analysis.phrases.min_length = *min;
                }
                if let Some(max) = max {
                    settings.analysis.phrases.max_length = *max;
                }
            },
            Command::ProperNouns {
                distance: Some(distance),
                ..
            } => {
                settings.analysis.proper_nouns.distance_threshold = *distance;
            },
            _ => {},
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let settings = match load_settings(cli.config.as_deref()) {
        Ok(settings) => settings,
        Err(e) if cli.config.is_none() => {
            // Tracing not yet initialized
            eprintln!("Warning: Failed to load config: {}. Using defaults.", e);
            Settings::default()
        },
        Err(e) => return Err(e).context("Failed to load configuration"),
    };
    let settings = cli.command.resolve_settings(settings)?;

    init_tracing(&settings);

    let input = cli.command.input();
    let ranges = document::load_document(input)
        .with_context(|| format!("Failed to read {}", input.display()))?;
    tracing::debug!(path = %input.display(), ranges = ranges.len(), "Loaded document");

    let report = run(&cli.command, &settings, &ranges, cli.format)?;
    print!("{}", report);
    Ok(())
}

fn run(
    command: &Command,
    settings: &Settings,
    ranges: &[TextRange],
    format: Format,
) -> anyhow::Result<String> {
    let analyzer = DocumentAnalyzer::new(settings.analysis.clone());

    match command {
        Command::Words { .. } => render::word_list(&analyzer.word_list(ranges), format),
        Command::Frequencies { .. } => {
            render::word_frequencies(&analyzer.word_frequencies(ranges), format)
        },
        Command::Phrases { .. } => {
            let table = analyzer.phrase_frequencies(ranges)?;
            render::phrase_frequencies(&table, format)
        },
        Command::ProperNouns { .. } => {
            let report = analyzer.proper_nouns(ranges)?;
            render::proper_nouns(&report, format)
        },
        Command::Singular { .. } => {
            let flags = analyzer.singular_usage(ranges);
            render::singular_usage(&flags, &settings.analysis.singular_usage.target_noun, format)
        },
        Command::Comments { trigger, .. } => {
            if settings.analysis.comments.standard.is_empty() {
                tracing::warn!("No standard comments configured");
            }
            let sites = analyzer.comment_sites(ranges, trigger.as_deref(), &[])?;
            render::comment_sites(&sites, format)
        },
    }
}

fn init_tracing(settings: &Settings) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = &settings.observability.log_level;
        format!(
            "edittools={level},edittools_text_processing={level},edittools_config={level}",
            level = level
        )
        .into()
    });

    let subscriber = tracing_subscriber::registry().with(env_filter);
    let fmt_layer = if settings.observability.log_json {
        tracing_subscriber::fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .boxed()
    };
    subscriber.with(fmt_layer).init();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("edittools").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_overrides() {
        let cli = parse(&["phrases", "doc.md", "--min", "3", "--max", "4"]);
        let mut settings = Settings::default();
        cli.command.apply_overrides(&mut settings);
        assert_eq!(settings.analysis.phrases.min_length, 3);
        assert_eq!(settings.analysis.phrases.max_length, 4);
        assert_eq!(cli.command.input(), Path::new("doc.md"));

        let cli = parse(&["--format", "json", "proper-nouns", "doc.md", "--distance", "1"]);
        cli.command.apply_overrides(&mut settings);
        assert_eq!(settings.analysis.proper_nouns.distance_threshold, 1);
        assert_eq!(cli.format, Format::Json);
    }

    #[test]
    fn test_invalid_phrase_bounds_fail() {
        let cli = parse(&["phrases", "doc.md", "--min", "3", "--max", "2"]);
        let mut settings = Settings::default();
        cli.command.apply_overrides(&mut settings);

        let ranges = document::parse_document("the quick brown fox").unwrap();
        let err = run(&cli.command, &settings, &ranges, Format::Text).unwrap_err();
        assert!(err.to_string().contains("min 3, max 2"));
    }

    #[test]
    fn test_zero_distance_rejected() {
        let cli = parse(&["proper-nouns", "doc.md", "--distance", "0"]);
        let err = cli.command.resolve_settings(Settings::default()).unwrap_err();
        assert!(format!("{:#}", err).contains("distance_threshold"));

        let cli = parse(&["proper-nouns", "doc.md", "--distance", "1"]);
        let settings = cli.command.resolve_settings(Settings::default()).unwrap();
        assert_eq!(settings.analysis.proper_nouns.distance_threshold, 1);
    }

    #[test]
    fn test_phrase_bounds_left_to_the_command() {
        let cli = parse(&["phrases", "doc.md", "--min", "3", "--max", "2"]);
        let settings = cli.command.resolve_settings(Settings::default()).unwrap();
        assert_eq!(settings.analysis.phrases.min_length, 3);
    }

    #[test]
    fn test_run_proper_nouns() {
        let cli = parse(&["proper-nouns", "doc.md"]);
        let ranges =
            document::parse_document("# Stanford\n\nWe met Stanford and Stanfrd.").unwrap();
        let report = run(&cli.command, &Settings::default(), &ranges, Format::Text).unwrap();
        assert!(report.contains("Stanford, Stanfrd"));
    }

    #[test]
    fn test_run_comments_from_config_file() {
        use std::io::Write;

        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "[[analysis.comments.standard]]\ntrigger = \"utilize\"\ntext = \"Consider use.\""
        )
        .unwrap();
        let settings = load_settings(Some(file.path())).unwrap();

        let cli = parse(&["comments", "doc.md"]);
        let ranges = document::parse_document("We utilize it.").unwrap();
        let report = run(&cli.command, &settings, &ranges, Format::Text).unwrap();
        assert!(report.contains("utilize: Consider use."));
    }
}
