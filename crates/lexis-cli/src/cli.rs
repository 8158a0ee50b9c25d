//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use lexis_analyzer::AnalyzerConfig;

/// Lexis - Word counts and adjective scoreboards for PDF and DOCX documents.
#[derive(Debug, Parser)]
#[command(name = "lexis")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "LEXIS_CONFIG")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Markdown reports (default)
    Markdown,
    /// JSON format
    Json,
    /// Summary table
    Table,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Analyze one or more documents
    Analyze(AnalyzeArgs),

    /// Install tokenizer/tagger data and show where it lives
    Init,

    /// Enter interactive REPL mode
    Repl,
}

/// Arguments for the analyze command.
#[derive(Debug, Parser)]
pub struct AnalyzeArgs {
    /// Paths to .pdf or .docx files
    #[arg(required = true)]
    pub paths: Vec<String>,

    /// Maximum number of chapters per document
    #[arg(short, long)]
    pub max_chapters: Option<usize>,

    /// Only produce the full-document report
    #[arg(long)]
    pub no_chapters: bool,
}

impl AnalyzeArgs {
    /// Apply command-line overrides to the configured analyzer settings.
    pub fn apply(&self, mut config: AnalyzerConfig) -> AnalyzerConfig {
        if let Some(max_chapters) = self.max_chapters {
            config.max_chapters = max_chapters;
        }
        if self.no_chapters {
            config.chaptered = false;
        }
        config
    }
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Markdown => crate::config::OutputFormat::Markdown,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Table => crate::config::OutputFormat::Table,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand() {
        let cli = Cli::parse_from(["lexis"]);
        assert!(cli.command.is_none());
        assert!(!cli.no_color);
    }

    #[test]
    fn test_analyze_command() {
        let cli = Cli::parse_from([
            "lexis",
            "analyze",
            "a.pdf",
            "b.docx",
            "--max-chapters",
            "5",
            "--format",
            "json",
        ]);
        match cli.command {
            Some(Command::Analyze(args)) => {
                assert_eq!(args.paths, vec!["a.pdf", "b.docx"]);
                assert_eq!(args.max_chapters, Some(5));
                assert!(!args.no_chapters);
            }
            _ => panic!("Expected Analyze command"),
        }
        assert!(matches!(cli.format, Some(CliFormat::Json)));
    }

    #[test]
    fn test_analyze_requires_a_path() {
        assert!(Cli::try_parse_from(["lexis", "analyze"]).is_err());
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::parse_from(["lexis", "analyze", "a.pdf", "--no-chapters", "-m", "7"]);
        let Some(Command::Analyze(args)) = cli.command else {
            panic!("Expected Analyze command");
        };

        let config = args.apply(AnalyzerConfig::default());
        assert!(!config.chaptered);
        assert_eq!(config.max_chapters, 7);
    }
}
