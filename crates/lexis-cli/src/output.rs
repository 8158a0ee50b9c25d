//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use lexis_analyzer::DocumentAnalysis;
use lexis_domain::{AnalysisResult, FULL_DOCUMENT_LABEL};
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Switch output format.
    pub fn set_format(&mut self, format: OutputFormat) {
        self.format = format;
    }

    /// Format the results of one or more documents.
    pub fn format_analyses(&self, analyses: &[DocumentAnalysis]) -> Result<String> {
        match self.format {
            OutputFormat::Markdown => Ok(analyses
                .iter()
                .map(|a| self.format_markdown(a))
                .collect::<Vec<_>>()
                .join("\n")),
            OutputFormat::Json => self.format_json(analyses),
            OutputFormat::Table => Ok(analyses
                .iter()
                .map(|a| self.format_table(a))
                .collect::<Vec<_>>()
                .join("\n\n")),
        }
    }

    /// Format a single document's results.
    pub fn format_analysis(&self, analysis: &DocumentAnalysis) -> Result<String> {
        self.format_analyses(std::slice::from_ref(analysis))
    }

    /// Rendered reports, each under a label banner.
    fn format_markdown(&self, analysis: &DocumentAnalysis) -> String {
        let mut out = String::new();
        for report in &analysis.reports {
            let banner = format!("===== {} =====", report.label);
            out.push_str(&self.colorize(&banner, "cyan"));
            out.push_str("\n\n");
            out.push_str(&report.body);
            out.push('\n');
        }
        out
    }

    /// Format analyses as JSON.
    fn format_json(&self, analyses: &[DocumentAnalysis]) -> Result<String> {
        let documents: Vec<serde_json::Value> = analyses
            .iter()
            .map(|a| {
                let chapters: Vec<serde_json::Value> = a
                    .chapters
                    .iter()
                    .map(|c| {
                        serde_json::json!({
                            "label": c.chapter.label(),
                            "token_count": c.chapter.token_count,
                            "word_count": c.result.word_count,
                            "top_adjectives": adjectives_json(&c.result),
                        })
                    })
                    .collect();

                serde_json::json!({
                    "source": a.source,
                    "word_count": a.full.word_count,
                    "top_adjectives": adjectives_json(&a.full),
                    "chapters": chapters,
                })
            })
            .collect();

        Ok(serde_json::to_string_pretty(&documents)?)
    }

    /// One row per scope: full document first, then chapters.
    fn format_table(&self, analysis: &DocumentAnalysis) -> String {
        let mut builder = Builder::default();
        builder.push_record(["Scope", "Words", "Top Adjectives"]);

        builder.push_record([
            FULL_DOCUMENT_LABEL.to_string(),
            analysis.full.word_count.to_string(),
            adjective_summary(&analysis.full),
        ]);
        for chapter in &analysis.chapters {
            builder.push_record([
                chapter.chapter.label(),
                chapter.result.word_count.to_string(),
                adjective_summary(&chapter.result),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        format!("{}\n{}", self.colorize(&analysis.source, "cyan"), table)
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}

fn adjectives_json(result: &AnalysisResult) -> Vec<serde_json::Value> {
    result
        .top_adjectives()
        .into_iter()
        .enumerate()
        .map(|(i, (adjective, count))| {
            serde_json::json!({ "rank": i + 1, "adjective": adjective, "count": count })
        })
        .collect()
}

fn adjective_summary(result: &AnalysisResult) -> String {
    if result.adjectives.is_empty() {
        return "-".to_string();
    }
    result
        .top_adjectives()
        .into_iter()
        .map(|(adjective, count)| format!("{} ({})", adjective, count))
        .collect::<Vec<_>>()
        .join(", ")
}
