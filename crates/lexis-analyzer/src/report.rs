//! Markdown rendering of analysis results

use lexis_domain::AnalysisResult;
use std::fmt::Write as _;
use std::path::Path;

const DOCUMENT_HEADING: &str = "## 📄 Document Analysis Report";
const NO_ADJECTIVES: &str = "No adjectives were found in the document to display a scoreboard.";

/// Renders an [`AnalysisResult`] as a markdown report
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportFormatter;

impl ReportFormatter {
    /// Create a formatter
    pub fn new() -> Self {
        Self
    }

    /// Render the whole-document report
    ///
    /// Only the final path component of `source` is shown.
    ///
    /// # Examples
    ///
    /// ```
    /// use lexis_analyzer::ReportFormatter;
    /// use lexis_domain::AnalysisResult;
    ///
    /// let result = AnalysisResult { word_count: 1234, ..Default::default() };
    /// let report = ReportFormatter::new().render_document(&result, "/tmp/notes.docx");
    ///
    /// assert!(report.contains("`notes.docx`"));
    /// assert!(report.contains("**1,234** words"));
    /// ```
    pub fn render_document(&self, result: &AnalysisResult, source: &str) -> String {
        self.render(DOCUMENT_HEADING, result, source)
    }

    /// Render the report for one chapter, titled with its label
    pub fn render_chapter(
        &self,
        result: &AnalysisResult,
        source: &str,
        chapter_label: &str,
    ) -> String {
        let heading = format!("## 📖 Analysis Report: {}", chapter_label);
        self.render(&heading, result, source)
    }

    fn render(&self, heading: &str, result: &AnalysisResult, source: &str) -> String {
        let mut out = String::new();

        // Writing into a String cannot fail
        let _ = write!(out, "{}\n\n", heading);
        let _ = write!(out, "**File Analyzed:** `{}`\n\n", base_name(source));
        out.push_str("---\n\n");

        out.push_str("### ✅ Total Word Count\n\n");
        let _ = write!(
            out,
            "The document contains **{}** words.\n\n",
            group_thousands(result.word_count)
        );

        out.push_str("### 🏆 Top 10 Adjective Scoreboard\n\n");

        let top = result.top_adjectives();
        if top.is_empty() {
            out.push_str(NO_ADJECTIVES);
            out.push('\n');
        } else {
            out.push_str("| Rank | Adjective | Count |\n");
            out.push_str("| :--- | :-------- | :---- |\n");
            for (rank, (adjective, count)) in top.iter().enumerate() {
                let _ = writeln!(out, "| {} | **{}** | {} |", rank + 1, adjective, count);
            }
        }

        out
    }
}

fn base_name(source: &str) -> &str {
    Path::new(source)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(source)
}

/// Format an integer with comma thousands separators
pub fn group_thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    grouped
}
