//! Report module - rendered results keyed by label

/// Label of the whole-document report
pub const FULL_DOCUMENT_LABEL: &str = "Full Document Summary";

/// One rendered analysis result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// Label, e.g. "Full Document Summary" or "Chapter 2"
    pub label: String,

    /// Rendered report text
    pub body: String,
}

impl Report {
    /// Create a report
    pub fn new(label: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            body: body.into(),
        }
    }
}

/// Insertion-ordered mapping from label to report
///
/// The full-document report comes first, followed by chapters in order.
/// Inserting an existing label replaces its report in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportSet {
    reports: Vec<Report>,
}

impl ReportSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a report, keeping the position of an existing label
    pub fn insert(&mut self, report: Report) {
        match self.reports.iter_mut().find(|r| r.label == report.label) {
            Some(existing) => *existing = report,
            None => self.reports.push(report),
        }
    }

    /// Look up a report by label
    pub fn get(&self, label: &str) -> Option<&Report> {
        self.reports.iter().find(|r| r.label == label)
    }

    /// Labels in insertion order
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.reports.iter().map(|r| r.label.as_str())
    }

    /// Reports in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, Report> {
        self.reports.iter()
    }

    /// Number of reports
    pub fn len(&self) -> usize {
        self.reports.len()
    }

    /// Whether the set is empty
    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }
}

impl<'a> IntoIterator for &'a ReportSet {
    type Item = &'a Report;
    type IntoIter = std::slice::Iter<'a, Report>;

    fn into_iter(self) -> Self::IntoIter {
        self.reports.iter()
    }
}

impl IntoIterator for ReportSet {
    type Item = Report;
    type IntoIter = std::vec::IntoIter<Report>;

    fn into_iter(self) -> Self::IntoIter {
        self.reports.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insertion_order() {
        let mut set = ReportSet::new();
        set.insert(Report::new(FULL_DOCUMENT_LABEL, "full"));
        set.insert(Report::new("Chapter 1", "one"));
        set.insert(Report::new("Chapter 2", "two"));

        let labels: Vec<&str> = set.labels().collect();
        assert_eq!(labels, vec![FULL_DOCUMENT_LABEL, "Chapter 1", "Chapter 2"]);
    }

    #[test]
    fn test_replace_keeps_position() {
        let mut set = ReportSet::new();
        set.insert(Report::new("a", "1"));
        set.insert(Report::new("b", "2"));
        set.insert(Report::new("a", "3"));

        assert_eq!(set.len(), 2);
        assert_eq!(set.get("a").map(|r| r.body.as_str()), Some("3"));
        assert_eq!(set.labels().next(), Some("a"));
    }
}
