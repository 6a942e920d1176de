//! The `keyword ... end` section grammar shared by the IPL and IDE formats
//! (and the handling table, which is a one-section degenerate case).
//!
//! A file is a stream of lines. A line equal (case-insensitively) to one of
//! the recognized section keywords opens that section; every following data
//! line belongs to it until a line equal to `end`. A recognized keyword
//! encountered *inside* a section implicitly closes it first; real files
//! are sometimes missing the explicit `end`. Content of sections whose
//! keyword is not recognized is lexed but discarded.

use crate::text::strip_comment;

/// What [`SectionScanner::advance`] made of one raw input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line<'k> {
    /// Blank line, comment, or content outside any recognized section.
    Skip,
    /// A section keyword opened (possibly implicitly closing the previous).
    Opened(&'k str),
    /// An `end` line closed the current section.
    Closed,
    /// A data line inside the named recognized section, already cleaned.
    Record(&'k str, String),
}

/// Incremental state machine over the section grammar.
///
/// Feed it raw lines in order; it tracks which recognized section (if any)
/// the cursor is in and hands back cleaned data lines tagged with their
/// section keyword.
#[derive(Debug)]
pub struct SectionScanner<'k> {
    keywords: &'k [&'k str],
    comment_markers: &'k [char],
    current: Option<&'k str>,
}

impl<'k> SectionScanner<'k> {
    /// Create a scanner for the given keyword set and comment markers.
    pub fn new(keywords: &'k [&'k str], comment_markers: &'k [char]) -> Self {
        Self {
            keywords,
            comment_markers,
            current: None,
        }
    }

    /// The section the scanner is currently inside, if any.
    pub fn current(&self) -> Option<&'k str> {
        self.current
    }

    /// Consume one raw line and report what it was.
    pub fn advance(&mut self, raw: &str) -> Line<'k> {
        let line = strip_comment(raw, self.comment_markers);
        if line.is_empty() {
            return Line::Skip;
        }

        if line.eq_ignore_ascii_case("end") {
            self.current = None;
            return Line::Closed;
        }

        if let Some(keyword) = self.lookup(line) {
            self.current = Some(keyword);
            return Line::Opened(keyword);
        }

        match self.current {
            Some(section) => Line::Record(section, line.to_string()),
            None => Line::Skip,
        }
    }

    fn lookup(&self, line: &str) -> Option<&'k str> {
        self.keywords
            .iter()
            .find(|kw| line.eq_ignore_ascii_case(kw))
            .copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const KEYWORDS: &[&str] = &["inst", "zone", "cull"];

    fn records(input: &str) -> Vec<(String, String)> {
        let mut scanner = SectionScanner::new(KEYWORDS, &['#']);
        let mut out = Vec::new();
        for raw in input.lines() {
            if let Line::Record(section, line) = scanner.advance(raw) {
                out.push((section.to_string(), line));
            }
        }
        out
    }

    #[test]
    fn basic_section() {
        let out = records("# header\ninst\n1 a 0\n2 b 0\nend\n");
        assert_eq!(
            out,
            [
                ("inst".to_string(), "1 a 0".to_string()),
                ("inst".to_string(), "2 b 0".to_string()),
            ]
        );
    }

    #[test]
    fn keyword_implicitly_ends_previous_section() {
        let out = records("inst\n1 a 0\nzone\nz1 0\nend\n");
        assert_eq!(
            out,
            [
                ("inst".to_string(), "1 a 0".to_string()),
                ("zone".to_string(), "z1 0".to_string()),
            ]
        );
    }

    #[test]
    fn unknown_section_content_discarded() {
        let out = records("grge\nsome garage data\nend\ninst\n1 a 0\nend\n");
        assert_eq!(out, [("inst".to_string(), "1 a 0".to_string())]);
    }

    #[test]
    fn keywords_case_insensitive() {
        let out = records("INST\n1 a 0\nEND\n");
        assert_eq!(out, [("inst".to_string(), "1 a 0".to_string())]);
    }

    #[test]
    fn content_outside_sections_discarded() {
        let out = records("stray line\ninst\n1 a 0\nend\ntrailing\n");
        assert_eq!(out, [("inst".to_string(), "1 a 0".to_string())]);
    }
}
