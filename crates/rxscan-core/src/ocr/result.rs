//! Flattened recognition results, one per scanned source file.

use serde::{Deserialize, Serialize};

use crate::ocr::ReadPage;

/// A recognized line with its page attribution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OcrLine {
    /// Raw recognized text, exactly as the engine returned it
    pub text: String,
    /// Bounding polygon as alternating x/y coordinates
    pub bounding_box: Vec<f64>,
    /// 1-based index of the page the line was found on
    pub page: u32,
    /// Engine confidence in `[0, 1]`, when reported
    pub confidence: Option<f64>,
}

/// Everything recognized in a single source file, flattened across pages.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct OcrFileResult {
    /// Filename of the source image, when one was attached
    pub filename: Option<String>,
    /// All recognized lines in page order, then reading order
    pub lines: Vec<OcrLine>,
    /// Number of recognized lines across all pages
    pub total_lines: usize,
    /// Number of pages the engine reported
    pub pages: u32,
}

impl OcrFileResult {
    /// Flattens engine pages into a per-file result.
    ///
    /// Pages are ordered by their reported index before flattening, so
    /// `lines` reads top to bottom across the whole document.
    pub fn from_pages(filename: Option<String>, mut pages: Vec<ReadPage>) -> Self {
        pages.sort_by_key(|page| page.index);
        let page_count = pages.len() as u32;

        let mut lines = Vec::new();
        for page in pages {
            let index = page.index;
            for line in page.lines {
                lines.push(OcrLine {
                    text: line.text,
                    bounding_box: line.bounding_box,
                    page: index,
                    confidence: line.confidence,
                });
            }
        }

        Self {
            filename,
            total_lines: lines.len(),
            pages: page_count,
            lines,
        }
    }

    /// Iterates over the raw text of every recognized line.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(|line| line.text.as_str())
    }

    /// Returns `true` if the engine recognized no text at all.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ocr::ReadLine;

    #[test]
    fn pages_flatten_in_index_order() {
        let pages = vec![
            ReadPage::new(2, vec![ReadLine::new("take with food")]),
            ReadPage::new(
                1,
                vec![ReadLine::new("Aspirin 81 mg"), ReadLine::new("chewable")],
            ),
        ];
        let result = OcrFileResult::from_pages(Some("label.jpg".to_owned()), pages);

        assert_eq!(result.pages, 2);
        assert_eq!(result.total_lines, 3);
        assert_eq!(
            result.texts().collect::<Vec<_>>(),
            vec!["Aspirin 81 mg", "chewable", "take with food"],
        );
        assert_eq!(result.lines[0].page, 1);
        assert_eq!(result.lines[2].page, 2);
    }

    #[test]
    fn empty_page_set_yields_empty_result() {
        let result = OcrFileResult::from_pages(None, Vec::new());
        assert!(result.is_empty());
        assert_eq!(result.total_lines, 0);
        assert_eq!(result.pages, 0);
    }
}
