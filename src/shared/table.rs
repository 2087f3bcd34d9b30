//! Table formatting utilities for terminal output.
//!
//! Provides a small bordered table renderer plus functions for truncating and
//! padding strings to fit fixed-width columns, with proper Unicode width
//! handling for CJK characters.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// A bordered table with a header row.
///
/// # Examples
/// ```
/// use issuectl::shared::table::Table;
/// let mut table = Table::new(["Number", "Title"]);
/// table.push_row(["1", "Fix login"]);
/// assert_eq!(
///     table.render(),
///     "+--------+-----------+\n\
///      | NUMBER | TITLE     |\n\
///      +--------+-----------+\n\
///      | 1      | Fix login |\n\
///      +--------+-----------+\n"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    max_widths: Vec<Option<usize>>,
}

impl Table {
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let headers: Vec<String> = headers
            .into_iter()
            .map(|h| h.into().to_uppercase())
            .collect();
        let max_widths = vec![None; headers.len()];
        Self {
            headers,
            rows: Vec::new(),
            max_widths,
        }
    }

    /// Cap a column's display width; longer cells are truncated with "...".
    pub fn max_width(mut self, column: usize, width: usize) -> Self {
        if let Some(slot) = self.max_widths.get_mut(column) {
            *slot = Some(width);
        }
        self
    }

    /// Append a row. Missing cells render empty, extra cells are ignored.
    /// Line breaks inside a cell are flattened to spaces.
    pub fn push_row<I, S>(&mut self, row: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut cells: Vec<String> = row
            .into_iter()
            .take(self.headers.len())
            .map(|c| c.into().replace(['\r', '\n'], " "))
            .collect();
        cells.resize(self.headers.len(), String::new());
        self.rows.push(cells);
    }

    pub fn render(&self) -> String {
        let widths = self.column_widths();
        let rule = format!(
            "+{}+\n",
            widths
                .iter()
                .map(|w| "-".repeat(w + 2))
                .collect::<Vec<_>>()
                .join("+")
        );

        let mut out = String::new();
        out.push_str(&rule);
        out.push_str(&render_line(&self.headers, &widths));
        out.push_str(&rule);
        if !self.rows.is_empty() {
            for row in &self.rows {
                out.push_str(&render_line(row, &widths));
            }
            out.push_str(&rule);
        }
        out
    }

    fn column_widths(&self) -> Vec<usize> {
        self.headers
            .iter()
            .enumerate()
            .map(|(i, header)| {
                let widest = self
                    .rows
                    .iter()
                    .map(|row| row[i].width())
                    .chain(std::iter::once(header.width()))
                    .max()
                    .unwrap_or(0);
                match self.max_widths[i] {
                    Some(cap) => widest.min(cap.max(header.width())),
                    None => widest,
                }
            })
            .collect()
    }
}

fn render_line(cells: &[String], widths: &[usize]) -> String {
    let inner: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, &w)| pad_or_truncate(cell, w))
        .collect();
    format!("| {} |\n", inner.join(" | "))
}

/// Truncates a string to fit within the specified display width.
/// Uses Unicode width for proper handling of wide characters (e.g., CJK).
///
/// # Examples
/// ```
/// use issuectl::shared::table::truncate_to_width;
/// assert_eq!(truncate_to_width("hello world", 5), "hello");
/// assert_eq!(truncate_to_width("日本語", 4), "日本");  // Each CJK char is width 2
/// ```
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width {
            break;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

/// Pads or truncates a string to exactly the specified display width.
///
/// - If the string is shorter than `width`, pads with spaces on the right.
/// - If the string is longer than `width`, truncates and adds "..." (if width >= 3).
/// - If width < 3, truncates without ellipsis.
pub fn pad_or_truncate(s: &str, width: usize) -> String {
    let display_width = s.width();

    if display_width <= width {
        format!("{}{}", s, " ".repeat(width - display_width))
    } else if width < 3 {
        truncate_to_width(s, width)
    } else {
        let truncated = truncate_to_width(s, width - 3);
        // saturating_sub: a wide char may leave the truncated text one column short
        let padding = width.saturating_sub(truncated.width()).saturating_sub(3);
        format!("{}...{}", truncated, " ".repeat(padding))
    }
}
