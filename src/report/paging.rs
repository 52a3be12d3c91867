//! Chat pagination.
//!
//! Terms are packed into chat-width lines, and lines are grouped into
//! numbered pages. Page numbers are 1-based.

use crate::core::{Error, Result};
use serde::{Deserialize, Serialize};

/// Separator placed between packed terms.
pub const TERM_SEPARATOR: &str = ", ";

/// Pagination appearance and limits.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationSettings {
    /// Header, with `{page}` and `{total}` placeholders
    pub header_format: String,
    /// Footer, with `{next}`, `{page}` and `{total}` placeholders
    pub footer_format: String,
    /// Sent instead of any page when there is nothing to show
    pub nothing_to_display: String,
    /// Lines shown per page
    pub lines_per_page: usize,
    /// Maximum characters per packed line
    pub max_chars_per_line: usize,
}

impl PaginationSettings {
    /// Settings for the plugin list, using the host's command specifier.
    pub fn plugin_list(specifier: &str, command: &str) -> Self {
        Self {
            header_format: "Plugin List ({page}/{total}):".to_string(),
            footer_format: format!(
                "Type {}{} <find/list> {{next}} for more.",
                specifier, command
            ),
            nothing_to_display: "No plugins were found.".to_string(),
            lines_per_page: 4,
            max_chars_per_line: 80,
        }
    }

    /// Set lines per page.
    pub fn with_lines_per_page(mut self, lines: usize) -> Self {
        self.lines_per_page = lines.max(1);
        self
    }

    /// Set maximum characters per line.
    pub fn with_max_chars_per_line(mut self, chars: usize) -> Self {
        self.max_chars_per_line = chars;
        self
    }

    fn header(&self, page: usize, total: usize) -> String {
        self.header_format
            .replace("{page}", &page.to_string())
            .replace("{total}", &total.to_string())
    }

    fn footer(&self, page: usize, total: usize) -> String {
        self.footer_format
            .replace("{next}", &(page + 1).to_string())
            .replace("{page}", &page.to_string())
            .replace("{total}", &total.to_string())
    }
}

impl Default for PaginationSettings {
    fn default() -> Self {
        Self::plugin_list("/", "plugin")
    }
}

/// Pack terms into lines of at most `max_chars` characters.
///
/// A line keeps its trailing separator unless it is the last one.
pub fn build_lines_from_terms<I, S>(terms: I, max_chars: usize) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut lines = Vec::new();
    let mut line = String::new();
    let separator_len = TERM_SEPARATOR.chars().count();

    for term in terms {
        let term = term.as_ref();
        let current = line.chars().count();
        if current + term.chars().count() + separator_len >= max_chars && !line.is_empty() {
            lines.push(std::mem::take(&mut line));
        }
        line.push_str(term);
        line.push_str(TERM_SEPARATOR);
    }

    if !line.is_empty() {
        line.truncate(line.len() - TERM_SEPARATOR.len());
        lines.push(line);
    }

    lines
}

/// Parse the page number at `index` of `args`, defaulting to page 1.
pub fn parse_page_number<S: AsRef<str>>(args: &[S], index: usize) -> Result<usize> {
    let Some(raw) = args.get(index) else {
        return Ok(1);
    };
    let raw = raw.as_ref();

    match raw.trim().parse::<usize>() {
        Ok(page) if page >= 1 => Ok(page),
        _ => Err(Error::InvalidPageNumber(raw.to_string())),
    }
}

/// One page of a [`PagedView`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Page<'a> {
    /// 1-based page number
    pub number: usize,
    /// Total number of pages
    pub total: usize,
    /// Lines on this page
    pub lines: &'a [String],
}

impl Page<'_> {
    /// Whether another page follows.
    pub fn has_next(&self) -> bool {
        self.number < self.total
    }
}

/// Paginated view over packed lines.
///
/// Pages are sliced on demand; [`PagedView::pages`] can be called any
/// number of times and always starts at page 1.
#[derive(Clone, Debug)]
pub struct PagedView {
    lines: Vec<String>,
    lines_per_page: usize,
}

impl PagedView {
    /// Create a view over already packed lines.
    pub fn new(lines: Vec<String>, lines_per_page: usize) -> Self {
        Self {
            lines,
            lines_per_page: lines_per_page.max(1),
        }
    }

    /// Pack terms and create a view over them.
    pub fn from_terms<I, S>(terms: I, settings: &PaginationSettings) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::new(
            build_lines_from_terms(terms, settings.max_chars_per_line),
            settings.lines_per_page,
        )
    }

    /// Check for an empty view.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of pages; an empty view still has one (empty) page.
    pub fn total_pages(&self) -> usize {
        self.lines.len().div_ceil(self.lines_per_page).max(1)
    }

    /// Get a page, rejecting numbers outside `1..=total_pages`.
    pub fn page(&self, number: usize) -> Result<Page<'_>> {
        let total = self.total_pages();
        if number == 0 || number > total {
            return Err(Error::InvalidPageNumber(number.to_string()));
        }

        let start = ((number - 1) * self.lines_per_page).min(self.lines.len());
        let end = (start + self.lines_per_page).min(self.lines.len());
        Ok(Page {
            number,
            total,
            lines: &self.lines[start..end],
        })
    }

    /// Iterate over every page from the first.
    pub fn pages(&self) -> impl Iterator<Item = Page<'_>> + '_ {
        (1..=self.total_pages()).filter_map(move |n| self.page(n).ok())
    }

    /// Render a page as chat lines: header, content, and a footer when
    /// more pages follow. An empty view renders only the
    /// nothing-to-display message.
    pub fn render(&self, number: usize, settings: &PaginationSettings) -> Result<Vec<String>> {
        let page = self.page(number)?;

        if self.is_empty() {
            return Ok(vec![settings.nothing_to_display.clone()]);
        }

        let mut out = Vec::with_capacity(page.lines.len() + 2);
        out.push(settings.header(page.number, page.total));
        out.extend(page.lines.iter().cloned());
        if page.has_next() {
            out.push(settings.footer(page.number, page.total));
        }
        Ok(out)
    }
}
