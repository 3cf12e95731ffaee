//! Quick filter and paging.

use domainboard_core::Record;

/// Rows per page in the table.
pub const DEFAULT_PAGE_SIZE: usize = 6;

/// A parsed quick-filter string.
///
/// The text is split into words on anything that is not an ASCII letter,
/// digit or underscore. A record matches when every word appears, ignoring
/// case, in at least one of its fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    words: Vec<String>,
}

impl SearchQuery {
    pub fn new(text: &str) -> Self {
        let words = text
            .split(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
            .filter(|w| !w.is_empty())
            .map(str::to_lowercase)
            .collect();
        Self { words }
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn matches(&self, record: &Record) -> bool {
        let fields = [
            record.id.to_lowercase(),
            record.domain.to_lowercase(),
            record.ip.to_lowercase(),
            record.date.to_lowercase(),
        ];
        self.words
            .iter()
            .all(|word| fields.iter().any(|field| field.contains(word.as_str())))
    }

    /// Filter `records` and cut out page `page` (zero-based).
    pub fn page<'a>(&self, records: &'a [Record], page: usize, page_size: usize) -> Page<'a> {
        let matching: Vec<&Record> = records.iter().filter(|r| self.matches(r)).collect();
        let total = matching.len();
        let page_size = page_size.max(1);
        let rows = matching
            .into_iter()
            .skip(page.saturating_mul(page_size))
            .take(page_size)
            .collect();

        Page {
            rows,
            page,
            page_size,
            total,
        }
    }
}

/// One page of visible rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<'a> {
    pub rows: Vec<&'a Record>,
    /// Zero-based page index.
    pub page: usize,
    pub page_size: usize,
    /// Number of records matching the query, across all pages.
    pub total: usize,
}

impl Page<'_> {
    pub fn page_count(&self) -> usize {
        self.total.div_ceil(self.page_size)
    }

    pub fn has_next(&self) -> bool {
        self.page + 1 < self.page_count()
    }
}
