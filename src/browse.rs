//! Filter-search-pagination pipeline.
//!
//! An [`IssueBrowser`] derives the visible page of issues from three
//! inputs: the category/status filter, a free-text search term, and a
//! 1-based page number. Filter and search changes reset the page to 1;
//! an out-of-range page change is a silent no-op.

use crate::model::{Issue, Status};

/// Fixed page size of the listing view.
pub const PAGE_SIZE: usize = 6;

/// Category selection: everything, or one category.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Category(String),
}

impl CategoryFilter {
    fn matches(&self, issue: &Issue) -> bool {
        match self {
            Self::All => true,
            Self::Category(c) => issue.category == *c,
        }
    }
}

/// Status selection: everything, or one status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Status(Status),
}

impl StatusFilter {
    fn matches(&self, issue: &Issue) -> bool {
        match self {
            Self::All => true,
            Self::Status(s) => issue.status == *s,
        }
    }
}

/// A single filter-dimension update.
///
/// Typed instead of a string dimension key so a caller can never name a
/// dimension that does not exist.
#[derive(Debug, Clone)]
pub enum FilterChange {
    Category(CategoryFilter),
    Status(StatusFilter),
}

/// The pipeline state machine over a snapshot of the issue collection.
#[derive(Debug)]
pub struct IssueBrowser {
    source: Vec<Issue>,
    filtered: Vec<Issue>,
    category: CategoryFilter,
    status: StatusFilter,
    search: String,
    page: usize,
}

impl IssueBrowser {
    /// Build a browser over `source` with no filters, no search, page 1.
    #[must_use]
    pub fn new(source: Vec<Issue>) -> Self {
        let filtered = source.clone();
        Self {
            source,
            filtered,
            category: CategoryFilter::All,
            status: StatusFilter::All,
            search: String::new(),
            page: 1,
        }
    }

    /// Update one filter dimension; resets the page to 1.
    pub fn set_filter(&mut self, change: FilterChange) {
        match change {
            FilterChange::Category(c) => self.category = c,
            FilterChange::Status(s) => self.status = s,
        }
        self.page = 1;
        self.recompute();
    }

    /// Update the search term; resets the page to 1.
    pub fn set_search_term(&mut self, term: &str) {
        self.search = term.to_string();
        self.page = 1;
        self.recompute();
    }

    /// Move to page `n` if in range; otherwise a silent no-op.
    ///
    /// Never resets filters or recomputes the filtered list.
    pub fn set_page(&mut self, n: usize) {
        if n >= 1 && n <= self.page_count() {
            self.page = n;
        }
    }

    /// The filtered list, original collection order.
    #[must_use]
    pub fn filtered(&self) -> &[Issue] {
        &self.filtered
    }

    /// The slice of the filtered list visible on the current page.
    #[must_use]
    pub fn visible_page(&self) -> &[Issue] {
        let start = (self.page - 1) * PAGE_SIZE;
        let end = (start + PAGE_SIZE).min(self.filtered.len());
        if start >= self.filtered.len() {
            &[]
        } else {
            &self.filtered[start..end]
        }
    }

    /// Total pages: `ceil(len / PAGE_SIZE)`, 0 when nothing matches.
    #[must_use]
    pub fn page_count(&self) -> usize {
        self.filtered.len().div_ceil(PAGE_SIZE)
    }

    /// The current 1-based page number.
    #[must_use]
    pub fn current_page(&self) -> usize {
        self.page
    }

    /// Re-derive the filtered list from the current inputs.
    ///
    /// Category and status must each be `All` or equal; a non-empty
    /// lowercase-folded search term then retains issues whose title or
    /// description contains it. Deterministic for unchanged inputs.
    fn recompute(&mut self) {
        let term = self.search.trim().to_lowercase();
        self.filtered = self
            .source
            .iter()
            .filter(|i| self.category.matches(i) && self.status.matches(i))
            .filter(|i| {
                term.is_empty()
                    || i.title.to_lowercase().contains(&term)
                    || i.description.to_lowercase().contains(&term)
            })
            .cloned()
            .collect();
    }
}
