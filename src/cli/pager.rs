//! Pagination strip rendering.
//!
//! The strip always shows page 1, the last page, and the current page
//! ±1; every other run collapses into a single ellipsis. Computed as
//! data so it stays unit-testable; the list command renders it.

use colored::Colorize;

/// One element of the pagination strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageMark {
    /// A selectable page number.
    Page(usize),
    /// The current page.
    Current(usize),
    /// A collapsed run of pages.
    Ellipsis,
}

/// The rendered pagination control, as data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageStrip {
    pub marks: Vec<PageMark>,
    pub prev_enabled: bool,
    pub next_enabled: bool,
}

/// Compute the strip for `current` of `total` pages.
///
/// A single page (or none) produces an empty strip with both arrows
/// disabled, matching the original UI which rendered nothing.
#[must_use]
pub fn page_strip(current: usize, total: usize) -> PageStrip {
    if total <= 1 {
        return PageStrip {
            marks: Vec::new(),
            prev_enabled: false,
            next_enabled: false,
        };
    }

    let mut marks = Vec::new();
    for i in 1..=total {
        let near_current = i + 1 >= current && i <= current + 1;
        if i == 1 || i == total || near_current {
            if i == current {
                marks.push(PageMark::Current(i));
            } else {
                marks.push(PageMark::Page(i));
            }
        } else if i + 2 == current || i == current + 2 {
            marks.push(PageMark::Ellipsis);
        }
    }

    PageStrip {
        marks,
        prev_enabled: current > 1,
        next_enabled: current < total,
    }
}

/// Render the strip as one terminal line, e.g. `← 1 … 4 [5] 6 … 10 →`.
#[must_use]
pub fn render(strip: &PageStrip) -> String {
    if strip.marks.is_empty() {
        return String::new();
    }

    let mut parts = Vec::with_capacity(strip.marks.len() + 2);
    parts.push(if strip.prev_enabled {
        "←".to_string()
    } else {
        "←".dimmed().to_string()
    });

    for mark in &strip.marks {
        parts.push(match mark {
            PageMark::Page(n) => n.to_string(),
            PageMark::Current(n) => format!("[{n}]").bold().to_string(),
            PageMark::Ellipsis => "…".to_string(),
        });
    }

    parts.push(if strip.next_enabled {
        "→".to_string()
    } else {
        "→".dimmed().to_string()
    });

    parts.join(" ")
}
