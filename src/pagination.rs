//! This module defines the common functionality for paging data.

/// The config for pagination
#[derive(Debug, Clone)]
pub struct PaginationConfig {
    /// The page number to default to when not specified in a request.
    pub default_page: u64,
    /// The maximum records to display per page when not specified in a request.
    pub default_page_size: u64,
    /// The maximum number of pages to show in the pagination indicator.
    pub max_pages: u64,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_page: 1,
            default_page_size: 5,
            max_pages: 5,
        }
    }
}

/// The number of pages needed to display `item_count` items.
///
/// Zero items yield zero pages, callers are expected to render an empty state
/// in that case.
pub fn total_pages(item_count: u64, page_size: u64) -> u64 {
    item_count.div_ceil(page_size)
}

/// Clamp a 1-based page number into `[1, page_count]`.
///
/// A `page_count` of zero clamps to page one so that slicing still works on
/// an empty collection.
pub fn clamp_page(page: u64, page_count: u64) -> u64 {
    page.clamp(1, page_count.max(1))
}

/// The slice of `items` shown on the 1-based page `page`.
pub fn page_slice<T>(items: &[T], page: u64, page_size: u64) -> &[T] {
    let start = ((page - 1) * page_size) as usize;
    let end = (page * page_size) as usize;

    if start >= items.len() {
        return &[];
    }

    &items[start..end.min(items.len())]
}

#[derive(Debug, PartialEq, Eq)]
pub enum PaginationIndicator {
    Page(u64),
    CurrPage(u64),
    Ellipsis,
    NextButton(u64),
    BackButton(u64),
}

/// Build the row of page links to render below a table.
///
/// At most `max_pages` numbered links are shown around the current page, with
/// the first and last page always reachable through an ellipsis.
pub fn create_pagination_indicators(
    curr_page: u64,
    page_count: u64,
    max_pages: u64,
) -> Vec<PaginationIndicator> {
    let map_page = |page| {
        if page == curr_page {
            PaginationIndicator::CurrPage(page)
        } else {
            PaginationIndicator::Page(page)
        }
    };

    let half_window = max_pages / 2;

    let window = if page_count <= max_pages {
        1..=page_count
    } else if curr_page <= half_window {
        1..=max_pages
    } else if curr_page > page_count - half_window {
        (page_count - max_pages + 1)..=page_count
    } else {
        (curr_page - half_window)..=(curr_page + half_window)
    };

    let mut indicators: Vec<PaginationIndicator> = window.map(map_page).collect();

    if page_count > max_pages {
        if curr_page > half_window + 1 {
            indicators.insert(0, PaginationIndicator::Page(1));
            indicators.insert(1, PaginationIndicator::Ellipsis);
        }

        if curr_page < page_count - half_window {
            indicators.push(PaginationIndicator::Ellipsis);
            indicators.push(PaginationIndicator::Page(page_count));
        }
    }

    if curr_page > 1 {
        indicators.insert(0, PaginationIndicator::BackButton(curr_page - 1));
    }

    if curr_page < page_count {
        indicators.push(PaginationIndicator::NextButton(curr_page + 1));
    }

    indicators
}
