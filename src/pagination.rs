use std::num::NonZeroUsize;

use log::debug;
use serde::Serialize;

/// Items per page on the history screens
pub const DEFAULT_PAGE_SIZE: NonZeroUsize = match NonZeroUsize::new(4) {
    Some(size) => size,
    None => unreachable!(),
};


/// One page window over a collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page_index: usize,
    pub page_size: usize,
    pub total_items: usize,
    pub total_pages: usize,
}

impl<T> Page<T> {
    pub fn has_previous(&self) -> bool {
        self.page_index > 1 && !self.is_out_of_range()
    }

    pub fn has_next(&self) -> bool {
        self.page_index >= 1 && self.page_index < self.total_pages
    }

    pub fn is_out_of_range(&self) -> bool {
        self.page_index == 0 || self.page_index > self.total_pages
    }
}

/// `max(1, ceil(total_items / page_size))`
pub fn total_pages(total_items: usize, page_size: NonZeroUsize) -> usize {
    total_items.div_ceil(page_size.get()).max(1)
}

/// Caller-side correction into `[1, total_pages]`; `paginate` never clamps
pub fn clamp_page_index(page_index: usize, total_pages: usize) -> usize {
    page_index.clamp(1, total_pages.max(1))
}

/// Slices the 1-based page `page_index`. An index outside `[1, total_pages]`
/// yields an empty page.
pub fn paginate<T: Clone>(items: &[T], page_index: usize, page_size: NonZeroUsize) -> Page<T> {
    let total_pages = total_pages(items.len(), page_size);
    let start = page_index
        .checked_sub(1)
        .and_then(|i| i.checked_mul(page_size.get()));

    let window = match start {
        Some(start) if start < items.len() => {
            let end = start.saturating_add(page_size.get()).min(items.len());
            items[start..end].to_vec()
        }
        _ => {
            if page_index == 0 || page_index > total_pages {
                debug!("page {} requested out of {}", page_index, total_pages);
            }
            Vec::new()
        }
    };

    Page {
        items: window,
        page_index,
        page_size: page_size.get(),
        total_items: items.len(),
        total_pages,
    }
}
