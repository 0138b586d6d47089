//! Limit/offset pagination controller.

use std::fmt;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, TableError};

/// Page sizes offered when the host does not configure its own.
pub const DEFAULT_PAGE_SIZES: [usize; 3] = [10, 30, 50];

/// A page request: how many items, starting where.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// Page size.
    pub limit: usize,
    /// Index of the first item of the page.
    pub offset: usize,
}

/// Position of the current page within the result set, for a footer like
/// `11–20 of 25`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    /// 1-based index of the first item shown, 0 for an empty result set.
    pub first: usize,
    /// 1-based index of the last item shown, 0 for an empty result set.
    pub last: usize,
    /// Total number of items reported by the host.
    pub total: usize,
}

impl fmt::Display for PageInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}–{} of {}", self.first, self.last, self.total)
    }
}

/// Pagination state of a table.
///
/// The controller does not know how many pages exist on its own: the host
/// reports the size of the result set with every data page through
/// [`set_total_items`](Self::set_total_items).
///
/// # Example
///
/// ```
/// use datagrid::pagination::Paginator;
///
/// let mut pages = Paginator::new(vec![10, 30, 50], 10).unwrap();
/// pages.set_total_items(25);
///
/// pages.next();
/// pages.next();
/// pages.previous();
/// assert_eq!(pages.pagination().offset, 10);
/// ```
#[derive(Debug, Clone)]
pub struct Paginator {
    sizes: Vec<usize>,
    current: Pagination,
    total_items: usize,
}

impl Paginator {
    /// Create a controller at offset 0 using `default_size` as the limit.
    pub fn new(sizes: Vec<usize>, default_size: usize) -> Result<Self, ConfigError> {
        if sizes.is_empty() {
            return Err(ConfigError::EmptyPageSizes);
        }
        if sizes.contains(&0) {
            return Err(ConfigError::ZeroPageSize);
        }
        if !sizes.contains(&default_size) {
            return Err(ConfigError::UnsupportedDefaultPageSize {
                size: default_size,
                sizes,
            });
        }
        Ok(Self {
            sizes,
            current: Pagination {
                limit: default_size,
                offset: 0,
            },
            total_items: 0,
        })
    }

    /// The current page request.
    pub fn pagination(&self) -> Pagination {
        self.current
    }

    /// The selectable page sizes.
    pub fn page_sizes(&self) -> &[usize] {
        &self.sizes
    }

    /// Total items as last reported by the host.
    pub fn total_items(&self) -> usize {
        self.total_items
    }

    /// Record the size of the result set reported by the host.
    pub fn set_total_items(&mut self, total: usize) {
        self.total_items = total;
    }

    /// Whether items exist past the current page.
    pub fn has_next(&self) -> bool {
        self.total_items > self.current.offset + self.current.limit
    }

    /// Whether the current page is not the first one.
    pub fn has_previous(&self) -> bool {
        self.current.offset > 0
    }

    /// Advance one page. Returns the new pagination, or `None` on the last page.
    pub fn next(&mut self) -> Option<Pagination> {
        if !self.has_next() {
            return None;
        }
        self.current.offset += self.current.limit;
        debug!("Next page: offset {}", self.current.offset);
        Some(self.current)
    }

    /// Go back one page, never below offset 0.
    ///
    /// Returns the new pagination, or `None` on the first page.
    pub fn previous(&mut self) -> Option<Pagination> {
        if !self.has_previous() {
            return None;
        }
        self.current.offset = self.current.offset.saturating_sub(self.current.limit);
        debug!("Previous page: offset {}", self.current.offset);
        Some(self.current)
    }

    /// Change the page size and go back to the first page.
    pub fn set_page_size(&mut self, size: usize) -> Result<Pagination, TableError> {
        if !self.sizes.contains(&size) {
            warn!("Rejected page size {} (allowed: {:?})", size, self.sizes);
            return Err(TableError::UnsupportedPageSize {
                size,
                sizes: self.sizes.clone(),
            });
        }
        self.current = Pagination {
            limit: size,
            offset: 0,
        };
        debug!("Page size set to {}", size);
        Ok(self.current)
    }

    /// Go back to the first page. Returns `None` if already there.
    pub fn reset(&mut self) -> Option<Pagination> {
        if self.current.offset == 0 {
            return None;
        }
        self.current.offset = 0;
        Some(self.current)
    }

    /// 0-based index of the current page.
    pub fn page_index(&self) -> usize {
        self.current.offset / self.current.limit
    }

    /// Number of pages in the result set, at least 1.
    pub fn page_count(&self) -> usize {
        self.total_items.div_ceil(self.current.limit).max(1)
    }

    /// Item range of the current page.
    pub fn page_info(&self) -> PageInfo {
        if self.total_items == 0 || self.current.offset >= self.total_items {
            return PageInfo {
                first: 0,
                last: 0,
                total: self.total_items,
            };
        }
        PageInfo {
            first: self.current.offset + 1,
            last: (self.current.offset + self.current.limit).min(self.total_items),
            total: self.total_items,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paginator(total: usize) -> Paginator {
        let mut p = Paginator::new(DEFAULT_PAGE_SIZES.to_vec(), 10).unwrap();
        p.set_total_items(total);
        p
    }

    #[test]
    fn test_next_twice_previous_once() {
        let mut p = paginator(25);
        assert_eq!(p.next(), Some(Pagination { limit: 10, offset: 10 }));
        assert_eq!(p.next(), Some(Pagination { limit: 10, offset: 20 }));
        assert_eq!(p.next(), None);
        assert_eq!(p.previous(), Some(Pagination { limit: 10, offset: 10 }));
    }

    #[test]
    fn test_previous_at_start_is_noop() {
        let mut p = paginator(25);
        assert_eq!(p.previous(), None);
        assert_eq!(p.pagination().offset, 0);
    }

    #[test]
    fn test_exact_multiple_has_no_next() {
        let mut p = paginator(20);
        assert!(p.next().is_some());
        assert!(!p.has_next());
    }

    #[test]
    fn test_set_page_size_resets_offset() {
        let mut p = paginator(100);
        p.next();
        p.next();
        assert_eq!(p.set_page_size(30), Ok(Pagination { limit: 30, offset: 0 }));
        assert!(p.set_page_size(7).is_err());
        assert_eq!(p.pagination().limit, 30);
    }

    #[test]
    fn test_config_validation() {
        assert_eq!(Paginator::new(vec![], 10).err(), Some(ConfigError::EmptyPageSizes));
        assert_eq!(Paginator::new(vec![0, 10], 10).err(), Some(ConfigError::ZeroPageSize));
        assert!(matches!(
            Paginator::new(vec![10, 30], 50),
            Err(ConfigError::UnsupportedDefaultPageSize { size: 50, .. })
        ));
    }

    #[test]
    fn test_page_info() {
        let mut p = paginator(25);
        assert_eq!(p.page_info().to_string(), "1–10 of 25");
        p.next();
        p.next();
        assert_eq!(p.page_info(), PageInfo { first: 21, last: 25, total: 25 });
        assert_eq!(p.page_index(), 2);
        assert_eq!(p.page_count(), 3);

        let empty = paginator(0);
        assert_eq!(empty.page_info().to_string(), "0–0 of 0");
        assert_eq!(empty.page_count(), 1);
    }
}
