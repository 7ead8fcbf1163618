/// One page of a listing along with the totals needed to page through the rest.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total: u64, page: u64, per_page: u64) -> Self {
        let total_pages = if per_page > 0 {
            total.div_ceil(per_page)
        } else {
            0
        };

        Self {
            items,
            total,
            page,
            per_page,
            total_pages,
        }
    }
}

/// Page number and size requested by the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: u64,
    pub per_page: u64,
}

impl Pagination {
    pub const DEFAULT_PER_PAGE: u64 = 10;
    pub const MAX_PER_PAGE: u64 = 100;

    pub fn new(page: Option<u64>, entries: Option<u64>) -> Self {
        Self {
            page: page.unwrap_or(0),
            per_page: entries
                .unwrap_or(Self::DEFAULT_PER_PAGE)
                .clamp(1, Self::MAX_PER_PAGE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn computes_total_pages() {
        let page = Page::new(vec![1, 2, 3], 21, 0, 10);

        assert_eq!(page.total_pages, 3);
        assert_eq!(page.items, vec![1, 2, 3]);
    }

    #[test]
    fn pagination_defaults_and_clamps() {
        assert_eq!(
            Pagination::new(None, None),
            Pagination {
                page: 0,
                per_page: 10
            }
        );
        assert_eq!(Pagination::new(Some(2), Some(0)).per_page, 1);
        assert_eq!(Pagination::new(Some(2), Some(1000)).per_page, 100);
    }
}
