/// Ordering of a product listing by creation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// Normalize a client-supplied sort value.
    ///
    /// Only the exact string `desc` selects descending order; anything else,
    /// including an empty value, falls back to ascending.
    pub fn parse(value: &str) -> Self {
        match value {
            "desc" => SortDirection::Desc,
            _ => SortDirection::Asc,
        }
    }

    pub fn as_sql(&self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

/// Offset/length slice of an ordered result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub offset: u64,
    pub limit: u64,
}

/// Listing request: 1-based page, page size and sort direction.
///
/// A zero page or zero limit means "no window": the whole ordered set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub limit: u32,
    pub sort: SortDirection,
}

impl PageRequest {
    pub fn new(page: u32, limit: u32, sort: &str) -> Self {
        Self {
            page,
            limit,
            sort: SortDirection::parse(sort),
        }
    }

    pub fn window(&self) -> Option<PageWindow> {
        if self.page == 0 || self.limit == 0 {
            return None;
        }

        Some(PageWindow {
            offset: u64::from(self.page - 1) * u64::from(self.limit),
            limit: u64::from(self.limit),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_normalization() {
        assert_eq!(SortDirection::parse("desc"), SortDirection::Desc);
        assert_eq!(SortDirection::parse("asc"), SortDirection::Asc);
        assert_eq!(SortDirection::parse(""), SortDirection::Asc);
        assert_eq!(SortDirection::parse("DESC"), SortDirection::Asc);
        assert_eq!(SortDirection::parse("sideways"), SortDirection::Asc);
    }

    #[test]
    fn test_window() {
        assert_eq!(
            PageRequest::new(1, 10, "asc").window(),
            Some(PageWindow { offset: 0, limit: 10 })
        );
        assert_eq!(
            PageRequest::new(3, 15, "desc").window(),
            Some(PageWindow { offset: 30, limit: 15 })
        );
        assert_eq!(PageRequest::new(0, 10, "asc").window(), None);
        assert_eq!(PageRequest::new(2, 0, "asc").window(), None);
    }

    #[test]
    fn test_window_does_not_overflow() {
        let window = PageRequest::new(u32::MAX, u32::MAX, "").window().unwrap();
        assert_eq!(window.offset, u64::from(u32::MAX - 1) * u64::from(u32::MAX));
    }
}
