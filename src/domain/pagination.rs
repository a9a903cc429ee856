use serde::Serialize;

use crate::constants::{DEFAULT_LIMIT, DEFAULT_PAGE, MAX_LIMIT};

/// Bounds-checked pagination input. Malformed values are clamped, never
/// rejected: page is at least 1 and limit sits in `[1, MAX_LIMIT]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub limit: u32,
}

impl PageRequest {
    pub fn normalize(page: Option<i64>, limit: Option<i64>) -> Self {
        let page = page.unwrap_or(DEFAULT_PAGE).clamp(1, u32::MAX as i64);
        let limit = limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);
        PageRequest {
            page: page as u32,
            limit: limit as u32,
        }
    }

    /// Number of records preceding the requested page.
    pub fn skip(&self) -> usize {
        (self.page as usize - 1) * self.limit as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMeta {
    pub page: u32,
    pub limit: u32,
    pub total: usize,
    pub total_pages: usize,
}

impl PaginationMeta {
    pub fn new(page: u32, limit: u32, total: usize) -> Self {
        PaginationMeta {
            page,
            limit,
            total,
            total_pages: total.div_ceil(limit.max(1) as usize),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_inputs_are_absent() {
        let page = PageRequest::normalize(None, None);
        assert_eq!(page, PageRequest { page: 1, limit: 12 });
        assert_eq!(page.skip(), 0);
    }

    #[test]
    fn non_positive_page_clamps_to_one() {
        for p in [-100, -1, 0] {
            assert_eq!(PageRequest::normalize(Some(p), None).page, 1);
        }
    }

    #[test]
    fn limit_clamps_into_bounds() {
        assert_eq!(PageRequest::normalize(None, Some(0)).limit, 1);
        assert_eq!(PageRequest::normalize(None, Some(-5)).limit, 1);
        assert_eq!(PageRequest::normalize(None, Some(101)).limit, 100);
        assert_eq!(PageRequest::normalize(None, Some(100)).limit, 100);
        assert_eq!(PageRequest::normalize(None, Some(25)).limit, 25);
    }

    #[test]
    fn skip_is_derived_from_page_and_limit() {
        assert_eq!(PageRequest::normalize(Some(3), Some(10)).skip(), 20);
        assert_eq!(PageRequest::normalize(Some(1), Some(50)).skip(), 0);
    }

    #[test]
    fn normalize_is_idempotent() {
        let first = PageRequest::normalize(Some(-3), Some(999));
        let second =
            PageRequest::normalize(Some(first.page as i64), Some(first.limit as i64));
        assert_eq!(first, second);
    }

    #[test]
    fn meta_rounds_total_pages_up() {
        assert_eq!(PaginationMeta::new(1, 12, 25).total_pages, 3);
        assert_eq!(PaginationMeta::new(1, 12, 24).total_pages, 2);
        assert_eq!(PaginationMeta::new(1, 1, 2).total_pages, 2);
    }

    #[test]
    fn meta_reports_zero_pages_for_zero_total() {
        assert_eq!(PaginationMeta::new(1, 12, 0).total_pages, 0);
    }
}
