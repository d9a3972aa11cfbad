//! Shared pagination utilities
//!
//! Pagination is opt-in: a listing is windowed only when the client sends
//! both `page` and `limit`.
//!
//! # Examples
//!
//! ```rust,ignore
//! use farm_server::features::shared::pagination::{PageRequest, PaginationMeta};
//!
//! if let Some(request) = PageRequest::from_params(Some(2), Some(10))? {
//!     let offset = request.offset(); // 10
//!     let meta = PaginationMeta::new(request.page, request.limit, 25);
//! }
//! ```

use serde::{Deserialize, Serialize};

use super::validation::ValidationError;

/// Largest accepted `limit`
pub const MAX_LIMIT: i64 = 100;

/// A validated page window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// Page number (1-indexed)
    pub page: i64,
    /// Items per page
    pub limit: i64,
}

impl PageRequest {
    /// Build a window from the raw query parameters.
    ///
    /// Returns `Ok(None)` when either parameter is missing, which means the
    /// full result set is returned.
    pub fn from_params(
        page: Option<i64>,
        limit: Option<i64>,
    ) -> Result<Option<Self>, ValidationError> {
        let (page, limit) = match (page, limit) {
            (Some(page), Some(limit)) => (page, limit),
            _ => return Ok(None),
        };

        if page < 1 {
            return Err(ValidationError::InvalidPage);
        }
        if !(1..=MAX_LIMIT).contains(&limit) {
            return Err(ValidationError::InvalidLimit { max: MAX_LIMIT });
        }
        // The offset must fit in a BIGINT
        if (page - 1).checked_mul(limit).is_none() {
            return Err(ValidationError::PageOutOfRange { page, limit });
        }

        Ok(Some(Self { page, limit }))
    }

    /// Calculate the offset for the SQL OFFSET clause
    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.limit)
    }
}

/// Pagination metadata for list responses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMeta {
    pub total: i64,
    pub page: i64,
    pub limit: i64,
    pub total_pages: i64,
}

impl PaginationMeta {
    pub fn new(page: i64, limit: i64, total: i64) -> Self {
        let total_pages = if total == 0 {
            0
        } else {
            (total + limit - 1) / limit
        };

        Self {
            total,
            page,
            limit,
            total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_either_param_disables_pagination() {
        assert_eq!(PageRequest::from_params(None, None), Ok(None));
        assert_eq!(PageRequest::from_params(Some(2), None), Ok(None));
        assert_eq!(PageRequest::from_params(None, Some(10)), Ok(None));
    }

    #[test]
    fn test_offset() {
        let request = PageRequest::from_params(Some(3), Some(20)).unwrap().unwrap();
        assert_eq!(request.offset(), 40);

        let first = PageRequest::from_params(Some(1), Some(10)).unwrap().unwrap();
        assert_eq!(first.offset(), 0);
    }

    #[test]
    fn test_bounds() {
        assert_eq!(
            PageRequest::from_params(Some(0), Some(10)),
            Err(ValidationError::InvalidPage)
        );
        assert_eq!(
            PageRequest::from_params(Some(1), Some(0)),
            Err(ValidationError::InvalidLimit { max: MAX_LIMIT })
        );
        assert_eq!(
            PageRequest::from_params(Some(1), Some(101)),
            Err(ValidationError::InvalidLimit { max: MAX_LIMIT })
        );
        assert!(PageRequest::from_params(Some(1), Some(100)).unwrap().is_some());
    }

    #[test]
    fn test_page_whose_offset_overflows_is_rejected() {
        assert_eq!(
            PageRequest::from_params(Some(i64::MAX), Some(100)),
            Err(ValidationError::PageOutOfRange {
                page: i64::MAX,
                limit: 100
            })
        );

        let last = i64::MAX / 100 + 1;
        let request = PageRequest::from_params(Some(last), Some(100)).unwrap().unwrap();
        assert_eq!(request.offset(), (last - 1) * 100);
    }

    #[test]
    fn test_meta() {
        let meta = PaginationMeta::new(2, 10, 25);
        assert_eq!(meta.total_pages, 3);

        assert_eq!(PaginationMeta::new(1, 10, 0).total_pages, 0);
        assert_eq!(PaginationMeta::new(1, 10, 10).total_pages, 1);
        assert_eq!(PaginationMeta::new(1, 10, 11).total_pages, 2);
    }
}
