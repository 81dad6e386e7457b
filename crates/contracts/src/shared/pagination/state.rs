use serde::{Deserialize, Serialize};

use super::error::PaginationError;

/// Pagination state owned by a list page
///
/// Pages are 1-based. `current_page` is always kept within
/// `[1, max(total_pages, 1)]`.
/// Only constructed through [`PaginationState::new`]; deserialization goes
/// through the same validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawPaginationState")]
pub struct PaginationState {
    current_page: i64,
    total_pages: i64,
    items_per_page: i64,
    total_items: i64,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPaginationState {
    current_page: i64,
    total_pages: i64,
    items_per_page: i64,
    total_items: i64,
}

impl TryFrom<RawPaginationState> for PaginationState {
    type Error = PaginationError;

    fn try_from(raw: RawPaginationState) -> Result<Self, Self::Error> {
        PaginationState::new(
            raw.current_page,
            raw.total_pages,
            raw.items_per_page,
            raw.total_items,
        )
    }
}

impl Default for PaginationState {
    /// No results yet
    fn default() -> Self {
        Self {
            current_page: 1,
            total_pages: 0,
            items_per_page: 1,
            total_items: 0,
        }
    }
}

impl PaginationState {
    pub fn new(
        current_page: i64,
        total_pages: i64,
        items_per_page: i64,
        total_items: i64,
    ) -> Result<Self, PaginationError> {
        if total_pages < 0 {
            return Err(PaginationError::invalid("total_pages", total_pages));
        }
        if items_per_page <= 0 {
            return Err(PaginationError::invalid("items_per_page", items_per_page));
        }
        if total_items < 0 {
            return Err(PaginationError::invalid("total_items", total_items));
        }

        Ok(Self {
            current_page: clamp_page(current_page, total_pages),
            total_pages,
            items_per_page,
            total_items,
        })
    }

    /// Build a state from the item count reported by the API
    pub fn from_totals(
        current_page: i64,
        items_per_page: i64,
        total_items: i64,
    ) -> Result<Self, PaginationError> {
        if items_per_page <= 0 {
            return Err(PaginationError::invalid("items_per_page", items_per_page));
        }
        if total_items < 0 {
            return Err(PaginationError::invalid("total_items", total_items));
        }
        let total_pages = total_items / items_per_page + i64::from(total_items % items_per_page != 0);
        Self::new(current_page, total_pages, items_per_page, total_items)
    }

    pub fn current_page(&self) -> i64 {
        self.current_page
    }

    pub fn total_pages(&self) -> i64 {
        self.total_pages
    }

    pub fn items_per_page(&self) -> i64 {
        self.items_per_page
    }

    pub fn total_items(&self) -> i64 {
        self.total_items
    }

    /// Same totals, different page
    pub fn with_page(&self, page: i64) -> Self {
        Self {
            current_page: clamp_page(page, self.total_pages),
            ..*self
        }
    }

    pub fn display_range(&self) -> DisplayRange {
        display_range(self)
    }

    pub fn is_prev_disabled(&self) -> bool {
        self.current_page == 1
    }

    pub fn is_next_disabled(&self) -> bool {
        self.total_pages == 0 || self.current_page == self.total_pages
    }
}

/// 1-based inclusive item range shown on the current page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayRange {
    pub start_item: i64,
    pub end_item: i64,
}

/// Saturates instead of overflowing for page numbers near `i64::MAX`
pub fn display_range(state: &PaginationState) -> DisplayRange {
    let start_item = if state.total_items > 0 {
        (state.current_page - 1)
            .saturating_mul(state.items_per_page)
            .saturating_add(1)
            .min(state.total_items)
    } else {
        0
    };
    let end_item = state
        .current_page
        .saturating_mul(state.items_per_page)
        .min(state.total_items);
    DisplayRange {
        start_item,
        end_item,
    }
}

pub(crate) fn clamp_page(page: i64, total_pages: i64) -> i64 {
    let upper = total_pages.max(1);
    let clamped = page.clamp(1, upper);
    if clamped != page {
        log::debug!(
            "pagination: page {} out of range [1, {}], clamped to {}",
            page,
            upper,
            clamped
        );
    }
    clamped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_range_last_partial_page() {
        let state = PaginationState::from_totals(4, 6, 20).unwrap();
        assert_eq!(state.total_pages(), 4);
        assert_eq!(
            state.display_range(),
            DisplayRange {
                start_item: 19,
                end_item: 20
            }
        );
    }

    #[test]
    fn test_display_range_empty() {
        let state = PaginationState::new(1, 0, 10, 0).unwrap();
        assert_eq!(
            state.display_range(),
            DisplayRange {
                start_item: 0,
                end_item: 0
            }
        );
        assert!(state.is_prev_disabled());
        assert!(state.is_next_disabled());
    }

    #[test]
    fn test_current_page_is_clamped() {
        let state = PaginationState::new(42, 5, 10, 50).unwrap();
        assert_eq!(state.current_page(), 5);

        let state = PaginationState::new(-3, 5, 10, 50).unwrap();
        assert_eq!(state.current_page(), 1);

        let state = PaginationState::new(3, 0, 10, 0).unwrap();
        assert_eq!(state.current_page(), 1);
    }

    #[test]
    fn test_invalid_arguments() {
        assert_eq!(
            PaginationState::new(1, -1, 10, 0),
            Err(PaginationError::InvalidArgument {
                field: "total_pages",
                value: -1
            })
        );
        assert!(PaginationState::new(1, 1, 0, 0).is_err());
        assert!(PaginationState::new(1, 1, 10, -5).is_err());
        assert!(PaginationState::from_totals(1, -6, 20).is_err());
    }

    #[test]
    fn test_disabled_flags() {
        let first = PaginationState::from_totals(1, 10, 95).unwrap();
        assert!(first.is_prev_disabled());
        assert!(!first.is_next_disabled());

        let last = first.with_page(10);
        assert!(!last.is_prev_disabled());
        assert!(last.is_next_disabled());

        let single = PaginationState::from_totals(1, 10, 3).unwrap();
        assert!(single.is_prev_disabled());
        assert!(single.is_next_disabled());
    }

    #[test]
    fn test_deserialize_validates() {
        let result: Result<PaginationState, _> = serde_json::from_str(
            r#"{"currentPage":42,"totalPages":10,"itemsPerPage":0,"totalItems":-5}"#,
        );
        assert!(result.is_err());

        let result: Result<PaginationState, _> = serde_json::from_str(
            r#"{"currentPage":1,"totalPages":-3,"itemsPerPage":10,"totalItems":0}"#,
        );
        assert!(result.is_err());

        let state: PaginationState = serde_json::from_str(
            r#"{"currentPage":42,"totalPages":10,"itemsPerPage":10,"totalItems":95}"#,
        )
        .unwrap();
        assert_eq!(state.current_page(), 10);
        assert!(state.is_next_disabled());
        assert_eq!(
            state.display_range(),
            DisplayRange {
                start_item: 91,
                end_item: 95
            }
        );
    }

    #[test]
    fn test_huge_totals_do_not_overflow() {
        let state = PaginationState::from_totals(1, 10, i64::MAX).unwrap();
        assert_eq!(state.total_pages(), i64::MAX / 10 + 1);
        assert_eq!(
            state.display_range(),
            DisplayRange {
                start_item: 1,
                end_item: 10
            }
        );

        let last = state.with_page(i64::MAX);
        assert_eq!(last.current_page(), i64::MAX / 10 + 1);
        assert_eq!(last.display_range().end_item, i64::MAX);

        let state = PaginationState::new(i64::MAX / 2, i64::MAX / 2, 10, 5).unwrap();
        assert_eq!(
            state.display_range(),
            DisplayRange {
                start_item: 5,
                end_item: 5
            }
        );

        let single = PaginationState::from_totals(1, i64::MAX, i64::MAX).unwrap();
        assert_eq!(single.total_pages(), 1);
        assert_eq!(single.display_range().end_item, i64::MAX);
    }

    #[test]
    fn test_serialized_field_names() {
        let state = PaginationState::new(2, 3, 6, 14).unwrap();
        let value = serde_json::to_value(state).unwrap();
        assert_eq!(value["currentPage"], 2);
        assert_eq!(value["itemsPerPage"], 6);
    }
}
