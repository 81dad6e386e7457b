//! Page window: which page numbers to show and where to elide

use super::error::PaginationError;
use super::marker::{EllipsisPosition, PageMarker};
use super::state::{clamp_page, DisplayRange, PaginationState};

/// Up to this many pages every page is listed
pub const MAX_INLINE_PAGES: i64 = 7;

/// Distance from either anchor inside which the window sticks to that edge
const EDGE_SPAN: i64 = 4;

/// Ordered page markers for `current_page` out of `total_pages`
///
/// `current_page` is clamped into `[1, total_pages]` first. Zero pages
/// yields an empty list.
pub fn compute(current_page: i64, total_pages: i64) -> Result<Vec<PageMarker>, PaginationError> {
    if total_pages < 0 {
        return Err(PaginationError::invalid("total_pages", total_pages));
    }
    if total_pages == 0 {
        return Ok(Vec::new());
    }
    Ok(window_markers(clamp_page(current_page, total_pages), total_pages))
}

fn window_markers(current: i64, total: i64) -> Vec<PageMarker> {
    if total <= MAX_INLINE_PAGES {
        return (1..=total).map(PageMarker::Number).collect();
    }

    let mut markers = Vec::with_capacity(9);
    markers.push(PageMarker::Number(1));

    if current > EDGE_SPAN {
        markers.push(PageMarker::Ellipsis(EllipsisPosition::Start));
    }

    let (from, to) = if current <= EDGE_SPAN {
        (2, (current + 1).max(5))
    } else if current >= total - 3 {
        ((total - 4).min(current - 1), total - 1)
    } else {
        (current - 1, current + 1)
    };
    markers.extend(
        (from..=to)
            .filter(|&page| page != 1 && page != total)
            .map(PageMarker::Number),
    );

    if current < total - 3 {
        markers.push(PageMarker::Ellipsis(EllipsisPosition::End));
    }

    let last = PageMarker::Number(total);
    if !markers.contains(&last) {
        markers.push(last);
    }

    markers
}

/// Everything a pagination bar needs to render one frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageWindow {
    pub markers: Vec<PageMarker>,
    pub range: DisplayRange,
    pub current_page: i64,
    pub total_items: i64,
    pub is_prev_disabled: bool,
    pub is_next_disabled: bool,
}

impl PageWindow {
    pub fn build(state: &PaginationState) -> Self {
        let markers = if state.total_pages() == 0 {
            Vec::new()
        } else {
            window_markers(state.current_page(), state.total_pages())
        };

        Self {
            markers,
            range: state.display_range(),
            current_page: state.current_page(),
            total_items: state.total_items(),
            is_prev_disabled: state.is_prev_disabled(),
            is_next_disabled: state.is_next_disabled(),
        }
    }

    /// Nothing to render when there are no pages
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    pub fn summary(&self) -> String {
        format!(
            "Showing {} to {} of {} results",
            self.range.start_item, self.range.end_item, self.total_items
        )
    }
}

/// A user action on the pagination bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageRequest {
    Previous,
    Next,
    Marker(PageMarker),
}

/// Resolve a user action to the page to load
///
/// `None` means the control is inert: a disabled arrow, an ellipsis, the
/// page already shown, or a page outside `[1, total_pages]`.
pub fn navigate(state: &PaginationState, request: PageRequest) -> Option<i64> {
    let target = match request {
        PageRequest::Previous if state.is_prev_disabled() => return None,
        PageRequest::Previous => state.current_page() - 1,
        PageRequest::Next if state.is_next_disabled() => return None,
        PageRequest::Next => state.current_page() + 1,
        PageRequest::Marker(marker) => marker.page()?,
    };

    if target < 1 || target > state.total_pages() || target == state.current_page() {
        return None;
    }
    Some(target)
}

/// Items of an already fetched list that belong on the current page
pub fn page_slice<'a, T>(items: &'a [T], state: &PaginationState) -> &'a [T] {
    let per_page = usize::try_from(state.items_per_page()).unwrap_or(usize::MAX).max(1);
    let start = usize::try_from(state.current_page() - 1)
        .unwrap_or(usize::MAX)
        .saturating_mul(per_page)
        .min(items.len());
    let end = start.saturating_add(per_page).min(items.len());
    &items[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::pagination::marker::EllipsisPosition::{End, Start};
    use crate::shared::pagination::marker::PageMarker::{Ellipsis, Number};

    fn numbers(markers: &[PageMarker]) -> Vec<i64> {
        markers.iter().filter_map(|m| m.page()).collect()
    }

    #[test]
    fn test_small_totals_list_every_page() {
        for total in 1..=MAX_INLINE_PAGES {
            for current in 1..=total {
                let markers = compute(current, total).unwrap();
                let expected: Vec<PageMarker> = (1..=total).map(Number).collect();
                assert_eq!(markers, expected, "total={} current={}", total, current);
            }
        }
        assert_eq!(
            compute(3, 5).unwrap(),
            vec![Number(1), Number(2), Number(3), Number(4), Number(5)]
        );
    }

    #[test]
    fn test_boundary_scenarios() {
        assert_eq!(
            compute(1, 10).unwrap(),
            vec![Number(1), Number(2), Number(3), Number(4), Number(5), Ellipsis(End), Number(10)]
        );
        assert_eq!(
            compute(5, 10).unwrap(),
            vec![Number(1), Ellipsis(Start), Number(4), Number(5), Number(6), Ellipsis(End), Number(10)]
        );
        assert_eq!(
            compute(10, 10).unwrap(),
            vec![Number(1), Ellipsis(Start), Number(6), Number(7), Number(8), Number(9), Number(10)]
        );
    }

    #[test]
    fn test_zero_pages() {
        assert!(compute(1, 0).unwrap().is_empty());

        let state = PaginationState::new(1, 0, 10, 0).unwrap();
        let window = PageWindow::build(&state);
        assert!(window.is_empty());
        assert!(window.is_prev_disabled);
        assert!(window.is_next_disabled);
    }

    #[test]
    fn test_negative_total_rejected() {
        assert_eq!(
            compute(1, -2),
            Err(PaginationError::InvalidArgument {
                field: "total_pages",
                value: -2
            })
        );
    }

    #[test]
    fn test_out_of_range_current_is_clamped() {
        assert_eq!(compute(99, 10).unwrap(), compute(10, 10).unwrap());
        assert_eq!(compute(0, 10).unwrap(), compute(1, 10).unwrap());
        assert_eq!(compute(-7, 3).unwrap(), vec![Number(1), Number(2), Number(3)]);
    }

    #[test]
    fn test_anchors_and_ordering_hold_for_large_totals() {
        for total in (MAX_INLINE_PAGES + 1)..=40 {
            for current in 1..=total {
                let markers = compute(current, total).unwrap();
                let pages = numbers(&markers);

                assert_eq!(markers.first(), Some(&Number(1)));
                assert_eq!(markers.last(), Some(&Number(total)));
                assert_eq!(pages.iter().filter(|&&p| p == 1).count(), 1);
                assert_eq!(pages.iter().filter(|&&p| p == total).count(), 1);
                assert!(
                    pages.windows(2).all(|w| w[0] < w[1]),
                    "not increasing: total={} current={} {:?}",
                    total,
                    current,
                    markers
                );
                assert!(pages.iter().all(|&p| (1..=total).contains(&p)));
                assert!(pages.contains(&current));
            }
        }
    }

    #[test]
    fn test_ellipsis_appears_at_most_once_per_side() {
        for total in (MAX_INLINE_PAGES + 1)..=25 {
            for current in 1..=total {
                let markers = compute(current, total).unwrap();
                let starts = markers.iter().filter(|m| **m == Ellipsis(Start)).count();
                let ends = markers.iter().filter(|m| **m == Ellipsis(End)).count();
                assert_eq!(starts, usize::from(current > 4));
                assert_eq!(ends, usize::from(current < total - 3));
            }
        }
    }

    #[test]
    fn test_eight_pages_has_no_duplicate_last_anchor() {
        assert_eq!(
            compute(4, 8).unwrap(),
            vec![Number(1), Number(2), Number(3), Number(4), Number(5), Ellipsis(End), Number(8)]
        );
        assert_eq!(
            compute(5, 8).unwrap(),
            vec![Number(1), Ellipsis(Start), Number(4), Number(5), Number(6), Number(7), Number(8)]
        );
        for current in 1..=8 {
            let pages = numbers(&compute(current, 8).unwrap());
            assert_eq!(pages.iter().filter(|&&p| p == 8).count(), 1);
        }
    }

    #[test]
    fn test_compute_is_repeatable() {
        for current in 1..=12 {
            assert_eq!(compute(current, 12).unwrap(), compute(current, 12).unwrap());
        }
    }

    #[test]
    fn test_window_summary() {
        let state = PaginationState::from_totals(4, 6, 20).unwrap();
        let window = PageWindow::build(&state);
        assert_eq!(window.summary(), "Showing 19 to 20 of 20 results");
        assert_eq!(window.markers, compute(4, 4).unwrap());
        assert!(window.is_next_disabled);
        assert!(!window.is_prev_disabled);
    }

    #[test]
    fn test_navigate() {
        let state = PaginationState::from_totals(1, 10, 100).unwrap();
        assert_eq!(navigate(&state, PageRequest::Previous), None);
        assert_eq!(navigate(&state, PageRequest::Next), Some(2));
        assert_eq!(navigate(&state, PageRequest::Marker(Number(10))), Some(10));
        assert_eq!(navigate(&state, PageRequest::Marker(Number(1))), None);
        assert_eq!(navigate(&state, PageRequest::Marker(Ellipsis(End))), None);
        assert_eq!(navigate(&state, PageRequest::Marker(Number(11))), None);

        let last = state.with_page(10);
        assert_eq!(navigate(&last, PageRequest::Next), None);
        assert_eq!(navigate(&last, PageRequest::Previous), Some(9));

        let empty = PaginationState::new(1, 0, 10, 0).unwrap();
        assert_eq!(navigate(&empty, PageRequest::Next), None);
        assert_eq!(navigate(&empty, PageRequest::Previous), None);
    }

    #[test]
    fn test_page_slice() {
        let items: Vec<i32> = (1..=20).collect();
        let state = PaginationState::from_totals(1, 6, 20).unwrap();
        assert_eq!(page_slice(&items, &state), &[1, 2, 3, 4, 5, 6]);
        assert_eq!(page_slice(&items, &state.with_page(4)), &[19, 20]);

        let empty: Vec<i32> = Vec::new();
        let state = PaginationState::from_totals(1, 6, 0).unwrap();
        assert!(page_slice(&empty, &state).is_empty());

        // reported total far larger than what was fetched
        let state = PaginationState::from_totals(1, 6, i64::MAX).unwrap();
        assert!(page_slice(&items, &state.with_page(i64::MAX)).is_empty());
        let state = PaginationState::from_totals(1, i64::MAX, i64::MAX).unwrap();
        assert_eq!(page_slice(&items, &state).len(), 20);
    }
}
