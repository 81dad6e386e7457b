//! Windowed pagination shared by every list page

pub mod error;
pub mod marker;
pub mod state;
pub mod window;

pub use error::PaginationError;
pub use marker::{EllipsisPosition, PageMarker};
pub use state::{display_range, DisplayRange, PaginationState};
pub use window::{compute, navigate, page_slice, PageRequest, PageWindow, MAX_INLINE_PAGES};
