//! Responsive layout breakpoints.

/// Below this width the navigation collapses into the hamburger menu.
pub const COMPACT_BREAKPOINT: f32 = 768.0;

/// Width at which grids switch to their widest column count.
pub const WIDE_BREAKPOINT: f32 = 1024.0;

/// Maximum width of centered section content.
pub const CONTENT_MAX_WIDTH: f32 = 1000.0;

/// Returns true when the window is narrow enough for the mobile layout.
pub fn is_compact(width: f32) -> bool {
    width < COMPACT_BREAKPOINT
}

/// Picks a column count for the given width.
///
/// `columns` holds the counts for compact, medium and wide windows.
pub fn grid_columns(width: f32, columns: [usize; 3]) -> usize {
    let [compact, medium, wide] = columns;
    if is_compact(width) {
        compact
    } else if width < WIDE_BREAKPOINT {
        medium
    } else {
        wide
    }
}
