//! Shared constants for booklet imposition
//!
//! This module centralizes magic numbers and constants used throughout
//! the imposition process.

// =============================================================================
// Unit Conversion
// =============================================================================

/// Points per millimeter (1 inch = 72 points, 1 inch = 25.4mm)
pub const POINTS_PER_MM: f64 = 72.0 / 25.4; // ≈ 2.83465

/// Convert millimeters to points
#[inline]
pub fn mm_to_pt(mm: f64) -> f64 {
    mm * POINTS_PER_MM
}

/// Convert points to millimeters
#[inline]
pub fn pt_to_mm(pt: f64) -> f64 {
    pt / POINTS_PER_MM
}

// =============================================================================
// Page Shape
// =============================================================================

/// Pages whose width and height differ by less than this are square
pub const SQUARE_TOLERANCE_PT: f64 = 0.5;

/// Default page width in points (US Letter: 8.5" × 11")
pub const DEFAULT_PAGE_WIDTH_PT: f64 = 612.0;

/// Default page height in points (US Letter)
pub const DEFAULT_PAGE_HEIGHT_PT: f64 = 792.0;

/// Default page dimensions as tuple (width, height)
pub const DEFAULT_PAGE_DIMENSIONS: (f64, f64) = (DEFAULT_PAGE_WIDTH_PT, DEFAULT_PAGE_HEIGHT_PT);

// =============================================================================
// Layout Capacities
// =============================================================================

/// Pages on one folded sheet (two per side)
pub const PAGES_PER_FOLD_SHEET: u32 = 4;

/// Pages on one sheet carrying two fold sheets, or on the 8-page zine
pub const PAGES_PER_DOUBLE_SHEET: u32 = 8;

/// Most pages the single-sheet 8-up fold can take
pub const FOLDED_8UP_MAX_PAGES: u32 = 8;

// =============================================================================
// Square 6-up
// =============================================================================

/// Edge of one square cell (130mm)
pub const SQUARE_CELL_PT: f64 = 130.0 * POINTS_PER_MM;

/// Copies stacked down the sheet
pub const SQUARE_ROWS: u32 = 3;

/// Top margin that centres three standard cells on A3: (420mm - 3×130mm) / 2
pub const SQUARE_TOP_MARGIN_PT: f64 = 42.5197;

// =============================================================================
// Crop Marks
// =============================================================================

/// Line width for crop marks (points)
pub const CROP_MARK_WIDTH: f64 = 0.25;

/// Length of crop marks (points)
pub const CROP_MARK_LENGTH: f64 = 12.0;

/// Gap between crop mark and content edge (points)
pub const CROP_MARK_GAP: f64 = 3.0;
