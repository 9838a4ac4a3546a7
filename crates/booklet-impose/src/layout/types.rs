//! Layout data types for imposition
//!
//! These types represent the placement plan that sits between the
//! layout algorithms and whatever renders the final document.

use crate::types::{ImposeError, PageShape, Result};

/// Which physical side of the printed sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetSide {
    /// Front of the sheet (printed first in duplex)
    Front,
    /// Back of the sheet (printed second in duplex)
    Back,
}

/// Sheet arithmetic for one conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SheetPlan {
    pub number_of_sheets: u32,
    pub slots_available: u32,
    pub vacant_slots: u32,
}

impl SheetPlan {
    /// Compute the plan for `page_count` pages at `pages_per_sheet` pages a sheet.
    ///
    /// Zero pages give an empty plan. Fails when the slot count does not fit in a `u32`.
    pub fn new(page_count: u32, pages_per_sheet: u32) -> Result<Self> {
        if pages_per_sheet == 0 {
            return Err(ImposeError::InvalidInput(
                "a sheet must hold at least one page".to_string(),
            ));
        }
        let number_of_sheets = page_count.div_ceil(pages_per_sheet);
        let slots_available = pages_per_sheet
            .checked_mul(number_of_sheets)
            .ok_or_else(|| {
                ImposeError::InvalidInput(format!(
                    "{} pages exceed the largest supported document",
                    page_count
                ))
            })?;
        Ok(Self {
            number_of_sheets,
            slots_available,
            vacant_slots: slots_available - page_count,
        })
    }

    /// Pages actually present
    pub fn page_count(&self) -> u32 {
        self.slots_available - self.vacant_slots
    }
}

/// A rectangular area in points
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// X position (left edge)
    pub x: f64,
    /// Y position (bottom edge)
    pub y: f64,
    /// Width
    pub width: f64,
    /// Height
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge x coordinate
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Top edge y coordinate
    pub fn top(&self) -> f64 {
        self.y + self.height
    }

    /// Reflect across the vertical centre line of a sheet `sheet_width` wide
    pub fn mirrored(&self, sheet_width: f64) -> Self {
        Self::new(sheet_width - self.x - self.width, self.y, self.width, self.height)
    }

    /// Rotate 180° about the centre of a `sheet_width` × `sheet_height` sheet
    pub fn rotated_half_turn(&self, sheet_width: f64, sheet_height: f64) -> Self {
        Self::new(
            sheet_width - self.x - self.width,
            sheet_height - self.y - self.height,
            self.width,
            self.height,
        )
    }

    /// Whether the rectangle lies inside a sheet, allowing `tolerance` points of slack
    pub fn within(&self, sheet_width: f64, sheet_height: f64, tolerance: f64) -> bool {
        self.x >= -tolerance
            && self.y >= -tolerance
            && self.right() <= sheet_width + tolerance
            && self.top() <= sheet_height + tolerance
    }
}

/// Placement of one source page on an output page
#[derive(Debug, Clone, PartialEq)]
pub struct PlacementSpec {
    /// One-based source page number (None = leave blank)
    pub source_page: Option<u32>,
    /// Destination rectangle on the output page
    pub dest_rect: Rect,
    /// 0 or 180
    pub rotation_degrees: u16,
    /// Draw the page content flipped horizontally
    pub mirrored: bool,
}

impl PlacementSpec {
    pub fn new(source_page: Option<u32>, dest_rect: Rect) -> Self {
        Self {
            source_page,
            dest_rect,
            rotation_degrees: 0,
            mirrored: false,
        }
    }

    pub fn blank(dest_rect: Rect) -> Self {
        Self::new(None, dest_rect)
    }

    /// Same placement turned upside down inside its rectangle
    pub fn upside_down(mut self) -> Self {
        self.rotation_degrees = (self.rotation_degrees + 180) % 360;
        self
    }

    pub fn is_blank(&self) -> bool {
        self.source_page.is_none()
    }

    pub fn is_rotated(&self) -> bool {
        self.rotation_degrees == 180
    }
}

/// A straight mark line (crop mark) in output page coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkSegment {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

/// One physical side of one output sheet
#[derive(Debug, Clone, PartialEq)]
pub struct OutputPageSpec {
    /// One-based sheet number
    pub sheet_index: u32,
    pub side: SheetSide,
    /// Page width in points
    pub width: f64,
    /// Page height in points
    pub height: f64,
    pub placements: Vec<PlacementSpec>,
    /// Decorations drawn over the placements
    pub marks: Vec<MarkSegment>,
}

impl OutputPageSpec {
    pub fn new(sheet_index: u32, side: SheetSide, width: f64, height: f64) -> Self {
        Self {
            sheet_index,
            side,
            width,
            height,
            placements: Vec::new(),
            marks: Vec::new(),
        }
    }

    pub fn with_placements(mut self, placements: Vec<PlacementSpec>) -> Self {
        self.placements = placements;
        self
    }

    /// Source page numbers on this page, blanks excluded
    pub fn source_pages(&self) -> impl Iterator<Item = u32> + '_ {
        self.placements.iter().filter_map(|p| p.source_page)
    }
}

/// Immutable inputs shared by every placement function of one conversion
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutContext {
    pub shape: PageShape,
    /// Output sheet width in points
    pub sheet_width: f64,
    /// Output sheet height in points
    pub sheet_height: f64,
    pub plan: SheetPlan,
    pub right_to_left: bool,
}

impl LayoutContext {
    pub fn page_count(&self) -> u32 {
        self.shape.page_count
    }

    /// Blank output page for the given sheet side
    pub fn page(&self, sheet_index: u32, side: SheetSide) -> OutputPageSpec {
        OutputPageSpec::new(sheet_index, side, self.sheet_width, self.sheet_height)
    }

    /// Source page if it exists in the document
    pub fn existing(&self, page: u32) -> Option<u32> {
        (page >= 1 && page <= self.page_count()).then_some(page)
    }
}
