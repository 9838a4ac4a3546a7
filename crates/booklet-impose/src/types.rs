use std::fmt;

use thiserror::Error;

use crate::constants::{SQUARE_TOLERANCE_PT, mm_to_pt};

#[derive(Error, Debug)]
pub enum ImposeError {
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
    #[error("No pages to impose")]
    NoPages,
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Layout '{layout}' does not support {orientation} pages")]
    UnsupportedShape {
        layout: &'static str,
        orientation: PageOrientation,
    },
    #[error("Unsupported input: {0}")]
    UnsupportedInput(String),
    #[error("Slot bookkeeping invariant violated: {0}")]
    InvariantViolation(String),
}

pub type Result<T> = std::result::Result<T, ImposeError>;

/// Aspect category of the input pages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PageOrientation {
    /// Height > width
    Portrait,
    /// Width > height
    Landscape,
    /// Width and height equal within half a point
    Square,
}

impl PageOrientation {
    pub fn of(width: f64, height: f64) -> Self {
        if (width - height).abs() < SQUARE_TOLERANCE_PT {
            PageOrientation::Square
        } else if width > height {
            PageOrientation::Landscape
        } else {
            PageOrientation::Portrait
        }
    }
}

impl fmt::Display for PageOrientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PageOrientation::Portrait => "portrait",
            PageOrientation::Landscape => "landscape",
            PageOrientation::Square => "square",
        })
    }
}

/// Aggregate shape of an input document.
///
/// The engine assumes every page has the size of the first one.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageShape {
    pub page_count: u32,
    /// Page width in points
    pub page_width: f64,
    /// Page height in points
    pub page_height: f64,
}

impl PageShape {
    pub fn new(page_count: u32, page_width: f64, page_height: f64) -> Self {
        Self {
            page_count,
            page_width,
            page_height,
        }
    }

    pub fn orientation(&self) -> PageOrientation {
        PageOrientation::of(self.page_width, self.page_height)
    }

    pub fn validate(&self) -> Result<()> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if !valid(self.page_width) || !valid(self.page_height) {
            return Err(ImposeError::InvalidInput(format!(
                "page dimensions must be positive, got {} x {}",
                self.page_width, self.page_height
            )));
        }
        Ok(())
    }
}

/// How a paper target orients itself relative to the input pages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SheetOrientation {
    /// Turn the sheet opposite to the input: portrait pages go on a
    /// landscape sheet, landscape and square pages on a portrait sheet.
    #[default]
    Auto,
    /// Use width and height exactly as given
    Fixed,
}

/// Output sheet description
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PaperTarget {
    pub name: String,
    pub width_pt: f64,
    pub height_pt: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub orientation: SheetOrientation,
}

impl PaperTarget {
    pub fn new(name: impl Into<String>, width_pt: f64, height_pt: f64) -> Self {
        Self {
            name: name.into(),
            width_pt,
            height_pt,
            orientation: SheetOrientation::Auto,
        }
    }

    pub fn custom(name: impl Into<String>, width_mm: f64, height_mm: f64) -> Self {
        Self::new(name, mm_to_pt(width_mm), mm_to_pt(height_mm))
    }

    pub fn a3() -> Self {
        Self::custom("A3", 297.0, 420.0)
    }

    pub fn a4() -> Self {
        Self::custom("A4", 210.0, 297.0)
    }

    pub fn a5() -> Self {
        Self::custom("A5", 148.0, 210.0)
    }

    pub fn letter() -> Self {
        Self::new("Letter", 612.0, 792.0)
    }

    pub fn legal() -> Self {
        Self::new("Legal", 612.0, 1008.0)
    }

    pub fn tabloid() -> Self {
        Self::new("Tabloid", 792.0, 1224.0)
    }

    /// Keep the given width and height regardless of the input
    pub fn fixed(mut self) -> Self {
        self.orientation = SheetOrientation::Fixed;
        self
    }

    /// Sheet dimensions (width, height) in points for pages of the given size
    pub fn dimensions_for(&self, input_width: f64, input_height: f64) -> (f64, f64) {
        match self.orientation {
            SheetOrientation::Fixed => (self.width_pt, self.height_pt),
            SheetOrientation::Auto => {
                let long = self.width_pt.max(self.height_pt);
                let short = self.width_pt.min(self.height_pt);
                match PageOrientation::of(input_width, input_height) {
                    PageOrientation::Portrait => (long, short),
                    PageOrientation::Landscape | PageOrientation::Square => (short, long),
                }
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if !valid(self.width_pt) || !valid(self.height_pt) {
            return Err(ImposeError::InvalidInput(format!(
                "paper '{}' must have positive dimensions, got {} x {}",
                self.name, self.width_pt, self.height_pt
            )));
        }
        Ok(())
    }
}

impl Default for PaperTarget {
    fn default() -> Self {
        Self::a4()
    }
}

/// Statistics about the imposition
#[derive(Debug, Clone, PartialEq)]
pub struct ImpositionStatistics {
    /// Total number of source pages
    pub source_pages: usize,
    /// Total number of output sheets
    pub output_sheets: usize,
    /// Output page count (sheet sides actually emitted)
    pub output_pages: usize,
    /// Page slots across all sheets, counting each distinct page once
    pub slots_available: usize,
    /// Slots left blank
    pub blank_slots: usize,
    /// Physical copies of the booklet produced per print run
    pub copies_per_sheet: usize,
}
