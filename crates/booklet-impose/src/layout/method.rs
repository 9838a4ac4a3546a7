//! Layout method dispatch
//!
//! [`LayoutMethod`] is the closed set of imposition layouts. Every layout
//! shares the same driver: validate, size the sheet, compute the sheet
//! plan, run the layout's placement rule, then apply the mirror and crop
//! mark passes to the finished pages.

use std::fmt;
use std::str::FromStr;

use crate::constants::{PAGES_PER_DOUBLE_SHEET, PAGES_PER_FOLD_SHEET};
use crate::marks::crop_marks;
use crate::options::ConversionOptions;
use crate::types::{ImposeError, PageOrientation, PageShape, PaperTarget, Result};

use super::sheet::mirror_pages;
use super::{
    LayoutContext, OutputPageSpec, PlacementSpec, Rect, SheetPlan, SheetSide, cut_stack,
    eight_up, four_up, side_fold, square,
};

/// Available imposition layouts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum LayoutMethod {
    /// Pages passed through unchanged, one per output page
    Original,
    /// Saddle-stitch booklet, two pages per side
    #[default]
    SideFold,
    /// Side fold for landscape pages, backs turned top to bottom
    Calendar,
    /// Landscape pages stacked, cut across and piled
    CutStack,
    /// Two copies of a side-fold booklet per sheet
    #[cfg_attr(feature = "serde", serde(rename = "side-fold-4up"))]
    SideFold4Up,
    /// One side-fold booklet on half the paper
    #[cfg_attr(feature = "serde", serde(rename = "side-fold-4up-single"))]
    SideFold4UpSingle,
    /// Eight pages folded from a single sheet side
    #[cfg_attr(feature = "serde", serde(rename = "folded-8up"))]
    Folded8Up,
    /// Three copies of a square side-fold booklet per sheet
    #[cfg_attr(feature = "serde", serde(rename = "square-6up"))]
    Square6Up,
}

impl LayoutMethod {
    /// Every layout, in registry order
    pub const ALL: [LayoutMethod; 8] = [
        LayoutMethod::Original,
        LayoutMethod::SideFold,
        LayoutMethod::Calendar,
        LayoutMethod::CutStack,
        LayoutMethod::SideFold4Up,
        LayoutMethod::SideFold4UpSingle,
        LayoutMethod::Folded8Up,
        LayoutMethod::Square6Up,
    ];

    pub fn id(self) -> &'static str {
        match self {
            LayoutMethod::Original => "original",
            LayoutMethod::SideFold => "side-fold",
            LayoutMethod::Calendar => "calendar",
            LayoutMethod::CutStack => "cut-stack",
            LayoutMethod::SideFold4Up => "side-fold-4up",
            LayoutMethod::SideFold4UpSingle => "side-fold-4up-single",
            LayoutMethod::Folded8Up => "folded-8up",
            LayoutMethod::Square6Up => "square-6up",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            LayoutMethod::Original => "Original",
            LayoutMethod::SideFold => "Side Fold Booklet",
            LayoutMethod::Calendar => "Calendar Fold",
            LayoutMethod::CutStack => "Cut & Stack",
            LayoutMethod::SideFold4Up => "Side Fold 4-up (2 copies)",
            LayoutMethod::SideFold4UpSingle => "Side Fold 4-up (1 copy)",
            LayoutMethod::Folded8Up => "8-Page Folded Booklet",
            LayoutMethod::Square6Up => "Square 6-up (3 copies)",
        }
    }

    /// Distinct source pages one physical sheet holds
    pub fn pages_per_sheet(self) -> u32 {
        match self {
            LayoutMethod::Original => 1,
            LayoutMethod::SideFold
            | LayoutMethod::Calendar
            | LayoutMethod::CutStack
            | LayoutMethod::SideFold4Up
            | LayoutMethod::Square6Up => PAGES_PER_FOLD_SHEET,
            LayoutMethod::SideFold4UpSingle | LayoutMethod::Folded8Up => PAGES_PER_DOUBLE_SHEET,
        }
    }

    /// Copies of every source page the layout prints.
    ///
    /// Multi-copy layouts trade paper for print runs: each sheet carries the
    /// same fold sheet several times, so duplicated pages are expected.
    pub fn copies_per_sheet(self) -> u32 {
        match self {
            LayoutMethod::SideFold4Up => 2,
            LayoutMethod::Square6Up => 3,
            _ => 1,
        }
    }

    pub fn is_enabled(self, orientation: PageOrientation) -> bool {
        use PageOrientation::*;
        match self {
            LayoutMethod::Original => true,
            LayoutMethod::SideFold | LayoutMethod::Folded8Up => orientation == Portrait,
            LayoutMethod::Calendar | LayoutMethod::CutStack => orientation == Landscape,
            LayoutMethod::SideFold4Up | LayoutMethod::SideFold4UpSingle => {
                matches!(orientation, Portrait | Landscape)
            }
            LayoutMethod::Square6Up => orientation == Square,
        }
    }

    /// Whether the placement geometry changes with the input orientation
    pub fn is_orientation_sensitive(self) -> bool {
        matches!(
            self,
            LayoutMethod::SideFold | LayoutMethod::SideFold4Up | LayoutMethod::SideFold4UpSingle
        )
    }

    /// Sheet the layout prints on, (width, height) in points
    pub fn sheet_dimensions(self, target: &PaperTarget, shape: &PageShape) -> (f64, f64) {
        match self {
            LayoutMethod::Original => (shape.page_width, shape.page_height),
            // These keep the sheet in the input's own orientation
            LayoutMethod::SideFold4Up | LayoutMethod::SideFold4UpSingle | LayoutMethod::Square6Up => {
                target.dimensions_for(shape.page_height, shape.page_width)
            }
            _ => target.dimensions_for(shape.page_width, shape.page_height),
        }
    }

    pub fn sheet_plan(self, page_count: u32) -> Result<SheetPlan> {
        SheetPlan::new(page_count, self.pages_per_sheet())
    }

    /// Compute every output page for a document of the given shape.
    ///
    /// An empty document gives an empty plan. Calling a layout that is not
    /// enabled for the document's orientation is an error.
    pub fn plan(
        self,
        shape: &PageShape,
        target: &PaperTarget,
        options: &ConversionOptions,
    ) -> Result<Vec<OutputPageSpec>> {
        target.validate()?;
        if shape.page_count == 0 {
            return Ok(Vec::new());
        }
        shape.validate()?;

        let orientation = shape.orientation();
        if !self.is_enabled(orientation) {
            return Err(ImposeError::UnsupportedShape {
                layout: self.id(),
                orientation,
            });
        }

        let (sheet_width, sheet_height) = self.sheet_dimensions(target, shape);
        let plan = self.sheet_plan(shape.page_count)?;
        log::debug!(
            "{}: {} pages on {} sheets of {:.1}x{:.1}pt, {} vacant slots",
            self.id(),
            shape.page_count,
            plan.number_of_sheets,
            sheet_width,
            sheet_height,
            plan.vacant_slots
        );

        let ctx = LayoutContext {
            shape: *shape,
            sheet_width,
            sheet_height,
            plan,
            right_to_left: options.right_to_left,
        };

        let mut pages = match self {
            LayoutMethod::Original => original(&ctx),
            LayoutMethod::SideFold => side_fold::side_fold(&ctx)?,
            LayoutMethod::Calendar => side_fold::calendar(&ctx)?,
            LayoutMethod::CutStack => cut_stack::cut_stack(&ctx)?,
            LayoutMethod::SideFold4Up => four_up::side_fold_4up(&ctx)?,
            LayoutMethod::SideFold4UpSingle => four_up::side_fold_4up_single(&ctx)?,
            LayoutMethod::Folded8Up => eight_up::folded_8up(&ctx)?,
            LayoutMethod::Square6Up => square::square_6up(&ctx)?,
        };

        if options.mirror {
            mirror_pages(&mut pages);
        }
        if options.show_crop_marks {
            for page in &mut pages {
                page.marks = crop_marks(page);
            }
        }
        Ok(pages)
    }
}

/// One output page per source page, each the size of the source
fn original(ctx: &LayoutContext) -> Vec<OutputPageSpec> {
    let full = Rect::new(0.0, 0.0, ctx.sheet_width, ctx.sheet_height);
    (1..=ctx.page_count())
        .map(|page| {
            ctx.page(page, SheetSide::Front)
                .with_placements(vec![PlacementSpec::new(Some(page), full)])
        })
        .collect()
}

impl fmt::Display for LayoutMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for LayoutMethod {
    type Err = ImposeError;

    fn from_str(s: &str) -> Result<Self> {
        LayoutMethod::ALL
            .into_iter()
            .find(|method| method.id() == s)
            .ok_or_else(|| ImposeError::Config(format!("Unknown layout '{}'", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_round_trip() {
        for method in LayoutMethod::ALL {
            assert_eq!(method.id().parse::<LayoutMethod>().unwrap(), method);
        }
        assert!("booklet".parse::<LayoutMethod>().is_err());
    }

    #[test]
    fn test_4up_sheet_matches_input_orientation() {
        let shape = PageShape::new(8, 595.0, 842.0);
        let target = PaperTarget::a3();
        let (w, h) = LayoutMethod::SideFold4Up.sheet_dimensions(&target, &shape);
        assert!(w < h);
        let (w, h) = LayoutMethod::SideFold.sheet_dimensions(&target, &shape);
        assert!(w > h);
    }

    #[test]
    fn test_original_uses_source_size() {
        let shape = PageShape::new(3, 300.0, 400.0);
        let pages = LayoutMethod::Original
            .plan(&shape, &PaperTarget::a4(), &ConversionOptions::default())
            .unwrap();
        assert_eq!(pages.len(), 3);
        assert_eq!(pages[2].width, 300.0);
        assert_eq!(pages[2].placements[0].source_page, Some(3));
    }
}
