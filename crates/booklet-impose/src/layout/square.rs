//! Square 6-up imposition
//!
//! Square pages are folded two to a side like a side-fold booklet, but each
//! spread is printed three times down a portrait sheet so one print run
//! yields three booklets. The three rows are vertically centred; on A3 with
//! standard 130mm cells that leaves a 42.5197pt top margin.

use crate::constants::{SQUARE_CELL_PT, SQUARE_ROWS};
use crate::types::Result;

use super::sheet::{VacancyCounter, fold_sheet_pages};
use super::{LayoutContext, OutputPageSpec, PlacementSpec, Rect, SheetSide};

/// Edge length of one square cell and the top margin above the first row
pub(crate) fn square_cell(ctx: &LayoutContext) -> (f64, f64) {
    let fitted = SQUARE_CELL_PT
        .min(ctx.sheet_width / 2.0)
        .min(ctx.sheet_height / SQUARE_ROWS as f64);
    // Never enlarge a page smaller than the cell
    let cell = fitted.min(ctx.shape.page_width);
    let margin = (ctx.sheet_height - SQUARE_ROWS as f64 * cell) / 2.0;
    (cell, margin)
}

pub(crate) fn square_6up(ctx: &LayoutContext) -> Result<Vec<OutputPageSpec>> {
    let plan = ctx.plan;
    let (cell, margin) = square_cell(ctx);
    let centre = ctx.sheet_width / 2.0;
    let (superior_x, inferior_x) = if ctx.right_to_left {
        (centre, centre - cell)
    } else {
        (centre - cell, centre)
    };
    let row_y = |row: u32| ctx.sheet_height - margin - (row + 1) as f64 * cell;

    let side = |pages: (Option<u32>, Option<u32>)| -> Vec<PlacementSpec> {
        (0..SQUARE_ROWS)
            .flat_map(|row| {
                let y = row_y(row);
                [
                    PlacementSpec::new(pages.0, Rect::new(superior_x, y, cell, cell)),
                    PlacementSpec::new(pages.1, Rect::new(inferior_x, y, cell, cell)),
                ]
            })
            .collect()
    };

    let mut vacancies = VacancyCounter::new(plan.vacant_slots);
    let mut pages = Vec::with_capacity(2 * plan.number_of_sheets as usize);
    for idx in 1..=plan.number_of_sheets {
        let numbers = fold_sheet_pages(idx, plan.slots_available, ctx.page_count(), &mut vacancies)?;
        pages.push(ctx.page(idx, SheetSide::Front).with_placements(side(numbers.front)));
        pages.push(ctx.page(idx, SheetSide::Back).with_placements(side(numbers.back)));
    }

    vacancies.finish()?;
    Ok(pages)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{SQUARE_TOP_MARGIN_PT, mm_to_pt};
    use crate::layout::SheetPlan;
    use crate::types::PageShape;

    fn a3_context(page_count: u32, page_edge: f64) -> LayoutContext {
        LayoutContext {
            shape: PageShape::new(page_count, page_edge, page_edge),
            sheet_width: mm_to_pt(297.0),
            sheet_height: mm_to_pt(420.0),
            plan: SheetPlan::new(page_count, 4).unwrap(),
            right_to_left: false,
        }
    }

    #[test]
    fn test_a3_margin_matches_standard() {
        let (cell, margin) = square_cell(&a3_context(4, 500.0));
        assert!((cell - SQUARE_CELL_PT).abs() < 1e-9);
        assert!((margin - SQUARE_TOP_MARGIN_PT).abs() < 1e-3);
    }

    #[test]
    fn test_small_pages_are_not_enlarged() {
        let (cell, margin) = square_cell(&a3_context(4, 200.0));
        assert_eq!(cell, 200.0);
        assert!((margin - (mm_to_pt(420.0) - 600.0) / 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_three_copies_per_side() {
        let pages = square_6up(&a3_context(4, 500.0)).unwrap();
        let front = &pages[0];
        assert_eq!(front.placements.len(), 6);
        let ones: Vec<_> = front
            .placements
            .iter()
            .filter(|p| p.source_page == Some(1))
            .collect();
        assert_eq!(ones.len(), 3);
        assert!((ones[0].dest_rect.y - ones[1].dest_rect.y - SQUARE_CELL_PT).abs() < 1e-9);
        assert!((ones[1].dest_rect.y - ones[2].dest_rect.y - SQUARE_CELL_PT).abs() < 1e-9);
    }
}
