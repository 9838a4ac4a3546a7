//! 4-up side-fold imposition
//!
//! The sheet keeps the orientation of the input pages and is divided into
//! four quadrants. Two quadrants form a *unit*: one folded booklet sheet
//! with a superior and an inferior page.
//!
//! - Portrait pages: the units are the top and bottom rows, each a spread.
//! - Landscape pages: the units are the two columns, superior above inferior.
//!
//! `SideFold4Up` repeats the same fold sheet in both units, giving two
//! copies of the booklet per print run. `SideFold4UpSingle` fills the two
//! units with consecutive fold sheets of a single booklet, halving the paper.

use crate::types::{ImposeError, PageOrientation, Result};

use super::sheet::{VacancyCounter, fold_sheet_pages};
use super::{LayoutContext, OutputPageSpec, PlacementSpec, Rect, SheetSide};

/// (superior, inferior) quadrants of each unit, first unit first
fn units(ctx: &LayoutContext) -> [(Rect, Rect); 2] {
    let qw = ctx.sheet_width / 2.0;
    let qh = ctx.sheet_height / 2.0;
    let quadrant = |col: u32, row: u32| Rect::new(col as f64 * qw, row as f64 * qh, qw, qh);

    if ctx.shape.orientation() == PageOrientation::Landscape {
        let (first, second) = if ctx.right_to_left { (1, 0) } else { (0, 1) };
        [
            (quadrant(first, 1), quadrant(first, 0)),
            (quadrant(second, 1), quadrant(second, 0)),
        ]
    } else {
        let (superior, inferior) = if ctx.right_to_left { (1, 0) } else { (0, 1) };
        [
            (quadrant(superior, 1), quadrant(inferior, 1)),
            (quadrant(superior, 0), quadrant(inferior, 0)),
        ]
    }
}

fn unit_placements(
    unit: (Rect, Rect),
    pages: (Option<u32>, Option<u32>),
) -> [PlacementSpec; 2] {
    [
        PlacementSpec::new(pages.0, unit.0),
        PlacementSpec::new(pages.1, unit.1),
    ]
}

/// Two copies of every fold sheet, one per unit
pub(crate) fn side_fold_4up(ctx: &LayoutContext) -> Result<Vec<OutputPageSpec>> {
    let plan = ctx.plan;
    let units = units(ctx);
    let mut vacancies = VacancyCounter::new(plan.vacant_slots);
    let mut pages = Vec::with_capacity(2 * plan.number_of_sheets as usize);

    for idx in 1..=plan.number_of_sheets {
        let numbers = fold_sheet_pages(idx, plan.slots_available, ctx.page_count(), &mut vacancies)?;
        let front: Vec<_> = units
            .iter()
            .flat_map(|&unit| unit_placements(unit, numbers.front))
            .collect();
        let back: Vec<_> = units
            .iter()
            .flat_map(|&unit| unit_placements(unit, numbers.back))
            .collect();
        pages.push(ctx.page(idx, SheetSide::Front).with_placements(front));
        pages.push(ctx.page(idx, SheetSide::Back).with_placements(back));
    }

    vacancies.finish()?;
    Ok(pages)
}

/// Counts slot numbers that fall past the end of the document
struct SkipCounter {
    page_count: u32,
    skipped: u32,
}

impl SkipCounter {
    fn page(&mut self, number: u32) -> Option<u32> {
        if number > self.page_count {
            self.skipped += 1;
            None
        } else {
            Some(number)
        }
    }
}

/// One booklet on half the paper: each physical sheet carries two fold sheets.
///
/// Fold sheet `k` of a booklet with `N` slots carries `N - 2k + 2` and
/// `2k - 1` on its front, `2k` and `N + 1 - 2k` on its back. With `S`
/// physical sheets, sheet `i` carries fold sheet `i` in its first unit and
/// fold sheet `S + i` in its second. Cutting the printed stack in half gives
/// two piles already in order; the first pile nests outside the second.
pub(crate) fn side_fold_4up_single(ctx: &LayoutContext) -> Result<Vec<OutputPageSpec>> {
    let plan = ctx.plan;
    let slots = plan.slots_available;
    let units = units(ctx);
    let mut counter = SkipCounter {
        page_count: ctx.page_count(),
        skipped: 0,
    };
    let mut pages = Vec::with_capacity(2 * plan.number_of_sheets as usize);

    for idx in 1..=plan.number_of_sheets {
        let mut front = Vec::with_capacity(4);
        let mut back = Vec::with_capacity(4);
        for (corner, &unit) in units.iter().enumerate() {
            let k = idx + corner as u32 * plan.number_of_sheets;
            front.extend(unit_placements(
                unit,
                (counter.page(slots + 2 - 2 * k), counter.page(2 * k - 1)),
            ));
            back.extend(unit_placements(
                unit,
                (counter.page(2 * k), counter.page(slots + 1 - 2 * k)),
            ));
        }
        pages.push(ctx.page(idx, SheetSide::Front).with_placements(front));
        pages.push(ctx.page(idx, SheetSide::Back).with_placements(back));
    }

    if counter.skipped != plan.vacant_slots {
        return Err(ImposeError::InvariantViolation(format!(
            "skipped {} slots but the plan has {} vacant",
            counter.skipped, plan.vacant_slots
        )));
    }
    log::debug!(
        "4-up single: {} sheets, {} slots skipped",
        plan.number_of_sheets,
        counter.skipped
    );
    Ok(pages)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::SheetPlan;
    use crate::types::PageShape;

    fn context(page_count: u32, pages_per_sheet: u32, landscape: bool) -> LayoutContext {
        let (pw, ph, sw, sh) = if landscape {
            (842.0, 595.0, 842.0, 595.0)
        } else {
            (595.0, 842.0, 595.0, 842.0)
        };
        LayoutContext {
            shape: PageShape::new(page_count, pw, ph),
            sheet_width: sw,
            sheet_height: sh,
            plan: SheetPlan::new(page_count, pages_per_sheet).unwrap(),
            right_to_left: false,
        }
    }

    fn numbers(page: &OutputPageSpec) -> Vec<Option<u32>> {
        page.placements.iter().map(|p| p.source_page).collect()
    }

    #[test]
    fn test_4up_repeats_fold_sheet_in_both_rows() {
        let pages = side_fold_4up(&context(4, 4, false)).unwrap();
        assert_eq!(pages.len(), 2);
        assert_eq!(numbers(&pages[0]), vec![Some(4), Some(1), Some(4), Some(1)]);
        assert_eq!(numbers(&pages[1]), vec![Some(2), Some(3), Some(2), Some(3)]);
        // Top row first
        assert_eq!(pages[0].placements[0].dest_rect, Rect::new(0.0, 421.0, 297.5, 421.0));
        assert_eq!(pages[0].placements[3].dest_rect, Rect::new(297.5, 0.0, 297.5, 421.0));
    }

    #[test]
    fn test_4up_single_eight_pages() {
        let pages = side_fold_4up_single(&context(8, 8, false)).unwrap();
        assert_eq!(pages.len(), 2);
        assert_eq!(numbers(&pages[0]), vec![Some(8), Some(1), Some(6), Some(3)]);
        assert_eq!(numbers(&pages[1]), vec![Some(2), Some(7), Some(4), Some(5)]);
    }

    #[test]
    fn test_4up_single_cut_piles_stay_in_order() {
        let pages = side_fold_4up_single(&context(16, 8, false)).unwrap();
        assert_eq!(pages.len(), 4);
        // Sheet 1 carries fold sheets 1 and 3, sheet 2 fold sheets 2 and 4
        assert_eq!(numbers(&pages[0]), vec![Some(16), Some(1), Some(12), Some(5)]);
        assert_eq!(numbers(&pages[1]), vec![Some(2), Some(15), Some(6), Some(11)]);
        assert_eq!(numbers(&pages[2]), vec![Some(14), Some(3), Some(10), Some(7)]);
        assert_eq!(numbers(&pages[3]), vec![Some(4), Some(13), Some(8), Some(9)]);
    }

    #[test]
    fn test_4up_single_skips_exactly_the_vacancies() {
        let pages = side_fold_4up_single(&context(9, 8, false)).unwrap();
        let blanks = pages
            .iter()
            .flat_map(|p| &p.placements)
            .filter(|p| p.is_blank())
            .count();
        assert_eq!(blanks, 7);
    }

    #[test]
    fn test_landscape_units_are_columns() {
        let pages = side_fold_4up(&context(4, 4, true)).unwrap();
        let front = &pages[0].placements;
        // Superior above inferior in the left column
        assert_eq!(front[0].dest_rect, Rect::new(0.0, 297.5, 421.0, 297.5));
        assert_eq!(front[1].dest_rect, Rect::new(0.0, 0.0, 421.0, 297.5));
        assert_eq!(front[2].dest_rect.x, 421.0);
    }
}
