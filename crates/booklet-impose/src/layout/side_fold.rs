//! Side-fold booklet and calendar imposition
//!
//! Both layouts print two pages per side and fold each sheet once:
//!
//! ```text
//! Sheet 1 front:  [ N | 1 ]     Sheet 1 back:  [ 2 | N-1 ]
//! Sheet 2 front:  [N-2| 3 ]     Sheet 2 back:  [ 4 | N-3 ]
//! ```
//!
//! Calendar stock is turned over top-to-bottom, so its back sides are
//! rotated half a turn about the sheet centre.

use crate::types::Result;

use super::sheet::{VacancyCounter, fold_sheet_pages, sheet_halves};
use super::{LayoutContext, OutputPageSpec, PlacementSpec, SheetSide};

/// Classic saddle-stitch booklet, two pages per side
pub(crate) fn side_fold(ctx: &LayoutContext) -> Result<Vec<OutputPageSpec>> {
    folded_sheets(ctx, false)
}

/// Side-fold numbering with back sides turned half a turn
pub(crate) fn calendar(ctx: &LayoutContext) -> Result<Vec<OutputPageSpec>> {
    folded_sheets(ctx, true)
}

fn folded_sheets(ctx: &LayoutContext, flip_back: bool) -> Result<Vec<OutputPageSpec>> {
    let plan = ctx.plan;
    let (superior, inferior) = sheet_halves(ctx);
    let mut vacancies = VacancyCounter::new(plan.vacant_slots);
    let mut pages = Vec::with_capacity(2 * plan.number_of_sheets as usize);

    for idx in 1..=plan.number_of_sheets {
        let numbers = fold_sheet_pages(idx, plan.slots_available, ctx.page_count(), &mut vacancies)?;

        let front = vec![
            PlacementSpec::new(numbers.front.0, superior),
            PlacementSpec::new(numbers.front.1, inferior),
        ];
        let mut back = vec![
            PlacementSpec::new(numbers.back.0, superior),
            PlacementSpec::new(numbers.back.1, inferior),
        ];
        if flip_back {
            back = back
                .into_iter()
                .map(|placement| {
                    let rect = placement
                        .dest_rect
                        .rotated_half_turn(ctx.sheet_width, ctx.sheet_height);
                    PlacementSpec {
                        dest_rect: rect,
                        ..placement
                    }
                    .upside_down()
                })
                .collect();
        }

        pages.push(ctx.page(idx, SheetSide::Front).with_placements(front));
        pages.push(ctx.page(idx, SheetSide::Back).with_placements(back));
    }

    vacancies.finish()?;
    Ok(pages)
}
