//! Single-sheet 8-page fold
//!
//! Eight portrait pages on one side of one sheet, folded into a small
//! booklet. The sheet is a 4×2 grid; the top row is printed upside down:
//!
//! ```text
//! +----+----+----+----+
//! | 7↓ | 6↓ | 5↓ | 4↓ |
//! +----+----+----+----+
//! | 8  | 1  | 2  | 3  |
//! +----+----+----+----+
//! ```

use crate::constants::FOLDED_8UP_MAX_PAGES;
use crate::types::{ImposeError, Result};

use super::{LayoutContext, OutputPageSpec, PlacementSpec, Rect, SheetSide};

/// Grid cell of each slot, slot 1 first: (column, top row)
const SLOT_CELLS: [(u32, bool); 8] = [
    (1, false), // bottom inner left
    (2, false), // bottom inner right
    (3, false), // bottom right corner
    (3, true),  // top right corner
    (2, true),  // top inner right
    (1, true),  // top inner left
    (0, true),  // top left corner
    (0, false), // bottom left corner
];

pub(crate) fn folded_8up(ctx: &LayoutContext) -> Result<Vec<OutputPageSpec>> {
    if ctx.page_count() > FOLDED_8UP_MAX_PAGES {
        return Err(ImposeError::UnsupportedInput(format!(
            "the 8-page fold takes at most {} pages, document has {}",
            FOLDED_8UP_MAX_PAGES,
            ctx.page_count()
        )));
    }
    if ctx.plan.number_of_sheets == 0 {
        return Ok(Vec::new());
    }

    let cell_w = ctx.sheet_width / 4.0;
    let cell_h = ctx.sheet_height / 2.0;

    let placements = SLOT_CELLS
        .iter()
        .zip(1u32..)
        .map(|(&(col, top), slot)| {
            let y = if top { cell_h } else { 0.0 };
            let rect = Rect::new(col as f64 * cell_w, y, cell_w, cell_h);
            let placement = PlacementSpec::new(ctx.existing(slot), rect);
            if top { placement.upside_down() } else { placement }
        })
        .collect();

    Ok(vec![ctx.page(1, SheetSide::Front).with_placements(placements)])
}
