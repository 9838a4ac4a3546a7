//! Cut & stack imposition for landscape pages
//!
//! Each sheet carries two landscape pages per side, one above the other.
//! After printing, the whole pile is cut across the middle and the bottom
//! pile is laid under the top pile:
//!
//! ```text
//! Sheet idx front:  top = 2*idx - 1     bottom = S/2 + 2*idx - 1
//! Sheet idx back:   top = 2*idx         bottom = S/2 + 2*idx
//! ```

use crate::types::Result;

use super::{LayoutContext, OutputPageSpec, PlacementSpec, Rect, SheetSide};

pub(crate) fn cut_stack(ctx: &LayoutContext) -> Result<Vec<OutputPageSpec>> {
    let plan = ctx.plan;
    let half = plan.slots_available / 2;
    let (w, h) = (ctx.sheet_width, ctx.sheet_height);
    let top = Rect::new(0.0, h / 2.0, w, h / 2.0);
    let bottom = Rect::new(0.0, 0.0, w, h / 2.0);

    let mut pages = Vec::with_capacity(2 * plan.number_of_sheets as usize);
    for idx in 1..=plan.number_of_sheets {
        let front = vec![
            PlacementSpec::new(Some(2 * idx - 1), top),
            PlacementSpec::new(ctx.existing(half + 2 * idx - 1), bottom),
        ];
        let back = vec![
            PlacementSpec::new(ctx.existing(2 * idx), top),
            PlacementSpec::new(ctx.existing(half + 2 * idx), bottom),
        ];
        pages.push(ctx.page(idx, SheetSide::Front).with_placements(front));
        pages.push(ctx.page(idx, SheetSide::Back).with_placements(back));
    }
    Ok(pages)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::SheetPlan;
    use crate::types::PageShape;

    fn pages_for(page_count: u32) -> Vec<OutputPageSpec> {
        let ctx = LayoutContext {
            shape: PageShape::new(page_count, 842.0, 595.0),
            sheet_width: 595.0,
            sheet_height: 842.0,
            plan: SheetPlan::new(page_count, 4).unwrap(),
            right_to_left: false,
        };
        cut_stack(&ctx).unwrap()
    }

    fn numbers(page: &OutputPageSpec) -> Vec<Option<u32>> {
        page.placements.iter().map(|p| p.source_page).collect()
    }

    #[test]
    fn test_eight_pages_split_into_two_piles() {
        let pages = pages_for(8);
        assert_eq!(numbers(&pages[0]), vec![Some(1), Some(5)]);
        assert_eq!(numbers(&pages[1]), vec![Some(2), Some(6)]);
        assert_eq!(numbers(&pages[2]), vec![Some(3), Some(7)]);
        assert_eq!(numbers(&pages[3]), vec![Some(4), Some(8)]);
    }

    #[test]
    fn test_short_document_leaves_bottom_blank() {
        let pages = pages_for(5);
        assert_eq!(numbers(&pages[0]), vec![Some(1), Some(5)]);
        assert_eq!(numbers(&pages[1]), vec![Some(2), None]);
        assert_eq!(numbers(&pages[2]), vec![Some(3), None]);
        assert_eq!(numbers(&pages[3]), vec![Some(4), None]);
    }

    #[test]
    fn test_top_half_sits_above_bottom_half() {
        let pages = pages_for(2);
        assert_eq!(pages[0].placements[0].dest_rect.y, 421.0);
        assert_eq!(pages[0].placements[1].dest_rect.y, 0.0);
    }
}
