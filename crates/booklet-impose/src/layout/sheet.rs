//! Shared sheet arithmetic and post-processing
//!
//! Everything here is common to several layouts: the running vacancy
//! counter, the saddle-stitch numbering of one folded sheet, the two
//! half-sheet slots of a 2-up side, and the mirror pass applied after a
//! layout has produced its pages.

use crate::types::{ImposeError, PageOrientation, Result};

use super::{LayoutContext, OutputPageSpec, Rect};

// =============================================================================
// Vacancy Bookkeeping
// =============================================================================

/// Running count of vacant slots still to be handed out.
///
/// Vacancies are consumed strictly in placement order, so one counter is
/// threaded through every sheet of a conversion.
#[derive(Debug)]
pub(crate) struct VacancyCounter {
    initial: u32,
    remaining: u32,
}

impl VacancyCounter {
    pub(crate) fn new(vacant_slots: u32) -> Self {
        Self {
            initial: vacant_slots,
            remaining: vacant_slots,
        }
    }

    /// Consume one vacancy if any is left
    pub(crate) fn take(&mut self) -> bool {
        if self.remaining > 0 {
            self.remaining -= 1;
            true
        } else {
            false
        }
    }

    /// Record a slot left blank for a reason other than [`take`](Self::take)
    pub(crate) fn consume_forced(&mut self) -> Result<()> {
        if self.remaining == 0 {
            return Err(ImposeError::InvariantViolation(format!(
                "blank slot beyond the {} vacant slots of the plan",
                self.initial
            )));
        }
        self.remaining -= 1;
        Ok(())
    }

    /// Every vacancy must have been consumed once all sheets are placed
    pub(crate) fn finish(self) -> Result<()> {
        if self.remaining != 0 {
            return Err(ImposeError::InvariantViolation(format!(
                "{} of {} vacant slots left unconsumed",
                self.remaining, self.initial
            )));
        }
        Ok(())
    }
}

// =============================================================================
// Fold Sheet Numbering
// =============================================================================

/// Source pages of one folded sheet, as (superior, inferior) per side
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FoldSheetPages {
    pub front: (Option<u32>, Option<u32>),
    pub back: (Option<u32>, Option<u32>),
}

/// Saddle-stitch numbering of folded sheet `idx` (1-based) of a booklet
/// with `slots` slots.
///
/// Superior positions and the back-right position give up their page while
/// vacancies remain; the back-left page only exists while `2 * idx` is a
/// real page.
pub(crate) fn fold_sheet_pages(
    idx: u32,
    slots: u32,
    page_count: u32,
    vacancies: &mut VacancyCounter,
) -> Result<FoldSheetPages> {
    let front_left = if vacancies.take() {
        None
    } else {
        Some(slots + 2 - 2 * idx)
    };
    let front_right = Some(2 * idx - 1);

    let back_left = if 2 * idx <= page_count {
        Some(2 * idx)
    } else {
        vacancies.consume_forced()?;
        None
    };
    let back_right = if vacancies.take() {
        None
    } else {
        Some(slots + 1 - 2 * idx)
    };

    Ok(FoldSheetPages {
        front: (front_left, front_right),
        back: (back_left, back_right),
    })
}

// =============================================================================
// Half-Sheet Geometry
// =============================================================================

/// (superior, inferior) halves of a sheet side.
///
/// Landscape pages stack top over bottom at full width; other pages sit
/// side by side at full height, superior on the left unless reading
/// right to left.
pub(crate) fn sheet_halves(ctx: &LayoutContext) -> (Rect, Rect) {
    let (w, h) = (ctx.sheet_width, ctx.sheet_height);
    if ctx.shape.orientation() == PageOrientation::Landscape {
        (
            Rect::new(0.0, h / 2.0, w, h / 2.0),
            Rect::new(0.0, 0.0, w, h / 2.0),
        )
    } else {
        let left = Rect::new(0.0, 0.0, w / 2.0, h);
        let right = Rect::new(w / 2.0, 0.0, w / 2.0, h);
        if ctx.right_to_left {
            (right, left)
        } else {
            (left, right)
        }
    }
}

// =============================================================================
// Mirror
// =============================================================================

/// Flip every page horizontally about its vertical centre line.
///
/// Applying this twice restores the original pages.
pub fn mirror_pages(pages: &mut [OutputPageSpec]) {
    for page in pages {
        let width = page.width;
        for placement in &mut page.placements {
            placement.dest_rect = placement.dest_rect.mirrored(width);
            placement.mirrored = !placement.mirrored;
        }
        for mark in &mut page.marks {
            mark.x1 = width - mark.x1;
            mark.x2 = width - mark.x2;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbering(page_count: u32) -> Vec<FoldSheetPages> {
        let sheets = page_count.div_ceil(4);
        let slots = sheets * 4;
        let mut vacancies = VacancyCounter::new(slots - page_count);
        let pages = (1..=sheets)
            .map(|idx| fold_sheet_pages(idx, slots, page_count, &mut vacancies).unwrap())
            .collect();
        vacancies.finish().unwrap();
        pages
    }

    #[test]
    fn test_single_page_consumes_all_vacancies() {
        let pages = numbering(1);
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].front, (None, Some(1)));
        assert_eq!(pages[0].back, (None, None));
    }

    #[test]
    fn test_five_pages_blank_the_highest_numbers() {
        let pages = numbering(5);
        assert_eq!(pages[0].front, (None, Some(1)));
        assert_eq!(pages[0].back, (Some(2), None));
        assert_eq!(pages[1].front, (None, Some(3)));
        assert_eq!(pages[1].back, (Some(4), Some(5)));
    }

    #[test]
    fn test_full_sheet_has_no_blanks() {
        let pages = numbering(8);
        assert_eq!(pages[0].front, (Some(8), Some(1)));
        assert_eq!(pages[0].back, (Some(2), Some(7)));
        assert_eq!(pages[1].front, (Some(6), Some(3)));
        assert_eq!(pages[1].back, (Some(4), Some(5)));
    }

    #[test]
    fn test_vacancy_counter_reports_leftovers() {
        let mut counter = VacancyCounter::new(2);
        assert!(counter.take());
        assert!(matches!(
            counter.finish(),
            Err(ImposeError::InvariantViolation(_))
        ));
    }

    #[test]
    fn test_forced_blank_without_vacancy_fails() {
        let mut counter = VacancyCounter::new(0);
        assert!(!counter.take());
        assert!(counter.consume_forced().is_err());
    }
}
