use crate::constants::FOLDED_8UP_MAX_PAGES;
use crate::layout::LayoutMethod;
use crate::types::*;

/// Calculate statistics for the imposition
pub fn calculate_statistics(
    method: LayoutMethod,
    shape: &PageShape,
) -> Result<ImpositionStatistics> {
    if shape.page_count == 0 {
        return Err(ImposeError::NoPages);
    }

    let orientation = shape.orientation();
    if !method.is_enabled(orientation) {
        return Err(ImposeError::UnsupportedShape {
            layout: method.id(),
            orientation,
        });
    }

    let plan = method.sheet_plan(shape.page_count)?;

    let output_pages = match method {
        LayoutMethod::Original => plan.number_of_sheets,
        LayoutMethod::Folded8Up => {
            if shape.page_count > FOLDED_8UP_MAX_PAGES {
                return Err(ImposeError::UnsupportedInput(format!(
                    "the 8-page fold takes at most {} pages, document has {}",
                    FOLDED_8UP_MAX_PAGES, shape.page_count
                )));
            }
            // Printed on one side only
            plan.number_of_sheets
        }
        _ => plan.number_of_sheets * 2,
    };

    Ok(ImpositionStatistics {
        source_pages: shape.page_count as usize,
        output_sheets: plan.number_of_sheets as usize,
        output_pages: output_pages as usize,
        slots_available: plan.slots_available as usize,
        blank_slots: plan.vacant_slots as usize,
        copies_per_sheet: method.copies_per_sheet() as usize,
    })
}
