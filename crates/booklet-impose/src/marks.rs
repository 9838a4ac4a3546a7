//! Crop marks for imposed pages
//!
//! Crop marks are computed as plain line segments from the final placement
//! rectangles, so any renderer can draw them. [`marks_content`] turns them
//! into PDF content stream operations for the lopdf renderer.

use crate::constants::{CROP_MARK_GAP, CROP_MARK_LENGTH, CROP_MARK_WIDTH};
use crate::layout::{MarkSegment, OutputPageSpec, Rect};

/// Generate crop marks for every placement rectangle on a page.
///
/// Each corner gets two short lines continuing the rectangle's edges
/// outward, clipped to the page. Rectangles shared by several placements
/// and segments shared by neighbouring rectangles are emitted once.
pub fn crop_marks(page: &OutputPageSpec) -> Vec<MarkSegment> {
    let mut rects: Vec<Rect> = Vec::new();
    for placement in &page.placements {
        if !rects.contains(&placement.dest_rect) {
            rects.push(placement.dest_rect);
        }
    }

    let mut segments = Vec::new();
    for rect in &rects {
        for segment in corner_marks(rect) {
            if let Some(clipped) = clip(segment, page.width, page.height) {
                if !segments.contains(&clipped) {
                    segments.push(clipped);
                }
            }
        }
    }
    segments
}

/// Two outward marks at each of the four corners
fn corner_marks(rect: &Rect) -> Vec<MarkSegment> {
    let near = CROP_MARK_GAP;
    let far = CROP_MARK_GAP + CROP_MARK_LENGTH;
    let corners = [
        (rect.x, rect.y, -1.0, -1.0),
        (rect.right(), rect.y, 1.0, -1.0),
        (rect.x, rect.top(), -1.0, 1.0),
        (rect.right(), rect.top(), 1.0, 1.0),
    ];

    corners
        .iter()
        .flat_map(|&(x, y, dx, dy)| {
            [
                // Horizontal, continuing the top/bottom edge
                MarkSegment {
                    x1: x + dx * near,
                    y1: y,
                    x2: x + dx * far,
                    y2: y,
                },
                // Vertical, continuing the left/right edge
                MarkSegment {
                    x1: x,
                    y1: y + dy * near,
                    x2: x,
                    y2: y + dy * far,
                },
            ]
        })
        .collect()
}

/// Clamp a segment to the page, dropping it if nothing is left
fn clip(segment: MarkSegment, width: f64, height: f64) -> Option<MarkSegment> {
    let on_page = |v: f64, max: f64| (0.0..=max).contains(&v);
    // Marks are axis aligned: the fixed coordinate must be on the page
    if segment.y1 == segment.y2 && !on_page(segment.y1, height) {
        return None;
    }
    if segment.x1 == segment.x2 && !on_page(segment.x1, width) {
        return None;
    }

    let clipped = MarkSegment {
        x1: segment.x1.clamp(0.0, width),
        y1: segment.y1.clamp(0.0, height),
        x2: segment.x2.clamp(0.0, width),
        y2: segment.y2.clamp(0.0, height),
    };
    let length = (clipped.x2 - clipped.x1).abs() + (clipped.y2 - clipped.y1).abs();
    (length > f64::EPSILON).then_some(clipped)
}

/// PDF content stream operations stroking the given marks
pub fn marks_content(segments: &[MarkSegment]) -> String {
    if segments.is_empty() {
        return String::new();
    }

    let mut ops = String::new();
    ops.push_str("q\n");
    ops.push_str("0 0 0 RG\n");
    ops.push_str(&format!("{} w\n", CROP_MARK_WIDTH));
    ops.push_str("[] 0 d\n");
    for s in segments {
        ops.push_str(&format!("{} {} m {} {} l S\n", s.x1, s.y1, s.x2, s.y2));
    }
    ops.push_str("Q\n");
    ops
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{PlacementSpec, SheetSide};

    fn page_with(rects: &[Rect]) -> OutputPageSpec {
        OutputPageSpec::new(1, SheetSide::Front, 400.0, 300.0).with_placements(
            rects
                .iter()
                .map(|&r| PlacementSpec::new(Some(1), r))
                .collect(),
        )
    }

    #[test]
    fn test_centered_rect_gets_eight_marks() {
        let page = page_with(&[Rect::new(100.0, 100.0, 200.0, 100.0)]);
        let marks = crop_marks(&page);
        assert_eq!(marks.len(), 8);
        assert!(marks.contains(&MarkSegment {
            x1: 97.0,
            y1: 100.0,
            x2: 85.0,
            y2: 100.0
        }));
    }

    #[test]
    fn test_marks_stay_on_page() {
        let page = page_with(&[
            Rect::new(0.0, 0.0, 200.0, 300.0),
            Rect::new(200.0, 0.0, 200.0, 300.0),
        ]);
        for mark in crop_marks(&page) {
            for (x, y) in [(mark.x1, mark.y1), (mark.x2, mark.y2)] {
                assert!((0.0..=400.0).contains(&x));
                assert!((0.0..=300.0).contains(&y));
            }
        }
    }

    #[test]
    fn test_duplicate_rects_marked_once() {
        let rect = Rect::new(100.0, 100.0, 200.0, 100.0);
        let single = crop_marks(&page_with(&[rect]));
        let doubled = crop_marks(&page_with(&[rect, rect]));
        assert_eq!(single, doubled);
    }

    #[test]
    fn test_marks_content_strokes_each_segment() {
        let page = page_with(&[Rect::new(100.0, 100.0, 200.0, 100.0)]);
        let ops = marks_content(&crop_marks(&page));
        assert_eq!(ops.matches(" l S").count(), 8);
        assert!(marks_content(&[]).is_empty());
    }
}
