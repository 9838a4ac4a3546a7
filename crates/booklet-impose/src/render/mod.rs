//! PDF rendering for imposition plans
//!
//! The layout engine only produces [`OutputPageSpec`]s. Drawing them is the
//! job of a [`PageRenderer`]; [`LopdfRenderer`] is the one shipped here:
//! - Creating XObjects from source pages
//! - Building imposed output pages
//! - Generating transformation matrices
//! - Deep copying PDF objects

mod page;
mod xobject;

pub use page::{LopdfRenderer, PendingPage, placement_matrix};
pub use xobject::{MediaBox, copy_object_deep, create_page_xobject, page_media_box};

use crate::layout::{MarkSegment, OutputPageSpec, Rect};
use crate::types::{PageShape, Result};

/// Draws source pages onto output pages
pub trait PageRenderer {
    /// Handle for an output page under construction
    type Page;

    fn begin_page(&mut self, spec: &OutputPageSpec) -> Result<Self::Page>;

    /// Draw one-based `source_page` scaled into `dest_rect`.
    ///
    /// `rotation_degrees` is 0 or 180; `mirrored` flips the content horizontally.
    fn draw(
        &mut self,
        page: &mut Self::Page,
        source_page: u32,
        dest_rect: Rect,
        rotation_degrees: u16,
        mirrored: bool,
    ) -> Result<()>;

    /// Draw decoration lines over the placed pages
    fn decorate(&mut self, page: &mut Self::Page, marks: &[MarkSegment]) -> Result<()>;

    fn finish_page(&mut self, page: Self::Page) -> Result<()>;
}

/// Reports the page count and page size of an input document
pub trait DocumentShapeProbe {
    fn shape(&self) -> Result<PageShape>;
}

/// Feed every page of a plan to `renderer`, in order
pub fn render_plan<R: PageRenderer>(renderer: &mut R, pages: &[OutputPageSpec]) -> Result<()> {
    for spec in pages {
        let mut page = renderer.begin_page(spec)?;
        for placement in &spec.placements {
            let Some(source_page) = placement.source_page else {
                continue;
            };
            renderer.draw(
                &mut page,
                source_page,
                placement.dest_rect,
                placement.rotation_degrees,
                placement.mirrored,
            )?;
        }
        if !spec.marks.is_empty() {
            renderer.decorate(&mut page, &spec.marks)?;
        }
        renderer.finish_page(page)?;
    }
    Ok(())
}
