//! Output page rendering with lopdf
//!
//! [`LopdfRenderer`] implements [`PageRenderer`] by turning each source page
//! into a Form XObject and painting it into the destination rectangle of
//! every placement that references it.

use crate::layout::{MarkSegment, OutputPageSpec, Rect};
use crate::marks::marks_content;
use crate::types::{PageShape, Result};
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};
use std::collections::HashMap;

use super::xobject::{MediaBox, create_page_xobject, page_media_box};
use super::{DocumentShapeProbe, PageRenderer};

/// An output page being assembled
pub struct PendingPage {
    width: f64,
    height: f64,
    content_ops: Vec<String>,
    xobjects: Dictionary,
}

/// Renders imposition plans into a new lopdf document
pub struct LopdfRenderer<'a> {
    source: &'a Document,
    source_page_ids: Vec<ObjectId>,
    output: Document,
    pages_tree_id: ObjectId,
    page_refs: Vec<Object>,
    /// Source page id -> XObject id in the output
    xobjects: HashMap<ObjectId, ObjectId>,
    /// Source object id -> copied object id
    object_cache: HashMap<ObjectId, ObjectId>,
}

impl<'a> LopdfRenderer<'a> {
    pub fn new(source: &'a Document) -> Self {
        let mut output = Document::with_version("1.7");
        let pages_tree_id = output.new_object_id();
        Self {
            source,
            source_page_ids: source.get_pages().into_values().collect(),
            output,
            pages_tree_id,
            page_refs: Vec::new(),
            xobjects: HashMap::new(),
            object_cache: HashMap::new(),
        }
    }

    /// Number of output pages finished so far
    pub fn page_count(&self) -> usize {
        self.page_refs.len()
    }

    /// Create pages tree and catalog, returning the finished document
    pub fn finish(mut self) -> Document {
        let count = self.page_refs.len() as i64;
        let pages_dict = Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Pages".to_vec())),
            ("Kids", Object::Array(self.page_refs)),
            ("Count", Object::Integer(count)),
        ]);
        self.output
            .objects
            .insert(self.pages_tree_id, Object::Dictionary(pages_dict));

        let catalog_id = self.output.add_object(Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Catalog".to_vec())),
            ("Pages", Object::Reference(self.pages_tree_id)),
        ]));

        self.output.trailer.set("Root", catalog_id);
        self.output
    }

    fn source_page_id(&self, source_page: u32) -> Option<ObjectId> {
        (source_page as usize)
            .checked_sub(1)
            .and_then(|idx| self.source_page_ids.get(idx).copied())
    }

    fn xobject_for(&mut self, page_id: ObjectId) -> Result<ObjectId> {
        if let Some(&id) = self.xobjects.get(&page_id) {
            return Ok(id);
        }
        let id = create_page_xobject(
            &mut self.output,
            self.source,
            page_id,
            &mut self.object_cache,
        )?;
        self.xobjects.insert(page_id, id);
        Ok(id)
    }
}

impl PageRenderer for LopdfRenderer<'_> {
    type Page = PendingPage;

    fn begin_page(&mut self, spec: &OutputPageSpec) -> Result<PendingPage> {
        Ok(PendingPage {
            width: spec.width,
            height: spec.height,
            content_ops: Vec::new(),
            xobjects: Dictionary::new(),
        })
    }

    fn draw(
        &mut self,
        page: &mut PendingPage,
        source_page: u32,
        dest_rect: Rect,
        rotation_degrees: u16,
        mirrored: bool,
    ) -> Result<()> {
        let Some(page_id) = self.source_page_id(source_page) else {
            log::warn!(
                "Skipping source page {}: document has {} pages",
                source_page,
                self.source_page_ids.len()
            );
            return Ok(());
        };
        let media_box = page_media_box(self.source, page_id)?;
        let xobject_id = self.xobject_for(page_id)?;

        let name = format!("P{}", page.content_ops.len());
        page.xobjects.set(name.as_bytes(), Object::Reference(xobject_id));

        let [a, b, c, d, e, f] =
            placement_matrix(media_box, &dest_rect, rotation_degrees == 180, mirrored);
        page.content_ops.push(format!(
            "q {} {} {} {} {} {} cm /{} Do Q\n",
            a, b, c, d, e, f, name
        ));
        Ok(())
    }

    fn decorate(&mut self, page: &mut PendingPage, marks: &[MarkSegment]) -> Result<()> {
        page.content_ops.push(marks_content(marks));
        Ok(())
    }

    fn finish_page(&mut self, page: PendingPage) -> Result<()> {
        let mut page_dict = Dictionary::new();
        page_dict.set("Type", Object::Name(b"Page".to_vec()));
        page_dict.set("Parent", Object::Reference(self.pages_tree_id));
        page_dict.set(
            "MediaBox",
            Object::Array(vec![
                Object::Integer(0),
                Object::Integer(0),
                Object::Real(page.width as f32),
                Object::Real(page.height as f32),
            ]),
        );

        let mut resources = Dictionary::new();
        resources.set("XObject", Object::Dictionary(page.xobjects));

        let content = page.content_ops.join("");
        let content_id = self
            .output
            .add_object(Stream::new(Dictionary::new(), content.into_bytes()));

        page_dict.set("Contents", Object::Reference(content_id));
        page_dict.set("Resources", Object::Dictionary(resources));

        let page_id = self.output.add_object(page_dict);
        self.page_refs.push(Object::Reference(page_id));
        Ok(())
    }
}

impl DocumentShapeProbe for Document {
    fn shape(&self) -> Result<PageShape> {
        let pages = self.get_pages();
        let Some((_, &first)) = pages.iter().next() else {
            return Ok(PageShape::new(0, 0.0, 0.0));
        };
        let (_, _, width, height) = page_media_box(self, first)?;
        Ok(PageShape::new(pages.len() as u32, width, height))
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Transformation matrix painting a page with the given MediaBox into `rect`.
///
/// The page is scaled to fit preserving its aspect ratio and centred.
/// A half turn flips both axes; mirroring flips the horizontal axis again.
pub fn placement_matrix(media_box: MediaBox, rect: &Rect, rotated: bool, mirrored: bool) -> [f64; 6] {
    let (bx, by, src_width, src_height) = media_box;
    let scale = (rect.width / src_width).min(rect.height / src_height);
    let width = src_width * scale;
    let height = src_height * scale;
    let x = rect.x + (rect.width - width) / 2.0;
    let y = rect.y + (rect.height - height) / 2.0;

    let flip_x = rotated != mirrored;
    let flip_y = rotated;

    let (a, e) = if flip_x {
        (-scale, x + width + bx * scale)
    } else {
        (scale, x - bx * scale)
    };
    let (d, f) = if flip_y {
        (-scale, y + height + by * scale)
    } else {
        (scale, y - by * scale)
    };
    [a, 0.0, 0.0, d, e, f]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(m: [f64; 6], x: f64, y: f64) -> (f64, f64) {
        (m[0] * x + m[2] * y + m[4], m[1] * x + m[3] * y + m[5])
    }

    #[test]
    fn test_fit_and_centre() {
        let rect = Rect::new(100.0, 0.0, 400.0, 400.0);
        let m = placement_matrix((0.0, 0.0, 200.0, 400.0), &rect, false, false);
        assert_eq!(m[0], 1.0);
        // Narrow page centred horizontally
        assert_eq!(apply(m, 0.0, 0.0), (200.0, 0.0));
        assert_eq!(apply(m, 200.0, 400.0), (400.0, 400.0));
    }

    #[test]
    fn test_half_turn_swaps_corners() {
        let rect = Rect::new(0.0, 0.0, 200.0, 400.0);
        let m = placement_matrix((0.0, 0.0, 200.0, 400.0), &rect, true, false);
        assert_eq!(apply(m, 0.0, 0.0), (200.0, 400.0));
        assert_eq!(apply(m, 200.0, 400.0), (0.0, 0.0));
    }

    #[test]
    fn test_mirror_flips_horizontally() {
        let rect = Rect::new(0.0, 0.0, 200.0, 400.0);
        let m = placement_matrix((0.0, 0.0, 200.0, 400.0), &rect, false, true);
        assert_eq!(apply(m, 0.0, 0.0), (200.0, 0.0));
        assert_eq!(apply(m, 200.0, 400.0), (0.0, 400.0));
    }

    #[test]
    fn test_offset_media_box() {
        let rect = Rect::new(0.0, 0.0, 100.0, 100.0);
        let m = placement_matrix((50.0, 50.0, 100.0, 100.0), &rect, true, false);
        assert_eq!(apply(m, 50.0, 50.0), (100.0, 100.0));
        assert_eq!(apply(m, 150.0, 150.0), (0.0, 0.0));
    }
}
