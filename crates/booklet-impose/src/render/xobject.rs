//! XObject creation for imposition
//!
//! This module handles creating Form XObjects from source PDF pages,
//! which are then placed onto output pages with transformations.

use crate::constants::DEFAULT_PAGE_DIMENSIONS;
use crate::types::Result;
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};
use std::collections::HashMap;

/// Page bounds as (x, y, width, height) in points
pub type MediaBox = (f64, f64, f64, f64);

// =============================================================================
// XObject Creation
// =============================================================================

/// Create an XObject from a source page.
///
/// Resources referenced by the page are deep-copied into `output` once;
/// `cache` maps source object ids to their copies.
pub fn create_page_xobject(
    output: &mut Document,
    source: &Document,
    page_id: ObjectId,
    cache: &mut HashMap<ObjectId, ObjectId>,
) -> Result<ObjectId> {
    let (x, y, width, height) = page_media_box(source, page_id)?;
    // Pages without Contents are blank
    let content_data = source.get_page_content(page_id).unwrap_or_default();

    let mut xobject_dict = Dictionary::new();
    xobject_dict.set("Type", Object::Name(b"XObject".to_vec()));
    xobject_dict.set("Subtype", Object::Name(b"Form".to_vec()));
    xobject_dict.set(
        "BBox",
        Object::Array(vec![
            Object::Real(x as f32),
            Object::Real(y as f32),
            Object::Real((x + width) as f32),
            Object::Real((y + height) as f32),
        ]),
    );
    xobject_dict.set("FormType", Object::Integer(1));

    if let Some(resources) = inherited(source, page_id, b"Resources")? {
        xobject_dict.set(
            "Resources",
            copy_object_deep(output, source, &resources, cache)?,
        );
    }

    Ok(output.add_object(Stream::new(xobject_dict, content_data)))
}

// =============================================================================
// Deep Copy
// =============================================================================

/// Deep copy an object from source to output document, following references.
pub fn copy_object_deep(
    output: &mut Document,
    source: &Document,
    obj: &Object,
    cache: &mut HashMap<ObjectId, ObjectId>,
) -> Result<Object> {
    match obj {
        Object::Reference(id) => {
            if let Some(&new_id) = cache.get(id) {
                return Ok(Object::Reference(new_id));
            }

            // Reserve the id first so reference cycles resolve to it
            let new_id = output.new_object_id();
            cache.insert(*id, new_id);

            let referenced = source.get_object(*id)?;
            let copied = copy_object_deep(output, source, referenced, cache)?;
            output.objects.insert(new_id, copied);

            Ok(Object::Reference(new_id))
        }
        Object::Dictionary(dict) => {
            let mut new_dict = Dictionary::new();
            for (key, value) in dict.iter() {
                // Never pull the source page tree in through a back-reference
                if key.as_slice() == b"Parent" {
                    continue;
                }
                new_dict.set(key.clone(), copy_object_deep(output, source, value, cache)?);
            }
            Ok(Object::Dictionary(new_dict))
        }
        Object::Array(arr) => {
            let new_arr: Result<Vec<_>> = arr
                .iter()
                .map(|item| copy_object_deep(output, source, item, cache))
                .collect();
            Ok(Object::Array(new_arr?))
        }
        Object::Stream(stream) => {
            let mut new_dict = Dictionary::new();
            for (key, value) in stream.dict.iter() {
                new_dict.set(key.clone(), copy_object_deep(output, source, value, cache)?);
            }
            Ok(Object::Stream(Stream {
                dict: new_dict,
                content: stream.content.clone(),
                allows_compression: stream.allows_compression,
                start_position: None,
            }))
        }
        _ => Ok(obj.clone()),
    }
}

// =============================================================================
// Page Dimensions
// =============================================================================

/// Look up a page attribute, following the page tree for inheritable keys
fn inherited(doc: &Document, page_id: ObjectId, key: &[u8]) -> Result<Option<Object>> {
    let mut dict = doc.get_dictionary(page_id)?;
    loop {
        if let Ok(value) = dict.get(key) {
            return Ok(Some(value.clone()));
        }
        match dict.get(b"Parent").and_then(|p| p.as_reference()) {
            Ok(parent) => dict = doc.get_dictionary(parent)?,
            Err(_) => return Ok(None),
        }
    }
}

/// Source page MediaBox, defaulting to US Letter when absent or malformed
pub fn page_media_box(doc: &Document, page_id: ObjectId) -> Result<MediaBox> {
    let default = (0.0, 0.0, DEFAULT_PAGE_DIMENSIONS.0, DEFAULT_PAGE_DIMENSIONS.1);

    let media_box = match inherited(doc, page_id, b"MediaBox")? {
        Some(Object::Array(values)) => values,
        Some(Object::Reference(id)) => match doc.get_object(id)?.as_array() {
            Ok(values) => values.clone(),
            Err(_) => return Ok(default),
        },
        _ => return Ok(default),
    };

    let numbers: Vec<f64> = media_box.iter().filter_map(extract_number).collect();
    if numbers.len() != 4 {
        return Ok(default);
    }
    let (x1, y1, x2, y2) = (numbers[0], numbers[1], numbers[2], numbers[3]);
    Ok((x1.min(x2), y1.min(y2), (x2 - x1).abs(), (y2 - y1).abs()))
}

/// Extract numeric value from a PDF object
fn extract_number(obj: &Object) -> Option<f64> {
    match obj {
        Object::Integer(i) => Some(*i as f64),
        Object::Real(r) => Some(*r as f64),
        _ => None,
    }
}
