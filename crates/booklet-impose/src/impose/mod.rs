//! PDF imposition - arranging pages for printing and folding
//!
//! This module orchestrates the imposition process:
//! 1. Probe the source document's page count and size
//! 2. Plan the output pages for the selected layout
//! 3. Render the plan into a new PDF

mod io;

pub use io::{load_pdf, save_pdf};

use crate::layout::OutputPageSpec;
use crate::options::ImpositionOptions;
use crate::render::{DocumentShapeProbe, LopdfRenderer, render_plan};
use crate::types::*;
use lopdf::Document;

/// Main imposition function
pub async fn impose(document: &Document, options: &ImpositionOptions) -> Result<Document> {
    options.paper.validate()?;

    let document = document.clone();
    let options = options.clone();

    tokio::task::spawn_blocking(move || impose_sync(&document, &options, None)).await?
}

/// Plan and render, optionally keeping only the first `max_sheets` sheets
pub(crate) fn impose_sync(
    document: &Document,
    options: &ImpositionOptions,
    max_sheets: Option<u32>,
) -> Result<Document> {
    let shape = document.shape()?;
    if shape.page_count == 0 {
        return Err(ImposeError::NoPages);
    }

    let mut pages = options
        .layout
        .plan(&shape, &options.paper, &options.conversion)?;
    if let Some(max_sheets) = max_sheets {
        pages.retain(|page| page.sheet_index <= max_sheets);
    }

    let mut renderer = LopdfRenderer::new(document);
    render_plan(&mut renderer, &pages)?;

    log::info!(
        "Imposed {} pages as {} onto {} output pages",
        shape.page_count,
        options.layout,
        pages.len()
    );
    Ok(renderer.finish())
}

/// Plan the output pages for a document without rendering them
pub fn plan_document(document: &Document, options: &ImpositionOptions) -> Result<Vec<OutputPageSpec>> {
    let shape = document.shape()?;
    options
        .layout
        .plan(&shape, &options.paper, &options.conversion)
}
