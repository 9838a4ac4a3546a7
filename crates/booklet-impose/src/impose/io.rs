//! Reading source PDFs and writing imposed ones

use crate::types::*;
use lopdf::Document;
use std::path::Path;

/// Load a PDF document, parsing it off the async runtime
pub async fn load_pdf(path: impl AsRef<Path>) -> Result<Document> {
    let path = path.as_ref().to_owned();
    let bytes = tokio::fs::read(&path).await?;
    let document = tokio::task::spawn_blocking(move || Document::load_mem(&bytes)).await??;
    log::debug!(
        "Loaded {} ({} pages)",
        path.display(),
        document.get_pages().len()
    );
    Ok(document)
}

/// Compress and write an imposed document
pub async fn save_pdf(mut document: Document, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref().to_owned();
    let bytes = tokio::task::spawn_blocking(move || {
        document.compress();
        let mut buffer = Vec::new();
        document.save_to(&mut buffer)?;
        Ok::<_, ImposeError>(buffer)
    })
    .await??;
    log::debug!("Writing {} bytes to {}", bytes.len(), path.display());
    tokio::fs::write(&path, bytes).await?;
    Ok(())
}
