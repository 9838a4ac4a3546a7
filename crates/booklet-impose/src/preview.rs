use crate::impose::impose_sync;
use crate::options::ImpositionOptions;
use crate::types::*;
use lopdf::Document;

/// Generate a preview of the imposition
/// Returns a document holding only the first `max_sheets` sheets
pub async fn generate_preview(
    document: &Document,
    options: &ImpositionOptions,
    max_sheets: u32,
) -> Result<Document> {
    if max_sheets == 0 {
        return Err(ImposeError::InvalidInput(
            "a preview needs at least one sheet".to_string(),
        ));
    }
    options.paper.validate()?;

    let document = document.clone();
    let options = options.clone();

    tokio::task::spawn_blocking(move || impose_sync(&document, &options, Some(max_sheets))).await?
}
