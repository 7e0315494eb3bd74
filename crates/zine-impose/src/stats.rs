use crate::options::ZineOptions;
use crate::types::*;

/// Calculate statistics for a generation request without rendering anything
pub fn calculate_statistics(
    images: &[SourceImage],
    options: &ZineOptions,
) -> Result<LayoutStatistics> {
    if images.is_empty() {
        return Err(ZineError::NoImages);
    }

    let capacity = options.mode.max_images();
    let considered = &images[..images.len().min(capacity)];

    let images_unsupported = considered
        .iter()
        .filter(|image| image.kind().is_none())
        .count();
    let images_placed = considered.len() - images_unsupported;

    // The back-text page is the only thing that adds a page
    let output_pages = if options.effective_back_text().is_some() {
        2
    } else {
        1
    };

    Ok(LayoutStatistics {
        images_supplied: images.len(),
        images_placed,
        images_ignored: images.len() - considered.len(),
        images_unsupported,
        blank_panels: capacity - images_placed,
        output_pages,
    })
}
