//! Photo sheet / mini zine generation
//!
//! One request runs straight through:
//! 1. Validate the options
//! 2. Plan the grid for the mode
//! 3. Compose the pages
//! 4. Render to PDF bytes

mod io;

pub use io::{load_image, load_images, save_output};

use log::info;

use crate::compose::compose;
use crate::layout::plan;
use crate::options::ZineOptions;
use crate::render::render_document;
use crate::types::*;

pub const PDF_CONTENT_TYPE: &str = "application/pdf";

/// A finished document, ready to hand back to the caller
#[derive(Debug, Clone, PartialEq)]
pub struct ZineOutput {
    pub bytes: Vec<u8>,
    /// Suggested download name
    pub filename: String,
    pub content_type: String,
    pub page_count: usize,
    /// Indices of images skipped for an unsupported format
    pub skipped: Vec<usize>,
}

/// Main generation function
pub async fn generate(images: &[SourceImage], options: &ZineOptions) -> Result<ZineOutput> {
    options.validate()?;

    let images = images.to_vec();
    let options = options.clone();

    tokio::task::spawn_blocking(move || generate_blocking(&images, &options)).await?
}

/// Synchronous pipeline behind [`generate`]
pub fn generate_blocking(images: &[SourceImage], options: &ZineOptions) -> Result<ZineOutput> {
    options.validate()?;

    let plan = plan(options.mode);
    let document = compose(&plan, images, options)?;
    let bytes = render_document(&document, images)?;

    info!(
        "Generated {}: {} pages, {} images placed, {} skipped, {} ignored ({} bytes)",
        options.mode.filename(),
        document.page_count(),
        document.images_placed(),
        document.skipped.len(),
        document.ignored,
        bytes.len()
    );

    Ok(ZineOutput {
        bytes,
        filename: options.mode.filename().to_string(),
        content_type: PDF_CONTENT_TYPE.to_string(),
        page_count: document.page_count(),
        skipped: document.skipped,
    })
}
