//! File I/O for photos and finished documents

use std::path::Path;

use crate::types::*;

use super::ZineOutput;

/// Load a photo; its declared format is the file extension
pub async fn load_image(path: impl AsRef<Path>) -> Result<SourceImage> {
    let path = path.as_ref();
    let bytes = tokio::fs::read(path).await?;
    let declared = path
        .extension()
        .map(|ext| ext.to_string_lossy().into_owned())
        .unwrap_or_default();
    Ok(SourceImage::new(bytes, declared))
}

/// Load multiple photos, keeping their order
pub async fn load_images(paths: &[impl AsRef<Path>]) -> Result<Vec<SourceImage>> {
    let mut images = Vec::new();
    for path in paths {
        images.push(load_image(path).await?);
    }
    Ok(images)
}

/// Save the generated document
pub async fn save_output(output: &ZineOutput, path: impl AsRef<Path>) -> Result<()> {
    tokio::fs::write(path, &output.bytes).await?;
    Ok(())
}
