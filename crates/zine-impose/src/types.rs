use std::io::Cursor;
use std::str::FromStr;

use image::{ImageFormat, ImageReader};
use thiserror::Error;

use crate::constants::{LETTER_HEIGHT_PT, LETTER_WIDTH_PT};

#[derive(Error, Debug)]
pub enum ZineError {
    #[error("No images supplied")]
    NoImages,
    #[error("Unknown layout mode: {0}")]
    UnknownMode(String),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Render error: {0}")]
    Render(String),
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, ZineError>;

impl ZineError {
    /// Classify the error for the transport layer
    pub fn kind(&self) -> ErrorKind {
        match self {
            ZineError::NoImages | ZineError::UnknownMode(_) | ZineError::Config(_) => {
                ErrorKind::InvalidInput
            }
            ZineError::Render(_)
            | ZineError::Image(_)
            | ZineError::Pdf(_)
            | ZineError::Io(_)
            | ZineError::TaskJoin(_) => ErrorKind::RenderFailure,
        }
    }
}

/// Coarse failure class handed back to whoever submitted the request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum ErrorKind {
    /// The request itself is unusable (rejected)
    InvalidInput,
    /// Decoding, embedding or serialization failed (server fault)
    RenderFailure,
}

/// Structured failure returned instead of a document
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ErrorPayload {
    pub kind: ErrorKind,
    pub message: String,
}

impl From<&ZineError> for ErrorPayload {
    fn from(err: &ZineError) -> Self {
        Self {
            kind: err.kind(),
            message: err.to_string(),
        }
    }
}

/// Paper orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Portrait: height > width
    Portrait,
    /// Landscape: width > height
    Landscape,
}

/// The two fixed layouts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LayoutMode {
    /// 12-up photo sheet, 3 columns by 4 rows, portrait
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "single-sheet", alias = "sheet"))]
    SingleSheet,
    /// 8-panel fold-and-cut booklet, 4 columns by 2 rows, landscape
    #[cfg_attr(feature = "serde", serde(rename = "mini-zine", alias = "zine"))]
    MiniZine,
}

impl LayoutMode {
    pub fn max_images(self) -> usize {
        match self {
            LayoutMode::SingleSheet => 12,
            LayoutMode::MiniZine => 8,
        }
    }

    pub fn orientation(self) -> Orientation {
        match self {
            LayoutMode::SingleSheet => Orientation::Portrait,
            LayoutMode::MiniZine => Orientation::Landscape,
        }
    }

    /// Page size in points with orientation applied
    pub fn page_dimensions_pt(self) -> (f32, f32) {
        match self.orientation() {
            Orientation::Portrait => (LETTER_WIDTH_PT, LETTER_HEIGHT_PT),
            Orientation::Landscape => (LETTER_HEIGHT_PT, LETTER_WIDTH_PT),
        }
    }

    /// Suggested download name for the finished document
    pub fn filename(self) -> &'static str {
        match self {
            LayoutMode::SingleSheet => "photo-sheet.pdf",
            LayoutMode::MiniZine => "mini-zine.pdf",
        }
    }

    pub fn token(self) -> &'static str {
        match self {
            LayoutMode::SingleSheet => "single-sheet",
            LayoutMode::MiniZine => "mini-zine",
        }
    }

    /// Whether the back-text page and panel overlays apply
    pub fn is_zine(self) -> bool {
        self == LayoutMode::MiniZine
    }
}

impl FromStr for LayoutMode {
    type Err = ZineError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "single-sheet" | "sheet" => Ok(LayoutMode::SingleSheet),
            "mini-zine" | "zine" => Ok(LayoutMode::MiniZine),
            other => Err(ZineError::UnknownMode(other.to_string())),
        }
    }
}

/// Supported raster payloads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RasterKind {
    Jpeg,
    Png,
}

impl RasterKind {
    /// Parse a declared format (MIME type, extension or bare name)
    pub fn from_declared(declared: &str) -> Option<Self> {
        let declared = declared.trim().trim_start_matches('.').to_ascii_lowercase();
        match declared.as_str() {
            "jpeg" | "jpg" | "image/jpeg" | "image/jpg" => Some(RasterKind::Jpeg),
            "png" | "image/png" => Some(RasterKind::Png),
            _ => None,
        }
    }

    pub fn image_format(self) -> ImageFormat {
        match self {
            RasterKind::Jpeg => ImageFormat::Jpeg,
            RasterKind::Png => ImageFormat::Png,
        }
    }
}

/// One user photo: encoded bytes plus the format the uploader declared
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceImage {
    pub bytes: Vec<u8>,
    pub declared_format: String,
}

impl SourceImage {
    pub fn new(bytes: impl Into<Vec<u8>>, declared_format: impl Into<String>) -> Self {
        Self {
            bytes: bytes.into(),
            declared_format: declared_format.into(),
        }
    }

    /// `None` when the declared format is neither JPEG nor PNG
    pub fn kind(&self) -> Option<RasterKind> {
        RasterKind::from_declared(&self.declared_format)
    }

    /// Pixel dimensions read from the payload header
    pub fn dimensions(&self) -> Result<(u32, u32)> {
        let cursor = Cursor::new(self.bytes.as_slice());
        let reader = match self.kind() {
            Some(kind) => ImageReader::with_format(cursor, kind.image_format()),
            None => ImageReader::new(cursor).with_guessed_format()?,
        };
        Ok(reader.into_dimensions()?)
    }
}

/// Statistics about a generation request
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutStatistics {
    /// Images handed to the engine
    pub images_supplied: usize,
    /// Images that end up on a panel
    pub images_placed: usize,
    /// Images past the mode's maximum
    pub images_ignored: usize,
    /// Images within the maximum whose declared format is unsupported
    pub images_unsupported: usize,
    /// Panels left without a photo
    pub blank_panels: usize,
    /// Pages in the output document
    pub output_pages: usize,
}
