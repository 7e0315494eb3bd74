use crate::constants::*;
use crate::types::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Options for one generation request
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ZineOptions {
    pub mode: LayoutMode,

    // Back-text page (mini zine only)
    pub include_back_text: bool,
    pub back_text: String,

    // Panel decoration (mini zine only)
    pub panel_borders: bool,
    pub fold_guides: bool,

    // Cover captions (mini zine only)
    pub cover_caption: String,
    pub back_caption: String,
}

impl Default for ZineOptions {
    fn default() -> Self {
        Self {
            mode: LayoutMode::SingleSheet,
            include_back_text: false,
            back_text: String::new(),
            panel_borders: true,
            fold_guides: false,
            cover_caption: DEFAULT_COVER_CAPTION.to_string(),
            back_caption: DEFAULT_BACK_CAPTION.to_string(),
        }
    }
}

impl ZineOptions {
    pub fn single_sheet() -> Self {
        Self::default()
    }

    pub fn mini_zine() -> Self {
        Self {
            mode: LayoutMode::MiniZine,
            ..Self::default()
        }
    }

    /// Enable the back-text page with the given text
    pub fn with_back_text(mut self, text: impl Into<String>) -> Self {
        self.include_back_text = true;
        self.back_text = text.into();
        self
    }

    /// The back text to render, if this request gets a back page at all
    pub fn effective_back_text(&self) -> Option<&str> {
        (self.mode.is_zine() && self.include_back_text).then_some(self.back_text.as_str())
    }

    /// Load options from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options = serde_json::from_slice(&bytes)
            .map_err(|e| ZineError::Config(format!("Failed to parse config: {}", e)))?;
        Ok(options)
    }

    /// Save options to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| ZineError::Config(format!("Failed to serialize config: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Validate the options.
    ///
    /// Only fields the request actually uses are checked: captions apply to
    /// the mini zine, and back text only when the back page is requested.
    pub fn validate(&self) -> Result<()> {
        if self.mode.is_zine() {
            for (name, caption) in [("Cover", &self.cover_caption), ("Back", &self.back_caption)] {
                if caption.trim().is_empty() {
                    return Err(ZineError::Config(format!("{} caption is empty", name)));
                }
                if caption.chars().count() > MAX_CAPTION_CHARS {
                    return Err(ZineError::Config(format!(
                        "{} caption is longer than {} characters",
                        name, MAX_CAPTION_CHARS
                    )));
                }
            }
        }

        if let Some(text) = self.effective_back_text() {
            if text.chars().count() > MAX_BACK_TEXT_CHARS {
                return Err(ZineError::Config(format!(
                    "Back text is longer than {} characters",
                    MAX_BACK_TEXT_CHARS
                )));
            }
        }

        Ok(())
    }
}
