use crate::layout::LayoutMethod;
use crate::types::*;
use std::path::PathBuf;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Flags that change the geometry of every layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ConversionOptions {
    /// Flip every output page horizontally (for transfer printing)
    pub mirror: bool,
    /// Swap left and right slots within each sheet
    pub right_to_left: bool,
    /// Draw crop marks around every placement
    pub show_crop_marks: bool,
}

/// Complete imposition configuration
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ImpositionOptions {
    // Input
    #[cfg_attr(feature = "serde", serde(default))]
    pub input_files: Vec<PathBuf>,

    // Layout
    pub layout: LayoutMethod,

    // Output sheet
    pub paper: PaperTarget,

    // Geometry flags
    #[cfg_attr(feature = "serde", serde(default))]
    pub conversion: ConversionOptions,
}

impl Default for ImpositionOptions {
    fn default() -> Self {
        Self {
            input_files: Vec::new(),
            layout: LayoutMethod::SideFold,
            paper: PaperTarget::a4(),
            conversion: ConversionOptions::default(),
        }
    }
}

impl ImpositionOptions {
    /// Load options from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options = serde_json::from_slice(&bytes)
            .map_err(|e| ImposeError::Config(format!("Failed to parse config: {}", e)))?;
        Ok(options)
    }

    /// Save options to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| ImposeError::Config(format!("Failed to serialize config: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Validate the options
    pub fn validate(&self) -> Result<()> {
        if self.input_files.is_empty() {
            return Err(ImposeError::Config("No input files specified".to_string()));
        }

        self.paper.validate()?;

        Ok(())
    }
}
