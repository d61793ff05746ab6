//! View layer settings

use crate::calendar::MonthLabelStyle;
use crate::downsample::DEFAULT_STRIDE;
use crate::error::{Result, ViewError};
use crate::table::DEFAULT_PAGE_SIZE;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Days ahead shown as the "one year out" forecast preview
pub const DEFAULT_PREVIEW_OFFSET: usize = 365;

/// Tunables of the derived views
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Distance between points of the trend chart
    pub trend_stride: usize,
    /// Rows per page of the data explorer
    pub page_size: usize,
    /// Forecast index used for the preview widget
    pub preview_offset: usize,
    pub month_labels: MonthLabelStyle,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            trend_stride: DEFAULT_STRIDE,
            page_size: DEFAULT_PAGE_SIZE,
            preview_offset: DEFAULT_PREVIEW_OFFSET,
            month_labels: MonthLabelStyle::Full,
        }
    }
}

impl ViewConfig {
    /// Check that every setting is usable
    pub fn validate(&self) -> Result<()> {
        if self.trend_stride == 0 {
            return Err(ViewError::InvalidArgument(
                "trend_stride must be greater than zero".to_string(),
            ));
        }
        if self.page_size == 0 {
            return Err(ViewError::InvalidArgument(
                "page_size must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Parse settings from JSON; missing keys take their defaults
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_json_str(&fs::read_to_string(path)?)
    }
}
