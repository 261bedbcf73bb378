use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::kernel::file_search::DEFAULT_MAX_RESULTS;
use crate::kernel::layout::{clamp_primary_width, DEFAULT_PRIMARY_WIDTH_PERCENT};

pub const DEFAULT_FONT_SIZE: u16 = 14;
pub const MIN_FONT_SIZE: u16 = 8;
pub const MAX_FONT_SIZE: u16 = 32;
pub const FONT_SIZE_STEP: u16 = 2;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub search: SearchSettings,
    #[serde(default)]
    pub editor: EditorSettings,
    #[serde(default)]
    pub layout: LayoutSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchSettings {
    pub debounce_ms: u64,
    pub max_results: usize,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            debounce_ms: 300,
            max_results: DEFAULT_MAX_RESULTS,
        }
    }
}

impl SearchSettings {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    /// Result cap handed to the index; never above the default of 20.
    pub fn max_results(&self) -> usize {
        self.max_results.clamp(1, DEFAULT_MAX_RESULTS)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorSettings {
    pub font_size: u16,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            font_size: DEFAULT_FONT_SIZE,
        }
    }
}

impl EditorSettings {
    pub fn zoom_in(&mut self) -> bool {
        self.set_font_size(self.font_size.saturating_add(FONT_SIZE_STEP))
    }

    pub fn zoom_out(&mut self) -> bool {
        self.set_font_size(self.font_size.saturating_sub(FONT_SIZE_STEP))
    }

    pub fn reset_zoom(&mut self) -> bool {
        self.set_font_size(DEFAULT_FONT_SIZE)
    }

    fn set_font_size(&mut self, size: u16) -> bool {
        let size = size.clamp(MIN_FONT_SIZE, MAX_FONT_SIZE);
        if size == self.font_size {
            return false;
        }
        self.font_size = size;
        true
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutSettings {
    pub primary_width_percent: f64,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            primary_width_percent: DEFAULT_PRIMARY_WIDTH_PERCENT,
        }
    }
}

impl LayoutSettings {
    pub fn clamped_primary_width(&self) -> f64 {
        clamp_primary_width(self.primary_width_percent)
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/ports/settings.rs"]
mod tests;
