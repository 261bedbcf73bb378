//! Primary/secondary editor panes and the splitter between them.

use std::path::{Path, PathBuf};

use crate::kernel::tabs::renamed_path;

pub const MIN_PRIMARY_WIDTH_PERCENT: f64 = 20.0;
pub const MAX_PRIMARY_WIDTH_PERCENT: f64 = 80.0;
pub const DEFAULT_PRIMARY_WIDTH_PERCENT: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pane {
    #[default]
    Primary,
    Secondary,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaneSplit {
    Single,
    Split { secondary_file: PathBuf },
}

/// Splitter drag in progress. Exists only between pointer-down and
/// pointer-up, and never outside the split state.
#[derive(Debug, Clone, Copy, PartialEq)]
struct SplitterDrag {
    last_x: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaneLayout {
    active_pane: Pane,
    primary_file: Option<PathBuf>,
    split: PaneSplit,
    primary_width_percent: f64,
    drag: Option<SplitterDrag>,
}

impl Default for PaneLayout {
    fn default() -> Self {
        Self::new(DEFAULT_PRIMARY_WIDTH_PERCENT)
    }
}

pub fn clamp_primary_width(percent: f64) -> f64 {
    if !percent.is_finite() {
        return DEFAULT_PRIMARY_WIDTH_PERCENT;
    }
    percent.clamp(MIN_PRIMARY_WIDTH_PERCENT, MAX_PRIMARY_WIDTH_PERCENT)
}

impl PaneLayout {
    pub fn new(primary_width_percent: f64) -> Self {
        Self {
            active_pane: Pane::Primary,
            primary_file: None,
            split: PaneSplit::Single,
            primary_width_percent: clamp_primary_width(primary_width_percent),
            drag: None,
        }
    }

    pub fn active_pane(&self) -> Pane {
        self.active_pane
    }

    pub fn primary_file(&self) -> Option<&Path> {
        self.primary_file.as_deref()
    }

    pub fn secondary_file(&self) -> Option<&Path> {
        match &self.split {
            PaneSplit::Single => None,
            PaneSplit::Split { secondary_file } => Some(secondary_file),
        }
    }

    pub fn active_file(&self) -> Option<&Path> {
        self.file_in(self.active_pane)
    }

    pub fn file_in(&self, pane: Pane) -> Option<&Path> {
        match pane {
            Pane::Primary => self.primary_file(),
            Pane::Secondary => self.secondary_file(),
        }
    }

    pub fn split_state(&self) -> &PaneSplit {
        &self.split
    }

    pub fn is_split(&self) -> bool {
        matches!(self.split, PaneSplit::Split { .. })
    }

    pub fn primary_width_percent(&self) -> f64 {
        self.primary_width_percent
    }

    pub fn secondary_width_percent(&self) -> f64 {
        100.0 - self.primary_width_percent
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Shows `path` in the secondary pane and focuses it.
    pub fn split(&mut self, path: PathBuf) -> bool {
        let next = PaneSplit::Split {
            secondary_file: path,
        };
        let changed = self.split != next || self.active_pane != Pane::Secondary;
        self.split = next;
        self.active_pane = Pane::Secondary;
        changed
    }

    pub fn close_secondary(&mut self) -> bool {
        if !self.is_split() {
            return false;
        }
        self.split = PaneSplit::Single;
        self.active_pane = Pane::Primary;
        self.drag = None;
        true
    }

    /// Shows `path` in `pane` and makes that pane active. Selecting into the
    /// secondary pane requires an existing split.
    pub fn select(&mut self, pane: Pane, path: PathBuf) -> bool {
        match pane {
            Pane::Primary => {
                let changed = self.primary_file.as_ref() != Some(&path)
                    || self.active_pane != Pane::Primary;
                self.primary_file = Some(path);
                self.active_pane = Pane::Primary;
                changed
            }
            Pane::Secondary => {
                if !self.is_split() {
                    return false;
                }
                self.split(path)
            }
        }
    }

    pub fn set_primary_file(&mut self, path: Option<PathBuf>) -> bool {
        if self.primary_file == path {
            return false;
        }
        self.primary_file = path;
        true
    }

    pub fn focus(&mut self, pane: Pane) -> bool {
        if pane == Pane::Secondary && !self.is_split() {
            return false;
        }
        if self.active_pane == pane {
            return false;
        }
        self.active_pane = pane;
        true
    }

    pub fn set_primary_width_percent(&mut self, percent: f64) -> bool {
        let percent = clamp_primary_width(percent);
        if (self.primary_width_percent - percent).abs() < f64::EPSILON {
            return false;
        }
        self.primary_width_percent = percent;
        true
    }

    pub fn begin_drag(&mut self, x: f64) -> bool {
        if !self.is_split() || !x.is_finite() {
            return false;
        }
        self.drag = Some(SplitterDrag { last_x: x });
        true
    }

    /// Moves the splitter by the pointer delta since the last event.
    pub fn drag_to(&mut self, x: f64, container_width: f64) -> bool {
        let Some(drag) = self.drag.as_mut() else {
            return false;
        };
        if !x.is_finite() || !container_width.is_finite() || container_width <= 0.0 {
            return false;
        }

        let current_px = self.primary_width_percent / 100.0 * container_width;
        let delta = x - drag.last_x;
        drag.last_x = x;

        let percent = (current_px + delta) / container_width * 100.0;
        self.set_primary_width_percent(percent)
    }

    pub fn end_drag(&mut self) -> bool {
        self.drag.take().is_some()
    }

    pub fn rename(&mut self, from: &Path, to: &Path) -> bool {
        let mut changed = false;
        if let Some(next) = self
            .primary_file
            .as_deref()
            .and_then(|p| renamed_path(p, from, to))
        {
            self.primary_file = Some(next);
            changed = true;
        }
        if let PaneSplit::Split { secondary_file } = &mut self.split {
            if let Some(next) = renamed_path(secondary_file, from, to) {
                *secondary_file = next;
                changed = true;
            }
        }
        changed
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/layout.rs"]
mod tests;
