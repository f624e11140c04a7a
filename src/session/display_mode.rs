//! Display modes for the diff viewer.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::api::{EditId, ReviewError};

/// How the external diff viewer presents an edit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DisplayMode {
    /// Full page view with the diff on top.
    #[default]
    Normal,
    /// Diff only, without the page below it.
    DiffOnly,
    /// Rendered diff without the surrounding skin.
    Rendered,
}

impl DisplayMode {
    /// All modes in selection order.
    pub const ALL: [Self; 3] = [Self::Normal, Self::DiffOnly, Self::Rendered];

    /// Query string the viewer expects for this mode and edit.
    #[must_use]
    pub fn query(self, edit_id: EditId) -> String {
        match self {
            Self::Normal => format!("action=view&diff={edit_id}"),
            Self::DiffOnly => format!("action=view&diffonly=1&diff={edit_id}"),
            Self::Rendered => format!("action=render&diffonly=1&diff={edit_id}"),
        }
    }

    /// Next mode when cycling through the selection.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Normal => Self::DiffOnly,
            Self::DiffOnly => Self::Rendered,
            Self::Rendered => Self::Normal,
        }
    }

    /// Mode selected by a one-based position key (`1`..=`3`).
    #[must_use]
    pub const fn from_position(position: char) -> Option<Self> {
        match position {
            '1' => Some(Self::Normal),
            '2' => Some(Self::DiffOnly),
            '3' => Some(Self::Rendered),
            _ => None,
        }
    }

    /// Human-readable name.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::DiffOnly => "Diff only",
            Self::Rendered => "Rendered",
        }
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.label())
    }
}

impl FromStr for DisplayMode {
    type Err = ReviewError;

    /// Accepts the long names and the single-letter radio values `n`, `d`
    /// and `r`.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "n" | "normal" => Ok(Self::Normal),
            "d" | "diff-only" | "diffonly" => Ok(Self::DiffOnly),
            "r" | "rendered" | "render" => Ok(Self::Rendered),
            other => Err(ReviewError::Configuration {
                message: format!(
                    "unknown display mode '{other}' (expected normal, diff-only or rendered)"
                ),
            }),
        }
    }
}
