//! The user's current filter and sort selections.
//!
//! Control values arrive as plain strings (the value of a select element);
//! this module turns them into typed selections.

use std::fmt;

/// Value of the "everything" option in both category controls
pub const ALL: &str = "all";

/// Sort control value for in-story order
pub const CHRONOLOGICAL: &str = "chronological";

/// Sort control value for release-date order
pub const RELEASE_DATE: &str = "release";

/// How the gallery is ordered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    /// Ascending by `chronological_order`
    #[default]
    Chronological,
    /// Ascending by release date
    ReleaseDate,
}

impl SortMode {
    /// `"chronological"` selects in-story order; any other value means
    /// release-date order.
    pub fn from_control_value(value: &str) -> Self {
        if value == CHRONOLOGICAL {
            SortMode::Chronological
        } else {
            SortMode::ReleaseDate
        }
    }

    pub fn control_value(&self) -> &'static str {
        match self {
            SortMode::Chronological => CHRONOLOGICAL,
            SortMode::ReleaseDate => RELEASE_DATE,
        }
    }
}

/// A category selection: everything, or one exact label
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    All,
    Only(String),
}

impl Selection {
    pub fn from_control_value(value: &str) -> Self {
        if value == ALL {
            Selection::All
        } else {
            Selection::Only(value.to_string())
        }
    }

    pub fn control_value(&self) -> &str {
        match self {
            Selection::All => ALL,
            Selection::Only(label) => label,
        }
    }

    /// Exact, case-sensitive match. A missing field only matches `All`.
    pub fn matches(&self, field: Option<&str>) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(label) => field == Some(label.as_str()),
        }
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.control_value())
    }
}

/// Current sort mode and category selections.
///
/// Starts at the defaults (chronological, all, all) and is only ever changed
/// by control events. It is never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    pub sort_mode: SortMode,
    pub character: Selection,
    pub phase: Selection,
}

impl FilterState {
    /// Build a state from the raw values of the three controls
    pub fn from_control_values(sort: &str, character: &str, phase: &str) -> Self {
        Self {
            sort_mode: SortMode::from_control_value(sort),
            character: Selection::from_control_value(character),
            phase: Selection::from_control_value(phase),
        }
    }
}
