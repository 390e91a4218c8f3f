use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Position of a section within its course. Index 0 is the general section.
pub type SectionIndex = usize;

/// The general (introductory) section, always at the top of the course.
pub const GENERAL_SECTION: SectionIndex = 0;

fn default_true() -> bool {
    true
}

/// A `Section` is one week (or topic) of a course, as seen by the current viewer.
///
/// The access flags are computed by the host application before the snapshot
/// reaches this crate: `user_visible` already folds in capability checks and
/// `available` the access restrictions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub index: SectionIndex,
    /// Effective availability timestamp of the section.
    #[serde(default)]
    pub start_date: DateTime<Utc>,
    /// Explicit show/hide flag set by course staff.
    #[serde(default = "default_true")]
    pub visible: bool,
    #[serde(default = "default_true")]
    pub user_visible: bool,
    /// Whether the access restrictions of the section pass for the viewer.
    #[serde(default = "default_true")]
    pub available: bool,
    #[serde(default)]
    pub show_availability_info: bool,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub availability_info: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub summary: String,
    #[serde(default)]
    pub has_activities: bool,
    /// Custom section name; when absent a name is derived from the week dates.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Section {
    /// Create a visible, available section starting at `start_date`.
    #[must_use]
    pub fn new(index: SectionIndex, start_date: DateTime<Utc>) -> Self {
        Self {
            index,
            start_date,
            visible: true,
            user_visible: true,
            available: true,
            show_availability_info: false,
            availability_info: String::new(),
            summary: String::new(),
            has_activities: false,
            name: None,
        }
    }

    #[must_use]
    pub fn is_general(&self) -> bool {
        self.index == GENERAL_SECTION
    }

    /// The section has not started yet at `now`.
    #[must_use]
    pub fn is_future(&self, now: DateTime<Utc>) -> bool {
        self.start_date > now
    }

    /// A summary or at least one activity.
    #[must_use]
    pub fn has_content(&self) -> bool {
        !self.summary.is_empty() || self.has_activities
    }

    /// Restricted, but the restriction text is meant to be shown to the viewer.
    #[must_use]
    pub fn shows_availability_info(&self) -> bool {
        self.visible
            && !self.available
            && self.show_availability_info
            && !self.availability_info.is_empty()
    }

    /// Whether the section is listed at all for the current viewer.
    ///
    /// True when the viewer may access it, or when it is unavailable but its
    /// availability information is displayed instead.
    #[must_use]
    pub fn is_shown(&self) -> bool {
        self.user_visible || self.shows_availability_info()
    }
}
