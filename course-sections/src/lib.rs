//! Section visibility and navigation for weekly course formats.
//!
//! A weekly course shows an ordered list of sections. Which of them a viewer
//! sees, which are collapsed into a "future weeks" region, and where the
//! previous/next links of a section page point all depend on the course
//! configuration, the current time and the viewer's permissions. This crate
//! computes those decisions from an immutable snapshot; rendering them is left
//! to the caller.
//!
//! - [`classify_sections`] - per-section display decisions for the course page
//! - [`nav_links`] - previous/next targets around a section
//! - [`section_page`] - everything a single-section page needs
//! - [`Schedule`] - weekly start/end dates and default section names
//! - [`snapshot`] - loading course snapshots from JSON
//!
//! # Example
//!
//! ```
//! use chrono::{TimeDelta, Utc};
//! use course_sections::{Course, Decision, Section, Viewer, classify_sections};
//!
//! let now = Utc::now();
//! let sections = (0..=2)
//!     .map(|i| Section::new(i, now - TimeDelta::days(30)))
//!     .collect();
//! let course = Course::new("Physics", sections, 2)?;
//!
//! let decisions = classify_sections(&course, &Viewer::learner(), now);
//! assert_eq!(decisions, vec![Decision::Full(1), Decision::Full(2)]);
//! # Ok::<(), course_sections::Error>(())
//! ```

use chrono::{DateTime, TimeDelta, Utc};

mod classify;
mod error;
mod model;
mod navigation;
mod page;
mod region;
mod schedule;
pub mod snapshot;

#[cfg(test)]
mod proptests;

pub use classify::{Decision, SkipReason, classify_sections, classify_sections_with};
pub use error::Error;
pub use model::{
    Course, DisplayMode, GENERAL_SECTION, HiddenSectionsPolicy, Section, SectionIndex, Viewer,
};
pub use navigation::{NavLink, NavLinks, nav_links, nav_links_with};
pub use page::{SectionPage, SectionView, section_page};
pub use region::{FutureRegion, RegionState};
pub use schedule::{Schedule, SectionDates, display_name};

/// Resolver options.
///
/// Use [`Options::builder()`] to construct an instance. This struct is marked
/// `#[non_exhaustive]` to allow adding new fields in future minor versions.
///
/// # Example
///
/// ```
/// use chrono::TimeDelta;
/// use course_sections::Options;
///
/// let options = Options::builder()
///     .horizon(TimeDelta::days(3))
///     .build();
/// assert_eq!(options.horizon(), TimeDelta::days(3));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub struct Options {
    horizon: TimeDelta,
    week_length: TimeDelta,
    dst_shift: TimeDelta,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            horizon: TimeDelta::days(7),
            week_length: TimeDelta::days(7),
            dst_shift: TimeDelta::hours(2),
        }
    }
}

impl Options {
    /// Create a new builder with default values.
    #[must_use]
    pub fn builder() -> OptionsBuilder {
        OptionsBuilder::default()
    }

    /// How far ahead of `now` a section may start and still count as released.
    ///
    /// Reaching a section within the horizon also closes the future region.
    #[must_use]
    pub fn horizon(&self) -> TimeDelta {
        self.horizon
    }

    /// Length of one weekly section.
    #[must_use]
    pub fn week_length(&self) -> TimeDelta {
        self.week_length
    }

    /// Offset added to the schedule anchor so that daylight-saving changes
    /// never move a week boundary into the previous day.
    #[must_use]
    pub fn dst_shift(&self) -> TimeDelta {
        self.dst_shift
    }

    /// `now + horizon`, saturating at the latest representable instant.
    #[must_use]
    pub fn release_cutoff(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        saturating_add(now, self.horizon)
    }
}

/// Builder for [`Options`].
///
/// Use [`Options::builder()`] to create a new builder.
#[derive(Debug, Default, Clone)]
pub struct OptionsBuilder {
    options: Options,
}

impl OptionsBuilder {
    #[must_use]
    pub fn horizon(mut self, horizon: TimeDelta) -> Self {
        self.options.horizon = horizon;
        self
    }

    #[must_use]
    pub fn week_length(mut self, week_length: TimeDelta) -> Self {
        self.options.week_length = week_length;
        self
    }

    #[must_use]
    pub fn dst_shift(mut self, dst_shift: TimeDelta) -> Self {
        self.options.dst_shift = dst_shift;
        self
    }

    #[must_use]
    pub fn build(self) -> Options {
        self.options
    }
}

pub(crate) fn saturating_add(instant: DateTime<Utc>, delta: TimeDelta) -> DateTime<Utc> {
    instant.checked_add_signed(delta).unwrap_or(if delta < TimeDelta::zero() {
        DateTime::<Utc>::MIN_UTC
    } else {
        DateTime::<Utc>::MAX_UTC
    })
}
