//! Weekly section dates.
//!
//! In a weekly format, section `i` (for `i >= 1`) covers the `i`-th week after
//! an anchor date: the course start date, or the date the viewer enrolled.
//! The anchor is shifted by [`Options::dst_shift`] so a daylight-saving change
//! can't drag a week boundary back into the previous day.

use chrono::{DateTime, TimeDelta, Utc};
use serde::Serialize;

use crate::{GENERAL_SECTION, Options, Section, SectionIndex, saturating_add};

const GENERAL_SECTION_NAME: &str = "General";
const WEEK_DAY_FORMAT: &str = "%-d %B";

/// Start and end of a weekly section. `end` is exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SectionDates {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

/// Computes weekly section dates from an anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schedule {
    anchor: DateTime<Utc>,
    week_length: TimeDelta,
    dst_shift: TimeDelta,
}

impl Schedule {
    #[must_use]
    pub fn new(anchor: DateTime<Utc>, options: &Options) -> Self {
        Self {
            anchor,
            week_length: options.week_length(),
            dst_shift: options.dst_shift(),
        }
    }

    #[must_use]
    pub fn anchor(&self) -> DateTime<Utc> {
        self.anchor
    }

    /// Dates of the section at `index`. The general section has none, and
    /// neither does an index whose dates can't be represented.
    #[must_use]
    pub fn dates(&self, index: SectionIndex) -> Option<SectionDates> {
        if index == GENERAL_SECTION {
            return None;
        }
        let weeks = i32::try_from(index - 1).ok()?;
        let offset = self.week_length.checked_mul(weeks)?;
        let start = self
            .anchor
            .checked_add_signed(self.dst_shift)?
            .checked_add_signed(offset)?;
        let end = start.checked_add_signed(self.week_length)?;
        Some(SectionDates { start, end })
    }

    /// Overwrite the start date of every dated section with its scheduled one.
    pub fn apply(&self, sections: &mut [Section]) {
        for section in sections.iter_mut() {
            if let Some(dates) = self.dates(section.index) {
                section.start_date = dates.start;
            }
        }
    }
}

/// The name shown for a section: its own name if set, `"General"` for the
/// general section, otherwise the week's date range (e.g. `"4 March - 10 March"`).
#[must_use]
pub fn display_name(section: &Section, options: &Options) -> String {
    match section.name.as_deref() {
        Some(name) if !name.is_empty() => name.to_string(),
        Some(_) | None if section.is_general() => GENERAL_SECTION_NAME.to_string(),
        Some(_) | None => {
            let last_day = options
                .week_length()
                .checked_sub(&TimeDelta::days(1))
                .map_or(section.start_date, |span| {
                    saturating_add(section.start_date, span)
                });
            format!(
                "{} - {}",
                section.start_date.format(WEEK_DAY_FORMAT),
                last_day.format(WEEK_DAY_FORMAT)
            )
        }
    }
}
