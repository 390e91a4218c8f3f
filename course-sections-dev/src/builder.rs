//! Fluent construction of course snapshots for tests.
//!
//! Sections are added in index order with start dates given as day offsets
//! from a fixed "now", which keeps scenarios readable:
//!
//! ```
//! use course_sections_dev::builder::{CourseBuilder, instant};
//!
//! let now = instant("2024-03-15T12:00:00Z");
//! let course = CourseBuilder::new(now)
//!     .general_summary("Welcome")
//!     .week(-14)
//!     .week(-7)
//!     .week(3)
//!     .hidden()
//!     .build();
//! assert_eq!(course.sections.len(), 4);
//! assert_eq!(course.visible_section_count, 3);
//! ```

use chrono::{DateTime, TimeDelta, Utc};
use course_sections::{Course, DisplayMode, HiddenSectionsPolicy, Section};

/// Parse an RFC 3339 timestamp.
///
/// # Panics
///
/// Panics if `s` is not a valid RFC 3339 timestamp; meant for test literals.
#[must_use]
#[allow(clippy::expect_used)]
pub fn instant(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(s)
        .expect("valid RFC 3339 timestamp")
        .with_timezone(&Utc)
}

/// Builder for [`Course`] snapshots.
#[derive(Debug, Clone)]
pub struct CourseBuilder {
    now: DateTime<Utc>,
    full_name: String,
    sections: Vec<Section>,
    visible_section_count: Option<usize>,
    hidden_sections_policy: HiddenSectionsPolicy,
    display_mode: DisplayMode,
}

impl CourseBuilder {
    /// Start a course with an empty general section.
    #[must_use]
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            now,
            full_name: "Test course".to_string(),
            sections: vec![Section::new(0, now - TimeDelta::days(90))],
            visible_section_count: None,
            hidden_sections_policy: HiddenSectionsPolicy::default(),
            display_mode: DisplayMode::default(),
        }
    }

    #[must_use]
    pub fn full_name(mut self, name: &str) -> Self {
        self.full_name = name.to_string();
        self
    }

    #[must_use]
    pub fn general_summary(mut self, summary: &str) -> Self {
        if let Some(general) = self.sections.first_mut() {
            general.summary = summary.to_string();
        }
        self
    }

    /// Append the next section, starting `offset_days` from now.
    #[must_use]
    pub fn week(mut self, offset_days: i64) -> Self {
        let index = self.sections.len();
        self.sections
            .push(Section::new(index, self.now + TimeDelta::days(offset_days)));
        self
    }

    /// Modify the most recently added section.
    #[must_use]
    pub fn with_last(mut self, f: impl FnOnce(&mut Section)) -> Self {
        if let Some(section) = self.sections.last_mut() {
            f(section);
        }
        self
    }

    #[must_use]
    pub fn named(self, name: &str) -> Self {
        self.with_last(|section| section.name = Some(name.to_string()))
    }

    /// Hide the last section from learners (explicitly hidden by staff).
    #[must_use]
    pub fn hidden(self) -> Self {
        self.with_last(|section| {
            section.visible = false;
            section.user_visible = false;
        })
    }

    /// Make the last section inaccessible for the viewer.
    #[must_use]
    pub fn inaccessible(self) -> Self {
        self.with_last(|section| section.user_visible = false)
    }

    /// Restrict the last section and display `info` instead of its content.
    #[must_use]
    pub fn restricted(self, info: &str) -> Self {
        self.with_last(|section| {
            section.user_visible = false;
            section.available = false;
            section.show_availability_info = true;
            section.availability_info = info.to_string();
        })
    }

    /// Defaults to the number of sections after the general one.
    #[must_use]
    pub fn visible_section_count(mut self, count: usize) -> Self {
        self.visible_section_count = Some(count);
        self
    }

    #[must_use]
    pub fn hidden_sections_policy(mut self, policy: HiddenSectionsPolicy) -> Self {
        self.hidden_sections_policy = policy;
        self
    }

    #[must_use]
    pub fn display_mode(mut self, mode: DisplayMode) -> Self {
        self.display_mode = mode;
        self
    }

    #[must_use]
    pub fn build(self) -> Course {
        let visible_section_count = self
            .visible_section_count
            .unwrap_or(self.sections.len().saturating_sub(1));
        Course {
            full_name: self.full_name,
            sections: self.sections,
            hidden_sections_policy: self.hidden_sections_policy,
            visible_section_count,
            display_mode: self.display_mode,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_indices_follow_insertion_order() {
        let now = instant("2024-01-01T00:00:00Z");
        let course = CourseBuilder::new(now).week(-1).week(6).build();
        let indices: Vec<_> = course.sections.iter().map(|s| s.index).collect();
        assert_eq!(indices, vec![0, 1, 2]);
        assert_eq!(
            course.sections.get(2).map(|s| s.start_date),
            Some(instant("2024-01-07T00:00:00Z"))
        );
    }

    #[test]
    fn test_modifiers_apply_to_last_section() {
        let now = instant("2024-01-01T00:00:00Z");
        let course = CourseBuilder::new(now)
            .week(-7)
            .week(-1)
            .restricted("After quiz 1")
            .visible_section_count(1)
            .build();
        let last = course.sections.last().cloned();
        assert!(last.is_some_and(|s| !s.available && s.shows_availability_info()));
        assert!(course.sections.get(1).is_some_and(|s| s.user_visible));
        assert_eq!(course.visible_section_count, 1);
    }
}
