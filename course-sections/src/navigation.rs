use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::{Course, Error, Options, Section, SectionIndex, Viewer, schedule::display_name};

/// A link to a neighbouring section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub index: SectionIndex,
    pub name: String,
    /// The target is explicitly hidden and should be de-emphasised.
    pub dimmed: bool,
}

impl NavLink {
    fn to(section: &Section, options: &Options) -> Self {
        Self {
            index: section.index,
            name: display_name(section, options),
            dimmed: !section.visible,
        }
    }
}

/// Previous/next links around a section. An empty side means there's nothing
/// to navigate to in that direction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NavLinks {
    pub previous: Option<NavLink>,
    pub next: Option<NavLink>,
}

impl NavLinks {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.previous.is_none() && self.next.is_none()
    }
}

/// Resolve the previous/next links of a section page using default [`Options`].
///
/// See [`nav_links_with`].
///
/// # Errors
///
/// Returns [`Error::SectionNotFound`] when the course has no section at
/// `section_index`.
pub fn nav_links(
    course: &Course,
    viewer: &Viewer,
    section_index: SectionIndex,
    now: DateTime<Utc>,
) -> Result<NavLinks, Error> {
    nav_links_with(course, viewer, section_index, now, &Options::default())
}

/// Resolve the previous/next links of a section page.
///
/// `previous` is the nearest section below `section_index` (never the general
/// section) that the viewer may access. `next` is the nearest section above
/// it, up to one past the visible section count, that has already started
/// (or any, for viewers who can see hidden sections) and that the viewer may
/// access.
///
/// # Errors
///
/// Returns [`Error::SectionNotFound`] when the course has no section at
/// `section_index`.
#[tracing::instrument(skip(course, options), fields(course = %course.full_name))]
pub fn nav_links_with(
    course: &Course,
    viewer: &Viewer,
    section_index: SectionIndex,
    now: DateTime<Utc>,
    options: &Options,
) -> Result<NavLinks, Error> {
    course.require_section(section_index)?;

    let accessible = |section: &&Section| viewer.can_view_hidden || section.user_visible;

    let previous = (1..section_index)
        .rev()
        .filter_map(|index| course.section(index))
        .find(accessible)
        .map(|section| NavLink::to(section, options));

    let last = course.visible_section_count.saturating_add(1);
    let next = (section_index.saturating_add(1)..=last)
        .filter_map(|index| course.section(index))
        .filter(|section| section.start_date < now || viewer.can_view_hidden)
        .find(accessible)
        .map(|section| NavLink::to(section, options));

    tracing::debug!(
        previous = previous.as_ref().map(|link| link.index),
        next = next.as_ref().map(|link| link.index),
        "resolved navigation links"
    );
    Ok(NavLinks { previous, next })
}
