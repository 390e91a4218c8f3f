use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::{
    Course, Error, HiddenSectionsPolicy, NavLinks, Options, SectionIndex, Viewer,
    navigation::nav_links_with, schedule::display_name,
};

/// What the page of a single section shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum SectionPage {
    /// The viewer can't access the section.
    Hidden {
        index: SectionIndex,
        /// Render the dimmed "not available" placeholder instead of nothing.
        placeholder: bool,
    },
    Shown(SectionView),
}

/// The parts of an accessible single-section page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionView {
    pub index: SectionIndex,
    pub title: String,
    /// The section is explicitly hidden; its title is de-emphasised.
    pub dimmed_title: bool,
    /// The general section is rendered above the requested one.
    pub general: bool,
    /// The page is wrapped in the future region.
    pub in_future_region: bool,
    pub editing: bool,
    pub nav: NavLinks,
}

/// Resolve the single-section page for `section_index`.
///
/// # Errors
///
/// Returns [`Error::SectionNotFound`] when the course has no section at
/// `section_index`.
#[tracing::instrument(skip(course, options), fields(course = %course.full_name))]
pub fn section_page(
    course: &Course,
    viewer: &Viewer,
    section_index: SectionIndex,
    now: DateTime<Utc>,
    options: &Options,
) -> Result<SectionPage, Error> {
    let section = course.require_section(section_index)?;

    if !section.user_visible {
        let placeholder = course.hidden_sections_policy == HiddenSectionsPolicy::ShowDimmed;
        tracing::debug!(placeholder, "section not accessible to viewer");
        return Ok(SectionPage::Hidden {
            index: section_index,
            placeholder,
        });
    }

    let general = course
        .general_section()
        .is_some_and(|general| general.has_content() || viewer.is_editing);

    Ok(SectionPage::Shown(SectionView {
        index: section_index,
        title: display_name(section, options),
        dimmed_title: !section.visible,
        general,
        in_future_region: section.is_future(now) && viewer.can_view_hidden,
        editing: viewer.is_editing,
        nav: nav_links_with(course, viewer, section_index, now, options)?,
    }))
}
