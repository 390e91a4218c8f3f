use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::{
    Course, DisplayMode, GENERAL_SECTION, HiddenSectionsPolicy, Options, SectionIndex, Viewer,
    region::FutureRegion,
};

/// Why a listed section produced no output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// Single-page listing: the section starts beyond the release horizon and
    /// isn't revealed by the future region.
    NotReleased,
    /// Multi-page listing: the section hasn't started and the viewer can't
    /// see hidden sections.
    Future,
}

/// What the course page shows at one position of the section list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Decision {
    /// The general section, rendered in full above the list.
    General,
    /// A dimmed "not available" placeholder for a hidden section.
    HiddenMessage(SectionIndex),
    /// Summary only, linking to the section's own page.
    SummaryOnly(SectionIndex),
    /// Header, activities and footer of the section.
    Full(SectionIndex),
    /// Listed and visible, but nothing is rendered for it.
    Skipped(SectionIndex, SkipReason),
    /// Start of the collapsible future region.
    RegionOpen,
    /// End of the collapsible future region.
    RegionClose,
}

impl Decision {
    /// The section this decision is about; `None` for region markers.
    #[must_use]
    pub fn section(&self) -> Option<SectionIndex> {
        match self {
            Self::General => Some(GENERAL_SECTION),
            Self::HiddenMessage(index)
            | Self::SummaryOnly(index)
            | Self::Full(index)
            | Self::Skipped(index, _) => Some(*index),
            Self::RegionOpen | Self::RegionClose => None,
        }
    }

    /// Whether the section's content (full or summary) is displayed.
    #[must_use]
    pub fn displays_content(&self) -> bool {
        matches!(self, Self::Full(_) | Self::SummaryOnly(_))
    }

    #[must_use]
    pub fn is_region_marker(&self) -> bool {
        matches!(self, Self::RegionOpen | Self::RegionClose)
    }
}

/// Classify the sections of a course page using default [`Options`].
///
/// See [`classify_sections_with`].
#[must_use]
pub fn classify_sections(course: &Course, viewer: &Viewer, now: DateTime<Utc>) -> Vec<Decision> {
    classify_sections_with(course, viewer, now, &Options::default())
}

/// Classify the sections of a course page.
///
/// The general section comes first when it has content or the viewer is
/// editing. Listed sections (`1..=visible_section_count`) follow in order:
/// hidden ones become a placeholder under [`HiddenSectionsPolicy::ShowDimmed`]
/// (when still available) or nothing at all; visible ones are shown as a
/// summary in multi-page mode, or in full when released or revealed by the
/// future region. Region markers are always balanced.
#[must_use]
#[tracing::instrument(
    skip(course, options),
    fields(course = %course.full_name, sections = course.sections.len())
)]
pub fn classify_sections_with(
    course: &Course,
    viewer: &Viewer,
    now: DateTime<Utc>,
    options: &Options,
) -> Vec<Decision> {
    let mut decisions = Vec::with_capacity(course.sections.len() + 2);

    if let Some(general) = course.general_section() {
        if general.has_content() || viewer.is_editing {
            decisions.push(Decision::General);
        }
    }

    let summaries_only = course.display_mode == DisplayMode::MultiPage && !viewer.is_editing;
    let cutoff = options.release_cutoff(now);
    let mut region = FutureRegion::new();

    for section in course.listed_sections() {
        let index = section.index;
        let is_future = section.is_future(now);

        if region.enter(is_future, viewer.can_view_hidden) {
            tracing::trace!(index, "opening future region");
            decisions.push(Decision::RegionOpen);
        }

        if !section.is_shown() {
            // Unavailable sections get the availability info instead of the
            // placeholder, so the placeholder only covers available ones.
            if course.hidden_sections_policy == HiddenSectionsPolicy::ShowDimmed
                && section.available
            {
                decisions.push(Decision::HiddenMessage(index));
            }
            continue;
        }

        let released = section.start_date < cutoff;
        let decision = if summaries_only {
            if viewer.can_view_hidden || !is_future {
                Decision::SummaryOnly(index)
            } else {
                Decision::Skipped(index, SkipReason::Future)
            }
        } else if region.reveals(viewer.can_view_hidden) || released {
            Decision::Full(index)
        } else {
            Decision::Skipped(index, SkipReason::NotReleased)
        };
        tracing::trace!(index, is_future, released, ?decision, "classified section");
        decisions.push(decision);

        if region.leave(released) {
            tracing::trace!(index, "closing future region");
            decisions.push(Decision::RegionClose);
        }
    }

    if region.finish() {
        decisions.push(Decision::RegionClose);
    }

    tracing::debug!(decisions = decisions.len(), "classified course sections");
    decisions
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::TimeDelta;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::Section;

    fn now() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2024-03-15T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    fn days(n: i64) -> DateTime<Utc> {
        now() + TimeDelta::days(n)
    }

    /// Section 0 with a summary, then sections starting at the given day offsets.
    fn course(offsets: &[i64]) -> Course {
        let mut general = Section::new(0, days(-60));
        general.summary = "Welcome".to_string();
        let mut sections = vec![general];
        for (i, offset) in offsets.iter().enumerate() {
            sections.push(Section::new(i + 1, days(*offset)));
        }
        Course::new("Test course", sections, offsets.len()).unwrap()
    }

    #[test]
    fn test_all_past_sections_learner() {
        let course = course(&[-21, -14, -7]);
        let decisions = classify_sections(&course, &Viewer::learner(), now());
        assert_eq!(
            decisions,
            vec![
                Decision::General,
                Decision::Full(1),
                Decision::Full(2),
                Decision::Full(3),
            ]
        );
    }

    #[test]
    fn test_region_closes_on_the_section_that_opened_it() {
        let course = course(&[-14, -7, 3]);
        let decisions = classify_sections(&course, &Viewer::staff(), now());
        assert_eq!(
            decisions,
            vec![
                Decision::General,
                Decision::Full(1),
                Decision::Full(2),
                Decision::RegionOpen,
                Decision::Full(3),
                Decision::RegionClose,
            ]
        );
    }

    #[test]
    fn test_region_stays_open_until_end() {
        let course = course(&[-7, 10, 17]);
        let decisions = classify_sections(&course, &Viewer::staff(), now());
        assert_eq!(
            decisions,
            vec![
                Decision::General,
                Decision::Full(1),
                Decision::RegionOpen,
                Decision::Full(2),
                Decision::Full(3),
                Decision::RegionClose,
            ]
        );
    }

    #[test]
    fn test_learner_does_not_see_unreleased_sections() {
        let course = course(&[-7, 3, 10]);
        let decisions = classify_sections(&course, &Viewer::learner(), now());
        assert_eq!(
            decisions,
            vec![
                Decision::General,
                Decision::Full(1),
                Decision::Full(2),
                Decision::Skipped(3, SkipReason::NotReleased),
            ]
        );
    }

    #[test]
    fn test_general_section_without_content() {
        let mut course = course(&[-7]);
        if let Some(general) = course.sections.first_mut() {
            general.summary.clear();
        }
        assert_eq!(
            classify_sections(&course, &Viewer::learner(), now()),
            vec![Decision::Full(1)]
        );
        assert_eq!(
            classify_sections(&course, &Viewer::learner().editing(), now()),
            vec![Decision::General, Decision::Full(1)]
        );
    }

    #[test]
    fn test_general_section_with_activities_only() {
        let mut course = course(&[]);
        if let Some(general) = course.sections.first_mut() {
            general.summary.clear();
            general.has_activities = true;
        }
        assert_eq!(
            classify_sections(&course, &Viewer::learner(), now()),
            vec![Decision::General]
        );
    }

    #[test]
    fn test_orphaned_sections_are_excluded() {
        let mut course = course(&[-14, -7, -1]);
        course.visible_section_count = 1;
        let decisions = classify_sections(&course, &Viewer::staff(), now());
        assert_eq!(decisions, vec![Decision::General, Decision::Full(1)]);
    }

    #[rstest]
    #[case::dimmed_available(HiddenSectionsPolicy::ShowDimmed, true, Some(Decision::HiddenMessage(1)))]
    #[case::dimmed_unavailable(HiddenSectionsPolicy::ShowDimmed, false, None)]
    #[case::hidden_available(HiddenSectionsPolicy::FullyHidden, true, None)]
    #[case::hidden_unavailable(HiddenSectionsPolicy::FullyHidden, false, None)]
    fn test_hidden_section_placeholder(
        #[case] policy: HiddenSectionsPolicy,
        #[case] available: bool,
        #[case] expected: Option<Decision>,
    ) {
        let mut course = course(&[-7]).with_hidden_sections_policy(policy);
        if let Some(section) = course.sections.get_mut(1) {
            section.user_visible = false;
            section.available = available;
        }
        let decisions = classify_sections(&course, &Viewer::learner(), now());
        let expected: Vec<_> = std::iter::once(Decision::General).chain(expected).collect();
        assert_eq!(decisions, expected);
    }

    #[test]
    fn test_restricted_section_with_availability_info_is_listed() {
        let mut course = course(&[-7]);
        if let Some(section) = course.sections.get_mut(1) {
            section.user_visible = false;
            section.available = false;
            section.show_availability_info = true;
            section.availability_info = "Not available until you complete Quiz 1".to_string();
        }
        let decisions = classify_sections(&course, &Viewer::learner(), now());
        assert_eq!(decisions, vec![Decision::General, Decision::Full(1)]);
    }

    #[rstest]
    #[case::learner(Viewer::learner(), vec![
        Decision::General,
        Decision::SummaryOnly(1),
        Decision::Skipped(2, SkipReason::Future),
    ])]
    #[case::staff(Viewer::staff(), vec![
        Decision::General,
        Decision::SummaryOnly(1),
        Decision::RegionOpen,
        Decision::SummaryOnly(2),
        Decision::RegionClose,
    ])]
    fn test_multi_page_summaries(#[case] viewer: Viewer, #[case] expected: Vec<Decision>) {
        let course = course(&[-7, 3]).with_display_mode(DisplayMode::MultiPage);
        assert_eq!(classify_sections(&course, &viewer, now()), expected);
    }

    #[test]
    fn test_multi_page_editing_renders_full() {
        let course = course(&[-7, 3]).with_display_mode(DisplayMode::MultiPage);
        let decisions = classify_sections(&course, &Viewer::learner().editing(), now());
        assert_eq!(
            decisions,
            vec![Decision::General, Decision::Full(1), Decision::Full(2)]
        );
    }

    #[test]
    fn test_custom_horizon() {
        let course = course(&[-7, 3]);
        let options = Options::builder().horizon(TimeDelta::days(1)).build();
        let decisions = classify_sections_with(&course, &Viewer::learner(), now(), &options);
        assert_eq!(
            decisions,
            vec![
                Decision::General,
                Decision::Full(1),
                Decision::Skipped(2, SkipReason::NotReleased),
            ]
        );
    }

    #[test]
    fn test_release_horizon_is_strict() {
        let mut course = course(&[-7, 7]);
        let decisions = classify_sections(&course, &Viewer::learner(), now());
        assert_eq!(
            decisions,
            vec![
                Decision::General,
                Decision::Full(1),
                Decision::Skipped(2, SkipReason::NotReleased),
            ]
        );

        if let Some(section) = course.sections.get_mut(2) {
            section.start_date -= TimeDelta::seconds(1);
        }
        let decisions = classify_sections(&course, &Viewer::learner(), now());
        assert_eq!(
            decisions,
            vec![Decision::General, Decision::Full(1), Decision::Full(2)]
        );
    }

    #[test]
    fn test_empty_course() {
        let course = Course::default();
        assert!(classify_sections(&course, &Viewer::staff(), now()).is_empty());
    }

    #[test]
    fn test_decision_section() {
        assert_eq!(Decision::General.section(), Some(0));
        assert_eq!(Decision::Skipped(4, SkipReason::Future).section(), Some(4));
        assert_eq!(Decision::RegionOpen.section(), None);
        assert!(Decision::RegionClose.is_region_marker());
        assert!(Decision::SummaryOnly(2).displays_content());
        assert!(!Decision::HiddenMessage(2).displays_content());
    }

    #[test]
    fn test_decision_serialization() {
        let json = serde_json::to_string(&vec![
            Decision::General,
            Decision::Full(1),
            Decision::Skipped(2, SkipReason::NotReleased),
        ])
        .unwrap();
        assert_eq!(json, r#"["general",{"full":1},{"skipped":[2,"not_released"]}]"#);
    }
}
