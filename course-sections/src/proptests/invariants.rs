//! Resolver invariants using property-based testing
use proptest::prelude::*;

use crate::{
    Decision, HiddenSectionsPolicy, Options, SectionPage, Viewer, classify_sections, nav_links,
    section_page,
};

use super::generators::*;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 512,
        .. ProptestConfig::default()
    })]

    /// Sections displayed with content never outnumber the listed sections.
    #[test]
    fn content_bounded_by_visible_count(course in any_course(), viewer in any_viewer()) {
        let decisions = classify_sections(&course, &viewer, now());
        let shown = decisions.iter().filter(|d| d.displays_content()).count();
        prop_assert!(shown <= course.visible_section_count);
    }

    /// Orphaned sections never make it into the decision list.
    #[test]
    fn orphans_excluded(course in any_course(), viewer in any_viewer()) {
        for decision in classify_sections(&course, &viewer, now()) {
            if let Some(index) = decision.section() {
                prop_assert!(index <= course.visible_section_count, "{decision:?}");
            }
        }
    }

    /// Decisions follow the section order, one per section at most.
    #[test]
    fn decisions_follow_section_order(course in any_course(), viewer in any_viewer()) {
        let indices: Vec<_> = classify_sections(&course, &viewer, now())
            .iter()
            .filter_map(Decision::section)
            .collect();
        prop_assert!(indices.windows(2).all(|w| matches!(w, [a, b] if a < b)), "{indices:?}");
    }

    /// Without the dimmed policy there is never a hidden-section placeholder.
    #[test]
    fn no_placeholder_when_fully_hidden(course in any_course(), viewer in any_viewer()) {
        let decisions = classify_sections(&course, &viewer, now());
        if !viewer.can_view_hidden && course.hidden_sections_policy != HiddenSectionsPolicy::ShowDimmed {
            prop_assert!(!decisions.iter().any(|d| matches!(d, Decision::HiddenMessage(_))));
        }
    }

    /// Region markers are balanced and never nested.
    #[test]
    fn region_markers_well_nested(course in any_course(), viewer in any_viewer()) {
        let mut open = false;
        let mut opened_before = false;
        for decision in classify_sections(&course, &viewer, now()) {
            match decision {
                Decision::RegionOpen => {
                    prop_assert!(!open, "nested region");
                    prop_assert!(!opened_before, "region reopened");
                    open = true;
                    opened_before = true;
                }
                Decision::RegionClose => {
                    prop_assert!(open, "close without open");
                    open = false;
                }
                Decision::General
                | Decision::HiddenMessage(_)
                | Decision::SummaryOnly(_)
                | Decision::Full(_)
                | Decision::Skipped(..) => {}
            }
        }
        prop_assert!(!open, "region left open");
    }

    /// Learners never get a region marker.
    #[test]
    fn learners_have_no_region(course in any_course(), is_editing in any::<bool>()) {
        let viewer = Viewer { can_view_hidden: false, is_editing };
        let decisions = classify_sections(&course, &viewer, now());
        prop_assert!(!decisions.iter().any(Decision::is_region_marker));
    }

    /// Walking forward then back lands on the origin or a closer section.
    #[test]
    fn navigation_round_trip(course in any_course(), viewer in any_viewer()) {
        for origin in course.listed_sections() {
            if !(viewer.can_view_hidden || origin.user_visible) {
                continue;
            }
            let links = nav_links(&course, &viewer, origin.index, now())
                .map_err(|e| TestCaseError::fail(e.to_string()))?;
            let Some(next) = links.next else {
                continue;
            };
            let back = nav_links(&course, &viewer, next.index, now())
                .map_err(|e| TestCaseError::fail(e.to_string()))?;
            let previous = back.previous.map(|link| link.index);
            prop_assert!(
                previous.is_some_and(|p| p >= origin.index && p < next.index),
                "origin {} next {} previous {previous:?}", origin.index, next.index
            );
        }
    }

    /// Navigation never points at the general section or at itself. `previous`
    /// lies below the page's own section, which may itself be orphaned; `next`
    /// never goes past one beyond the visible section count.
    #[test]
    fn navigation_targets_in_range(course in any_course(), viewer in any_viewer()) {
        for section in &course.sections {
            let links = nav_links(&course, &viewer, section.index, now())
                .map_err(|e| TestCaseError::fail(e.to_string()))?;
            if let Some(previous) = &links.previous {
                prop_assert!(previous.index >= 1);
                prop_assert!(previous.index < section.index);
            }
            if let Some(next) = &links.next {
                prop_assert!(next.index > section.index);
                prop_assert!(next.index <= course.visible_section_count + 1);
            }
        }
    }

    /// Every existing section resolves to a page; missing ones fail.
    #[test]
    fn section_page_resolves(course in any_course(), viewer in any_viewer(), index in 0usize..14) {
        let result = section_page(&course, &viewer, index, now(), &Options::default());
        match course.section(index) {
            Some(section) => {
                let page = result.map_err(|e| TestCaseError::fail(e.to_string()))?;
                prop_assert_eq!(matches!(page, SectionPage::Shown(_)), section.user_visible);
            }
            None => prop_assert!(result.is_err()),
        }
    }
}
