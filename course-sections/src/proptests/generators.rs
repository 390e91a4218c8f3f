//! Snapshot generators for property-based testing
use chrono::{DateTime, TimeDelta, Utc};
use proptest::prelude::*;

use crate::{Course, DisplayMode, HiddenSectionsPolicy, Section, Viewer};

/// A fixed rendering instant; section dates are generated around it.
pub fn now() -> DateTime<Utc> {
    DateTime::<Utc>::UNIX_EPOCH + TimeDelta::days(20_000)
}

prop_compose! {
    /// A section with arbitrary access flags starting within a month of `now()`.
    pub fn any_section(index: usize)(
        offset_hours in -24 * 30i64..24 * 30,
        visible in any::<bool>(),
        user_visible in any::<bool>(),
        available in any::<bool>(),
        show_availability_info in any::<bool>(),
        has_info in any::<bool>(),
        has_summary in any::<bool>(),
        has_activities in any::<bool>(),
    ) -> Section {
        Section {
            visible,
            user_visible,
            available,
            show_availability_info,
            availability_info: if has_info { "Restricted".to_string() } else { String::new() },
            summary: if has_summary { "Summary".to_string() } else { String::new() },
            has_activities,
            ..Section::new(index, now() + TimeDelta::hours(offset_hours))
        }
    }
}

pub fn any_policy() -> impl Strategy<Value = HiddenSectionsPolicy> {
    prop_oneof![
        Just(HiddenSectionsPolicy::ShowDimmed),
        Just(HiddenSectionsPolicy::FullyHidden),
    ]
}

pub fn any_display_mode() -> impl Strategy<Value = DisplayMode> {
    prop_oneof![Just(DisplayMode::SinglePage), Just(DisplayMode::MultiPage)]
}

prop_compose! {
    pub fn any_viewer()(can_view_hidden in any::<bool>(), is_editing in any::<bool>()) -> Viewer {
        Viewer { can_view_hidden, is_editing }
    }
}

fn sections(count: usize) -> impl Strategy<Value = Vec<Section>> {
    (0..count).map(any_section).collect::<Vec<_>>()
}

prop_compose! {
    /// A course with up to 12 sections (general included) and a visible
    /// section count that may leave some of them orphaned.
    pub fn any_course()(total in 0usize..12)(
        sections in sections(total),
        visible_section_count in 0..=total + 1,
        hidden_sections_policy in any_policy(),
        display_mode in any_display_mode(),
    ) -> Course {
        Course {
            full_name: "Generated".to_string(),
            sections,
            hidden_sections_policy,
            visible_section_count,
            display_mode,
        }
    }
}
