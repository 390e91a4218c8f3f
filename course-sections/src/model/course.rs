use std::str::FromStr;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::{
    Error,
    model::section::{GENERAL_SECTION, Section, SectionIndex},
};

/// How sections the viewer cannot access are presented.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HiddenSectionsPolicy {
    /// Hidden sections are listed as a dimmed "not available" placeholder.
    #[default]
    ShowDimmed,
    /// Hidden sections are left out entirely.
    FullyHidden,
}

impl FromStr for HiddenSectionsPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "show_dimmed" | "dimmed" => Ok(Self::ShowDimmed),
            "fully_hidden" | "hidden" => Ok(Self::FullyHidden),
            _ => Err(format!(
                "invalid hidden sections policy: '{s}', expected: show_dimmed, fully_hidden"
            )),
        }
    }
}

impl std::fmt::Display for HiddenSectionsPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ShowDimmed => write!(f, "show_dimmed"),
            Self::FullyHidden => write!(f, "fully_hidden"),
        }
    }
}

/// Whether all sections share one page or each section gets its own page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayMode {
    /// Every section is rendered in full on the course page.
    #[default]
    SinglePage,
    /// The course page lists summaries; each section links to its own page.
    MultiPage,
}

impl FromStr for DisplayMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "single_page" | "single" => Ok(Self::SinglePage),
            "multi_page" | "multi" => Ok(Self::MultiPage),
            _ => Err(format!(
                "invalid display mode: '{s}', expected: single_page, multi_page"
            )),
        }
    }
}

impl std::fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SinglePage => write!(f, "single_page"),
            Self::MultiPage => write!(f, "multi_page"),
        }
    }
}

/// A read-only snapshot of a course and its sections.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    #[serde(default)]
    pub full_name: String,
    /// Sections ordered by index.
    #[serde(default)]
    pub sections: Vec<Section>,
    #[serde(default)]
    pub hidden_sections_policy: HiddenSectionsPolicy,
    /// Sections with a higher index are orphaned and never listed.
    pub visible_section_count: usize,
    #[serde(default)]
    pub display_mode: DisplayMode,
}

impl Course {
    /// Create a course from its sections, ordering them by index.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateSectionIndex`] if two sections share an index.
    pub fn new(
        full_name: impl Into<String>,
        sections: Vec<Section>,
        visible_section_count: usize,
    ) -> Result<Self, Error> {
        let mut course = Self {
            full_name: full_name.into(),
            sections,
            visible_section_count,
            ..Self::default()
        };
        course.normalize()?;
        Ok(course)
    }

    #[must_use]
    pub fn with_hidden_sections_policy(mut self, policy: HiddenSectionsPolicy) -> Self {
        self.hidden_sections_policy = policy;
        self
    }

    #[must_use]
    pub fn with_display_mode(mut self, mode: DisplayMode) -> Self {
        self.display_mode = mode;
        self
    }

    /// Sort sections by index and reject duplicated indices.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateSectionIndex`] for the first repeated index.
    pub fn normalize(&mut self) -> Result<(), Error> {
        let mut seen = FxHashSet::default();
        for section in &self.sections {
            if !seen.insert(section.index) {
                tracing::warn!(
                    index = section.index,
                    course = %self.full_name,
                    "duplicated section index in course snapshot"
                );
                return Err(Error::DuplicateSectionIndex(section.index));
            }
        }
        self.sections.sort_by_key(|section| section.index);
        Ok(())
    }

    /// Look up a section by its index.
    #[must_use]
    pub fn section(&self, index: SectionIndex) -> Option<&Section> {
        self.sections.iter().find(|section| section.index == index)
    }

    /// Look up a section, failing with [`Error::SectionNotFound`] if it doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SectionNotFound`] when the course has no section at `index`.
    pub fn require_section(&self, index: SectionIndex) -> Result<&Section, Error> {
        self.section(index)
            .ok_or_else(|| Error::section_not_found(index, &self.full_name))
    }

    /// The general section, if present.
    #[must_use]
    pub fn general_section(&self) -> Option<&Section> {
        self.section(GENERAL_SECTION)
    }

    /// Sections `1..=visible_section_count`, in index order.
    ///
    /// Orphaned sections (index above `visible_section_count`) are left out.
    pub fn listed_sections(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter().filter(|section| {
            !section.is_general() && !self.is_orphaned(section.index)
        })
    }

    /// The section lies beyond the configured number of sections.
    #[must_use]
    pub fn is_orphaned(&self, index: SectionIndex) -> bool {
        index > self.visible_section_count
    }
}
