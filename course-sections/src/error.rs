use std::path::PathBuf;

#[non_exhaustive]
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("unknown course section: {index} (course: {course})")]
    SectionNotFound { index: usize, course: String },

    #[error("duplicated section index {0} in course snapshot")]
    DuplicateSectionIndex(usize),

    #[error("I/O error reading {1}: {0}")]
    Io(#[source] std::io::Error, PathBuf),

    #[error("invalid course snapshot: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn section_not_found(index: usize, course: &str) -> Self {
        Self::SectionNotFound {
            index,
            course: course.to_string(),
        }
    }

    /// The section index this error refers to, if any.
    #[must_use]
    pub fn section_index(&self) -> Option<usize> {
        match self {
            Self::SectionNotFound { index, .. } | Self::DuplicateSectionIndex(index) => {
                Some(*index)
            }
            Self::Io(..) | Self::Json(_) => None,
        }
    }

    /// Get advice for this error if available.
    /// Returns helpful information for resolving the error.
    #[must_use]
    pub fn advice(&self) -> Option<&'static str> {
        match self {
            Self::SectionNotFound { .. } => Some(
                "The requested section does not exist in this course. Return to the main course page and pick a section from the list",
            ),
            Self::DuplicateSectionIndex(..) => {
                Some("Every section in a course snapshot must have a unique index")
            }
            Self::Io(..) | Self::Json(_) => None,
        }
    }
}
