//! JSON form of a course snapshot.
//!
//! A snapshot bundles the course, the viewer and optionally the instant at
//! which the page is rendered:
//!
//! ```json
//! {
//!   "course": {
//!     "full_name": "Physics 101",
//!     "visible_section_count": 2,
//!     "display_mode": "single_page",
//!     "sections": [
//!       { "index": 0, "summary": "Welcome" },
//!       { "index": 1, "start_date": "2024-03-04T02:00:00Z" },
//!       { "index": 2, "start_date": "2024-03-11T02:00:00Z", "visible": false }
//!     ]
//!   },
//!   "viewer": { "can_view_hidden": true },
//!   "now": "2024-03-12T10:00:00Z"
//! }
//! ```
//!
//! When `schedule_anchor` is present, the start date of every section other
//! than the general one is computed from it (see [`Schedule`]) and any
//! `start_date` in the file is ignored.

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Course, Error, Options, Schedule, Viewer};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub course: Course,
    #[serde(default)]
    pub viewer: Viewer,
    /// Rendering instant; callers fall back to the wall clock when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub now: Option<DateTime<Utc>>,
    /// Anchor (course start or enrolment date) of the weekly schedule.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule_anchor: Option<DateTime<Utc>>,
}

/// Parse a snapshot from a JSON string.
///
/// # Errors
///
/// Returns [`Error::Json`] for malformed input and
/// [`Error::DuplicateSectionIndex`] if two sections share an index.
pub fn parse(input: &str, options: &Options) -> Result<Snapshot, Error> {
    let mut snapshot: Snapshot = serde_json::from_str(input)?;
    snapshot.course.normalize()?;
    if let Some(anchor) = snapshot.schedule_anchor {
        tracing::debug!(%anchor, "deriving section dates from schedule anchor");
        Schedule::new(anchor, options).apply(&mut snapshot.course.sections);
    }
    Ok(snapshot)
}

/// Read and parse a snapshot file.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file can't be read, otherwise the same errors
/// as [`parse`].
#[tracing::instrument(skip(options))]
pub fn parse_file<P: AsRef<Path> + std::fmt::Debug>(
    path: P,
    options: &Options,
) -> Result<Snapshot, Error> {
    let path = path.as_ref();
    let input = std::fs::read_to_string(path).map_err(|e| Error::Io(e, path.to_path_buf()))?;
    parse(&input, options)
}
