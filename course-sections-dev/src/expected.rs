//! The resolved report stored as the expected output of a fixture.
//!
//! A report is the JSON value
//!
//! ```json
//! { "decisions": [...], "pages": [{ "index": 1, "page": {...} }, ...] }
//! ```
//!
//! with the course page decisions and the single-section page of every
//! section in the snapshot.

use std::error::Error;

use course_sections::{Options, classify_sections_with, section_page, snapshot::Snapshot};
use serde_json::{Value, json};

/// Resolve a snapshot into its report.
///
/// # Errors
///
/// Returns an error if the snapshot has no `now` (fixtures must be
/// deterministic) or if resolution fails.
pub fn report(snapshot: &Snapshot, options: &Options) -> Result<Value, Box<dyn Error>> {
    let now = snapshot
        .now
        .ok_or("fixture snapshots must set \"now\"")?;
    let course = &snapshot.course;
    let viewer = &snapshot.viewer;

    let decisions = classify_sections_with(course, viewer, now, options);
    let pages = course
        .sections
        .iter()
        .map(|section| {
            let page = section_page(course, viewer, section.index, now, options)?;
            Ok(json!({ "index": section.index, "page": page }))
        })
        .collect::<Result<Vec<_>, course_sections::Error>>()?;

    Ok(json!({ "decisions": decisions, "pages": pages }))
}
