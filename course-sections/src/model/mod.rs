//! Snapshot types handed over by the host application.
//!
//! Everything here is plain data: the resolvers only ever borrow it.

mod course;
mod section;
mod viewer;

pub use course::{Course, DisplayMode, HiddenSectionsPolicy};
pub use section::{GENERAL_SECTION, Section, SectionIndex};
pub use viewer::Viewer;
