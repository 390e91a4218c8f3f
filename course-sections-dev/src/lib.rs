//! Development and testing utilities for course-sections.
//!
//! This crate provides shared utilities for building and checking course
//! snapshots in tests:
//!
//! - [`builder`] - Fluent construction of courses relative to a fixed instant
//! - [`expected`] - The resolved JSON report stored next to each fixture
//! - [`generate_fixtures`] - Regeneration of expected fixture outputs

pub mod builder;
pub mod expected;
pub mod generate_fixtures;
