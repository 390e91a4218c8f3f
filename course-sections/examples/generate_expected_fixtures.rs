//! Generate expected reports for the `course-sections` integration tests.
//!
//! Usage (from the workspace root):
//!   `cargo run -p course-sections --example generate_expected_fixtures`

use course_sections_dev::generate_fixtures::FixtureGenerator;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    FixtureGenerator::new("course-sections").generate()
}
