//! Regeneration of expected fixture outputs.
//!
//! Scans `tests/fixtures/source/` of a crate for `.json` snapshots, resolves
//! each one with [`crate::expected::report`] and writes the pretty-printed
//! report to `tests/fixtures/expected/`.
//!
//! ```ignore
//! use course_sections_dev::generate_fixtures::FixtureGenerator;
//!
//! FixtureGenerator::new("course-sections").generate()?;
//! ```

use std::{error::Error, fs, path::Path, path::PathBuf};

use course_sections::{Options, snapshot};
use crossterm::style::{PrintStyledContent, Stylize};

use crate::expected;

/// Builder for generating expected fixture output files.
pub struct FixtureGenerator {
    crate_dir: PathBuf,
    options: Options,
}

impl FixtureGenerator {
    /// Create a generator for the crate in `crate_dir`, relative to the
    /// workspace root.
    #[must_use]
    pub fn new<P: AsRef<Path>>(crate_dir: P) -> Self {
        Self {
            crate_dir: crate_dir.as_ref().to_path_buf(),
            options: Options::default(),
        }
    }

    /// Generate expected outputs for every fixture source.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation or file I/O fails. Fixtures that
    /// fail to resolve are reported and skipped.
    pub fn generate(&self) -> Result<(), Box<dyn Error>> {
        let input_dir = self.crate_dir.join("tests/fixtures/source");
        let output_dir = self.crate_dir.join("tests/fixtures/expected");
        self.generate_dir(&input_dir, &output_dir)
    }

    fn generate_dir(&self, input_dir: &Path, output_dir: &Path) -> Result<(), Box<dyn Error>> {
        fs::create_dir_all(output_dir)?;

        println!("Generating expected reports from {}...\n", input_dir.display());

        let mut success_count = 0;
        let mut error_count = 0;

        let mut inputs: Vec<_> = input_dir
            .read_dir()?
            .filter_map(Result::ok)
            .map(|e| e.path())
            .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
            .collect();
        inputs.sort();

        for input_path in inputs {
            let Some(output_path) = input_path.file_name().map(|name| output_dir.join(name)) else {
                eprintln!(
                    "{} Skipping {}: unable to determine output file name",
                    PrintStyledContent("?".yellow()),
                    input_path.display()
                );
                continue;
            };

            let snapshot = match snapshot::parse_file(&input_path, &self.options) {
                Ok(snapshot) => snapshot,
                Err(e) => {
                    println!(
                        "{} Error parsing {}: {e}",
                        PrintStyledContent("❌".red()),
                        input_path.display()
                    );
                    error_count += 1;
                    continue;
                }
            };

            let report = match expected::report(&snapshot, &self.options) {
                Ok(report) => report,
                Err(e) => {
                    println!(
                        "{} Error resolving {}: {e}",
                        PrintStyledContent("❌".red()),
                        input_path.display()
                    );
                    error_count += 1;
                    continue;
                }
            };

            let mut output = serde_json::to_string_pretty(&report)?;
            output.push('\n');
            fs::write(&output_path, &output)?;
            success_count += 1;

            println!(
                "{} Generated {} ({} bytes)",
                PrintStyledContent("✓".green()),
                output_path.display(),
                output.len()
            );
        }

        println!();
        if error_count > 0 {
            println!(
                "⚠️  Completed with {error_count} error(s). {success_count} file(s) generated."
            );
        } else {
            println!(
                "✨ Done! {success_count} file(s) generated in {}",
                output_dir.display()
            );
        }
        println!("   Manually verify each file before using in tests.");

        Ok(())
    }
}
