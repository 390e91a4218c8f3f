use clap::Args as ClapArgs;
use course_sections::{Decision, SkipReason, classify_sections_with, display_name};
use crossterm::style::Stylize;

use crate::input::{Format, Resolved, SnapshotArgs, print_json};

/// Classify every section of the course page
#[derive(ClapArgs, Debug)]
pub struct Args {
    #[command(flatten)]
    pub input: SnapshotArgs,
}

pub fn run(args: &Args) -> miette::Result<()> {
    let resolved = args.input.load()?;
    let decisions = classify_sections_with(
        &resolved.course,
        &resolved.viewer,
        resolved.now,
        &resolved.options,
    );

    match resolved.format {
        Format::Json => print_json(&decisions),
        Format::Text => {
            print_text(&resolved, &decisions);
            Ok(())
        }
    }
}

fn skip_reason(reason: SkipReason) -> &'static str {
    match reason {
        SkipReason::NotReleased => "not released",
        SkipReason::Future => "not started",
    }
}

fn print_text(resolved: &Resolved, decisions: &[Decision]) {
    let title = |index| {
        resolved
            .course
            .section(index)
            .map(|section| display_name(section, &resolved.options))
            .unwrap_or_default()
    };

    println!(
        "{} at {}\n",
        resolved.course.full_name.as_str().bold(),
        resolved.now.format("%Y-%m-%d %H:%M UTC")
    );

    let mut indent = "";
    for decision in decisions {
        match *decision {
            Decision::General => println!("{indent}{} {}", "■".green(), title(0).bold()),
            Decision::Full(index) => {
                println!("{indent}{} [{index}] {}", "■".green(), title(index));
            }
            Decision::SummaryOnly(index) => println!(
                "{indent}{} [{index}] {} {}",
                "□".green(),
                title(index),
                "(summary)".dim()
            ),
            Decision::HiddenMessage(index) => println!(
                "{indent}{} [{index}] {}",
                "▪".dark_grey(),
                format!("{} (not available)", title(index)).dark_grey()
            ),
            Decision::Skipped(index, reason) => println!(
                "{indent}{} [{index}] {}",
                "·".dark_grey(),
                format!("{} ({})", title(index), skip_reason(reason)).dark_grey()
            ),
            Decision::RegionOpen => {
                println!("{}", "┌ future weeks".yellow());
                indent = "│ ";
            }
            Decision::RegionClose => {
                indent = "";
                println!("{}", "└".yellow());
            }
        }
    }
}
