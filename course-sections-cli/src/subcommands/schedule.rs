use chrono::{DateTime, Utc};
use clap::Args as ClapArgs;
use course_sections::{Schedule, SectionDates, SectionIndex, display_name};
use crossterm::style::Stylize;
use serde::Serialize;

use crate::input::{Format, SnapshotArgs, print_json};

/// Print the weekly dates of every section
#[derive(ClapArgs, Debug)]
pub struct Args {
    #[command(flatten)]
    pub input: SnapshotArgs,

    /// Schedule anchor (RFC 3339): course start or enrolment date. Defaults to
    /// the snapshot's `schedule_anchor`
    #[arg(long)]
    pub anchor: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize)]
struct Row {
    index: SectionIndex,
    name: String,
    #[serde(flatten)]
    dates: SectionDates,
    orphaned: bool,
}

pub fn run(args: &Args) -> miette::Result<()> {
    let mut resolved = args.input.load()?;
    let anchor = args.anchor.or(resolved.schedule_anchor).ok_or_else(|| {
        miette::miette!(
            help = "pass --anchor or set \"schedule_anchor\" in the snapshot",
            "no schedule anchor"
        )
    })?;

    let schedule = Schedule::new(anchor, &resolved.options);
    schedule.apply(&mut resolved.course.sections);

    let rows: Vec<Row> = resolved
        .course
        .sections
        .iter()
        .filter_map(|section| {
            schedule.dates(section.index).map(|dates| Row {
                index: section.index,
                name: display_name(section, &resolved.options),
                dates,
                orphaned: resolved.course.is_orphaned(section.index),
            })
        })
        .collect();

    match resolved.format {
        Format::Json => print_json(&rows),
        Format::Text => {
            println!("Weeks from {}\n", anchor.format("%Y-%m-%d %H:%M UTC"));
            for row in rows {
                let line = format!(
                    "[{}] {:<24} {} .. {}",
                    row.index,
                    row.name,
                    row.dates.start.format("%Y-%m-%d %H:%M"),
                    row.dates.end.format("%Y-%m-%d %H:%M")
                );
                if row.orphaned {
                    println!("{}", format!("{line} (orphaned)").dark_grey());
                } else {
                    println!("{line}");
                }
            }
            Ok(())
        }
    }
}
