use std::path::PathBuf;

use chrono::{DateTime, TimeDelta, Utc};
use clap::{Args as ClapArgs, ValueEnum};
use course_sections::{Course, Options, Viewer, snapshot};
use serde::Serialize;

use crate::error;

#[derive(Debug, ValueEnum, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Text,
    Json,
}

/// Arguments shared by every subcommand: where the snapshot comes from and
/// how to override the parts of it that depend on the request.
#[derive(ClapArgs, Debug)]
pub struct SnapshotArgs {
    /// Course snapshot (JSON)
    pub snapshot: PathBuf,

    /// Rendering instant (RFC 3339). Defaults to the snapshot's `now`, then
    /// to the current time
    #[arg(long)]
    pub now: Option<DateTime<Utc>>,

    /// Resolve for a viewer who can see hidden sections
    #[arg(long, conflicts_with = "learner")]
    pub staff: bool,

    /// Resolve for a viewer who can't see hidden sections
    #[arg(long)]
    pub learner: bool,

    /// Resolve as if the page were in editing mode
    #[arg(long)]
    pub editing: bool,

    /// How many days ahead a section may start and still be released
    #[arg(long, value_name = "DAYS")]
    pub horizon_days: Option<i64>,

    /// Length of a weekly section, in days
    #[arg(long, value_name = "DAYS")]
    pub week_days: Option<i64>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    pub format: Format,
}

/// A loaded snapshot with all command line overrides applied.
#[derive(Debug)]
pub struct Resolved {
    pub course: Course,
    pub viewer: Viewer,
    pub now: DateTime<Utc>,
    pub schedule_anchor: Option<DateTime<Utc>>,
    pub options: Options,
    pub format: Format,
}

impl SnapshotArgs {
    fn options(&self) -> miette::Result<Options> {
        let mut builder = Options::builder();
        if let Some(days) = self.horizon_days {
            builder = builder.horizon(days_delta(days, "--horizon-days")?);
        }
        if let Some(days) = self.week_days {
            if days <= 0 {
                return Err(miette::miette!("--week-days must be positive, got {days}"));
            }
            builder = builder.week_length(days_delta(days, "--week-days")?);
        }
        Ok(builder.build())
    }

    #[tracing::instrument(skip(self), fields(snapshot = %self.snapshot.display()))]
    pub fn load(&self) -> miette::Result<Resolved> {
        let options = self.options()?;
        let snapshot = snapshot::parse_file(&self.snapshot, &options).map_err(error::report)?;

        let mut viewer = snapshot.viewer;
        if self.staff {
            viewer.can_view_hidden = true;
        }
        if self.learner {
            viewer.can_view_hidden = false;
        }
        if self.editing {
            viewer.is_editing = true;
        }

        let now = self.now.or(snapshot.now).unwrap_or_else(Utc::now);
        tracing::debug!(%now, ?viewer, "resolved request");

        Ok(Resolved {
            course: snapshot.course,
            viewer,
            now,
            schedule_anchor: snapshot.schedule_anchor,
            options,
            format: self.format,
        })
    }
}

fn days_delta(days: i64, flag: &str) -> miette::Result<TimeDelta> {
    TimeDelta::try_days(days).ok_or_else(|| miette::miette!("{flag} is out of range: {days}"))
}

/// Print `value` as pretty JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> miette::Result<()> {
    let output = serde_json::to_string_pretty(value)
        .map_err(|e| miette::miette!("failed to serialize output: {e}"))?;
    println!("{output}");
    Ok(())
}
