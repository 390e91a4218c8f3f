use clap::Args as ClapArgs;
use course_sections::{NavLink, SectionIndex, nav_links_with};
use crossterm::style::Stylize;

use crate::{
    error,
    input::{Format, SnapshotArgs, print_json},
};

/// Resolve the previous/next links around a section
#[derive(ClapArgs, Debug)]
pub struct Args {
    #[command(flatten)]
    pub input: SnapshotArgs,

    /// Index of the section whose page is displayed
    #[arg(short, long)]
    pub section: SectionIndex,
}

pub fn run(args: &Args) -> miette::Result<()> {
    let resolved = args.input.load()?;
    let links = nav_links_with(
        &resolved.course,
        &resolved.viewer,
        args.section,
        resolved.now,
        &resolved.options,
    )
    .map_err(error::report)?;

    match resolved.format {
        Format::Json => print_json(&links),
        Format::Text => {
            print_link("←", links.previous.as_ref());
            print_link("→", links.next.as_ref());
            Ok(())
        }
    }
}

pub(crate) fn print_link(arrow: &str, link: Option<&NavLink>) {
    match link {
        Some(link) if link.dimmed => {
            println!("{arrow} [{}] {}", link.index, link.name.as_str().dim());
        }
        Some(link) => println!("{arrow} [{}] {}", link.index, link.name),
        None => println!("{arrow} {}", "(none)".dark_grey()),
    }
}
