use clap::Args as ClapArgs;
use course_sections::{SectionIndex, SectionPage, section_page};
use crossterm::style::Stylize;

use crate::{
    error,
    input::{Format, SnapshotArgs, print_json},
    subcommands::nav::print_link,
};

/// Resolve the single-section page of a section
#[derive(ClapArgs, Debug)]
pub struct Args {
    #[command(flatten)]
    pub input: SnapshotArgs,

    /// Index of the section to display
    #[arg(short, long)]
    pub section: SectionIndex,
}

pub fn run(args: &Args) -> miette::Result<()> {
    let resolved = args.input.load()?;
    let page = section_page(
        &resolved.course,
        &resolved.viewer,
        args.section,
        resolved.now,
        &resolved.options,
    )
    .map_err(error::report)?;

    if resolved.format == Format::Json {
        return print_json(&page);
    }

    match page {
        SectionPage::Hidden { index, placeholder } => {
            if placeholder {
                println!("[{index}] {}", "not available".dark_grey());
            } else {
                println!("[{index}] {}", "(nothing displayed)".dark_grey());
            }
        }
        SectionPage::Shown(view) => {
            if view.general {
                println!("{}", "General section above".dim());
            }
            let title = if view.dimmed_title {
                view.title.as_str().dim()
            } else {
                view.title.as_str().bold()
            };
            let region = if view.in_future_region {
                " (future week)".yellow().to_string()
            } else {
                String::new()
            };
            let editing = if view.editing {
                " [editing]".cyan().to_string()
            } else {
                String::new()
            };
            println!("[{}] {title}{region}{editing}", view.index);
            print_link("←", view.nav.previous.as_ref());
            print_link("→", view.nav.next.as_ref());
        }
    }
    Ok(())
}
