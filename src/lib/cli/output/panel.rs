//! Presents the available builds to the user, and reads back which one they want

use std::io::{BufRead, Write};

use color_eyre::{eyre::Context, Result};

use crate::domain::descriptor::{BuildChoices, Selection};
use crate::utils::constants::error_messages;

const CANCEL_INPUT: &str = "q";

/// Writes the numbered list of builds, one per line, in presentation order
pub fn write_panel<W: Write>(choices: &BuildChoices, mut out: W) -> Result<()> {
    if choices.is_empty() {
        writeln!(out, "No builds available")?;
        return Ok(());
    }

    let width = (choices.len() - 1).to_string().len();
    for (index, (label, _)) in choices.iter().enumerate() {
        writeln!(out, "[{index:>width$}] {label}")?;
    }

    out.flush().with_context(|| "Could not write the builds panel")
}

/// Prompts for a build number until a valid one is entered.
///
/// An empty line, `q` or the end of the input cancel the selection
pub fn read_selection<R: BufRead, W: Write>(
    mut input: R,
    mut out: W,
    available: usize,
) -> Result<Selection> {
    if available == 0 {
        return Ok(Selection::Cancelled);
    }

    loop {
        write!(out, "Build number [0-{}] (q to cancel): ", available - 1)?;
        out.flush()?;

        let mut line = String::new();
        // End of input leaves the line empty, which cancels
        input
            .read_line(&mut line)
            .with_context(|| error_messages::FAILURE_READING_SELECTION)?;

        match parse_selection(&line, available) {
            Some(selection) => return Ok(selection),
            None => writeln!(out, "Invalid selection: {:?}", line.trim())?,
        }
    }
}

fn parse_selection(line: &str, available: usize) -> Option<Selection> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(CANCEL_INPUT) {
        return Some(Selection::Cancelled);
    }

    trimmed
        .parse::<usize>()
        .ok()
        .filter(|index| *index < available)
        .map(Selection::Index)
}
