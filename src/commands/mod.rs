//! Command implementations for the baseball statistics CLI

pub mod common;
pub mod franchises;
pub mod player_data;
pub mod session;
pub mod team_data;


use std::io::{self, Write};

use crate::{cli::ViewArgs, Result};
use common::{apply_view_args, emit, Page};
use session::run_session;

pub use franchises::{handle_franchises, handle_lookup};
pub use player_data::handle_player;
pub use team_data::handle_team;

/// Print a loaded page: apply the view flags, then either emit the table
/// once or hand it to an interactive session on stdin.
pub fn present<W: Write>(page: Page, args: &ViewArgs, out: &mut W) -> Result<()> {
    match page {
        Page::NotFound(message) => writeln!(out, "{}", message)?,
        Page::Empty { title, message } => {
            writeln!(out, "{}", title)?;
            writeln!(out, "{}", message)?;
        }
        Page::Table { title, mut view } => {
            apply_view_args(&mut view, args)?;
            if args.interactive {
                run_session(&mut view, &title, io::stdin().lock(), out)?;
            } else {
                emit(&view, &title, args, out)?;
            }
        }
    }
    Ok(())
}
