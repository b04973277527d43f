//! Interactive table session: read one action per line, apply it, redraw.

use std::{
    io::{BufRead, Write},
    path::Path,
};

use tracing::debug;

use crate::{
    view::{Action, TableView},
    Result,
};

pub const HELP: &str = "\
Actions:
  sort <field> [asc|desc]   sort by a column (default desc)
  filter [<number>]         minimum value for the filter column; blank shows all rows
  add <field>               add a column at the end
  remove <field>            remove a column
  move <field> <position>   move a column to a 1-based position
Other commands:
  menu <field>              show the menu of a column
  show                      redraw the table
  export [dir]              write baseballData.csv (default: current dir)
  help                      show this help
  quit                      leave the session";

fn draw<W: Write>(view: &TableView, title: &str, out: &mut W) -> Result<()> {
    writeln!(out, "{}", title)?;
    write!(out, "{}", view.render().to_text())?;
    Ok(())
}

/// Run the session until `quit`, `exit`, or end of input.
///
/// Rejected actions are reported and the session keeps going; I/O errors end it.
pub fn run_session<R: BufRead, W: Write>(
    view: &mut TableView,
    title: &str,
    input: R,
    out: &mut W,
) -> Result<()> {
    draw(view, title, out)?;
    writeln!(out, "Type `help` for the list of actions.")?;

    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        let (verb, rest) = line
            .split_once(char::is_whitespace)
            .map(|(v, r)| (v, r.trim()))
            .unwrap_or((line, ""));

        match verb {
            "" => continue,
            "quit" | "exit" | "q" => break,
            "help" | "?" => writeln!(out, "{}", HELP)?,
            "show" => draw(view, title, out)?,
            "menu" => match view.column_menu(rest) {
                Some(menu) => {
                    for item in menu {
                        writeln!(out, "  {}", item.label())?;
                    }
                }
                None => writeln!(out, "Error: column is not visible: {}", rest)?,
            },
            "export" if view.filter().is_none() => {
                writeln!(out, "Error: export is only offered for tables with a filter column")?
            }
            "export" => {
                let dir = if rest.is_empty() { "." } else { rest };
                let snapshot = view.export_snapshot();
                match snapshot.save(Path::new(dir)) {
                    Ok(path) => writeln!(
                        out,
                        "✓ Exported {} rows to {}",
                        snapshot.rows.len(),
                        path.display()
                    )?,
                    Err(e) => writeln!(out, "Error: {}", e)?,
                }
            }
            _ => match line.parse::<Action>().and_then(|a| view.dispatch(a)) {
                Ok(()) => draw(view, title, out)?,
                Err(e) if e.is_view_error() => writeln!(out, "Error: {}", e)?,
                Err(e) => return Err(e),
            },
        }
    }

    debug!("session ended");
    Ok(())
}
