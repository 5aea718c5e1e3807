//! List command handler.

use anyhow::{Context, Result};
use std::path::Path;

use super::{connect, note_listings, print_notes_table};
use crate::cli::ListArgs;
use crate::cli::output::{Output, OutputFormat};

pub fn handle_list(
    args: &ListArgs,
    server: Option<&String>,
    config_dir: &Path,
    verbose: bool,
) -> Result<()> {
    let mut app = connect(server, config_dir, verbose)?;
    app.reload().with_context(|| "failed to load notes")?;

    let displayed = app.displayed();
    match args.format {
        OutputFormat::Human => {
            if displayed.is_empty() {
                println!("No notes yet. Run `jot new` to capture your first thought.");
            } else {
                print_notes_table(&displayed);
                println!();
                println!("{} note(s)", displayed.len());
            }
        }
        OutputFormat::Json => {
            let output = Output::new(note_listings(&displayed));
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}
