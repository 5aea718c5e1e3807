//! Show command handler.

use anyhow::{Context, Result, anyhow};
use std::path::Path;

use super::connect;
use crate::cli::ShowArgs;
use crate::cli::output::{Output, OutputFormat};
use crate::domain::NoteId;

pub fn handle_show(
    args: &ShowArgs,
    server: Option<&String>,
    config_dir: &Path,
    verbose: bool,
) -> Result<()> {
    let id: NoteId = args
        .id
        .parse()
        .with_context(|| format!("invalid note id: {}", args.id))?;

    let mut app = connect(server, config_dir, verbose)?;
    app.reload().with_context(|| "failed to load notes")?;

    let note = app
        .get_note(&id)
        .ok_or_else(|| anyhow!("no note with id '{}'", id))?;

    match args.format {
        OutputFormat::Human => {
            println!("{}", note.title());
            println!("id:      {}", note.id());
            println!("created: {}", note.created_at().format("%Y-%m-%d %H:%M"));
            if note.is_pinned() {
                println!("pinned:  yes");
            }
            if !note.tags().is_empty() {
                let tags: Vec<String> = note.tags().iter().map(|t| t.to_string()).collect();
                println!("tags:    {}", tags.join(", "));
            }
            println!();
            println!("{}", note.content());
        }
        OutputFormat::Json => {
            let output = Output::new(note);
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}
