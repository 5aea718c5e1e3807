//! Edit command handler.

use anyhow::{Context, Result};
use std::path::Path;

use super::connect;
use super::new::{finish_submission, parse_tags};
use crate::app::ConsoleNotifier;
use crate::cli::EditArgs;
use crate::domain::NoteId;

pub fn handle_edit(
    args: &EditArgs,
    server: Option<&String>,
    config_dir: &Path,
    verbose: bool,
) -> Result<()> {
    let id: NoteId = args
        .id
        .parse()
        .with_context(|| format!("invalid note id: {}", args.id))?;
    let tags = parse_tags(&args.tags)?;

    let mut app = connect(server, config_dir, verbose)?;
    let mut notifier = ConsoleNotifier::new();

    // The edit workflow starts from the note's current fields, so the
    // collection has to be loaded first.
    app.reload().with_context(|| "failed to load notes")?;
    app.open_edit(&id)?;

    if let Some(form) = app.form_mut() {
        if let Some(title) = &args.title {
            form.title = title.clone();
        }
        if let Some(content) = &args.content {
            form.content = content.clone();
        }
        if args.clear_tags {
            form.tags.clear();
        } else if !tags.is_empty() {
            form.tags = tags;
        }
    }

    finish_submission(app.submit(&mut notifier))
}
