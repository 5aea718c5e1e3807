//! Delete command handler.

use anyhow::{Context, Result};
use std::path::Path;

use super::connect;
use crate::app::ConsoleNotifier;
use crate::cli::RmArgs;
use crate::domain::NoteId;

pub fn handle_rm(
    args: &RmArgs,
    server: Option<&String>,
    config_dir: &Path,
    verbose: bool,
) -> Result<()> {
    let id: NoteId = args
        .id
        .parse()
        .with_context(|| format!("invalid note id: {}", args.id))?;

    let mut app = connect(server, config_dir, verbose)?;
    let mut notifier = ConsoleNotifier::new();

    app.delete(&id, &mut notifier)
        .with_context(|| format!("failed to delete note {}", id))
}
