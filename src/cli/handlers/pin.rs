//! Pin and unpin command handlers.

use anyhow::{Context, Result};
use std::path::Path;

use super::connect;
use crate::app::ConsoleNotifier;
use crate::cli::{PinArgs, UnpinArgs};
use crate::domain::NoteId;

pub fn handle_pin(
    args: &PinArgs,
    server: Option<&String>,
    config_dir: &Path,
    verbose: bool,
) -> Result<()> {
    set_pinned(&args.id, true, server, config_dir, verbose)
}

pub fn handle_unpin(
    args: &UnpinArgs,
    server: Option<&String>,
    config_dir: &Path,
    verbose: bool,
) -> Result<()> {
    set_pinned(&args.id, false, server, config_dir, verbose)
}

fn set_pinned(
    id_str: &str,
    pinned: bool,
    server: Option<&String>,
    config_dir: &Path,
    verbose: bool,
) -> Result<()> {
    let id: NoteId = id_str
        .parse()
        .with_context(|| format!("invalid note id: {}", id_str))?;

    let mut app = connect(server, config_dir, verbose)?;
    let mut notifier = ConsoleNotifier::new();

    app.set_pinned(&id, pinned, &mut notifier)
        .with_context(|| format!("failed to update note {}", id))
}
