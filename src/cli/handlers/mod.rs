//! Command handlers for the CLI.

mod edit;
mod list;
mod login;
mod new;
mod pin;
mod rm;
mod search;
mod show;

pub use edit::handle_edit;
pub use list::handle_list;
pub use login::{handle_login, handle_logout, handle_whoami};
pub use new::handle_new;
pub use pin::{handle_pin, handle_unpin};
pub use rm::handle_rm;
pub use search::handle_search;
pub use show::handle_show;

use anyhow::Result;
use std::path::Path;

use crate::app::NotesApp;
use crate::cli::config::Config;
use crate::cli::output::NoteListing;
use crate::domain::Note;
use crate::remote::HttpGateway;
use crate::session::{SessionStore, require_identity};

// ===========================================
// Shared Utilities
// ===========================================

/// Builds the client core for commands that talk to the service.
///
/// Loads config, passes the stored identity through the session gate, and
/// wires up the HTTP gateway. Commands that find no identity stop here
/// with the sign-in hint; no gateway call is made.
pub(crate) fn connect(
    server: Option<&String>,
    config_dir: &Path,
    verbose: bool,
) -> Result<NotesApp<HttpGateway>> {
    let config = Config::load(config_dir)?;
    let session = SessionStore::new(config_dir);
    let identity = require_identity(session.load()?)?;

    let url = config.server_url(server);
    if verbose {
        eprintln!("connecting to {} as {}", url, identity);
    }

    let gateway = HttpGateway::new(url)?;
    Ok(NotesApp::new(gateway, identity))
}

/// Truncates a string to a maximum display width, adding ellipsis if needed.
pub(crate) fn truncate_str(s: &str, max_width: usize) -> String {
    if s.chars().count() <= max_width {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_width.saturating_sub(1)).collect();
        format!("{}…", truncated)
    }
}

/// Prints a table of notes for human consumption.
///
/// Pinned notes get a `*` marker in front of the title.
pub(crate) fn print_notes_table(notes: &[&Note]) {
    println!("{:<24}  {:<42}  {:>10}  {}", "ID", "Title", "Created", "Tags");
    println!(
        "{:<24}  {:<42}  {:>10}  {}",
        "------------------------",
        "------------------------------------------",
        "----------",
        "----"
    );

    for note in notes {
        let marker = if note.is_pinned() { "* " } else { "  " };
        let title = format!("{}{}", marker, truncate_str(note.title(), 38));
        let created = note.created_at().format("%Y-%m-%d").to_string();
        let tags: Vec<String> = note.tags().iter().map(|t| t.to_string()).collect();
        println!(
            "{:<24}  {:<42}  {:>10}  {}",
            note.id(),
            title,
            created,
            tags.join(", ")
        );
    }
}

/// Converts notes into JSON listing rows.
pub(crate) fn note_listings(notes: &[&Note]) -> Vec<NoteListing> {
    notes.iter().map(|n| NoteListing::from_note(n)).collect()
}
