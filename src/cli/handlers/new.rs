//! New note command handler.

use anyhow::{Result, anyhow};
use std::path::Path;

use super::connect;
use crate::app::{ConsoleNotifier, SubmitOutcome};
use crate::cli::NewArgs;
use crate::domain::Tag;

/// Parses and validates tag arguments.
pub(crate) fn parse_tags(tag_strs: &[String]) -> Result<Vec<Tag>> {
    let mut tags = Vec::new();
    for tag_str in tag_strs {
        let tag = Tag::new(tag_str).map_err(|e| anyhow!("invalid tag '{}': {}", tag_str, e))?;
        tags.push(tag);
    }
    Ok(tags)
}

/// Maps the submission outcome to command success or failure.
pub(crate) fn finish_submission(outcome: SubmitOutcome) -> Result<()> {
    match outcome {
        SubmitOutcome::Saved => Ok(()),
        SubmitOutcome::Invalid(err) => Err(anyhow!(err)),
        SubmitOutcome::Rejected(err) => Err(anyhow!(err)),
        SubmitOutcome::NotOpen => Err(anyhow!("no open form to submit")),
    }
}

pub fn handle_new(
    args: &NewArgs,
    server: Option<&String>,
    config_dir: &Path,
    verbose: bool,
) -> Result<()> {
    let tags = parse_tags(&args.tags)?;

    let mut app = connect(server, config_dir, verbose)?;
    let mut notifier = ConsoleNotifier::new();

    app.open_add();
    if let Some(form) = app.form_mut() {
        form.title = args.title.clone();
        form.content = args.content.clone();
        form.tags = tags;
    }

    finish_submission(app.submit(&mut notifier))
}
