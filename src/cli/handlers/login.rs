//! Session commands: login, logout, whoami.

use anyhow::{Context, Result};
use std::path::Path;

use crate::cli::{LoginArgs, WhoamiArgs};
use crate::cli::output::{Output, OutputFormat, SessionListing};
use crate::session::{SessionStore, UserIdentity, require_identity};

pub fn handle_login(args: &LoginArgs, config_dir: &Path) -> Result<()> {
    let identity: UserIdentity = args
        .email
        .parse()
        .with_context(|| format!("cannot sign in as '{}'", args.email))?;

    let store = SessionStore::new(config_dir);
    store.save(&identity)?;

    println!("Signed in as {}", identity);
    Ok(())
}

pub fn handle_logout(config_dir: &Path) -> Result<()> {
    let store = SessionStore::new(config_dir);
    if store.clear()? {
        println!("Signed out.");
    } else {
        println!("No active session.");
    }
    Ok(())
}

pub fn handle_whoami(args: &WhoamiArgs, config_dir: &Path) -> Result<()> {
    let store = SessionStore::new(config_dir);
    let identity = require_identity(store.load()?)?;

    match args.format {
        OutputFormat::Human => println!("{}", identity),
        OutputFormat::Json => {
            let output = Output::new(SessionListing {
                email: identity.to_string(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}
