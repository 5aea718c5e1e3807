//! CLI command definitions and handlers

pub mod config;
pub mod handlers;
pub mod output;

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use output::OutputFormat;

/// jot - notes that live on your server, edited from your terminal
#[derive(Parser, Debug)]
#[command(name = "jot", version, about, long_about = None)]
pub struct Cli {
    /// Server base URL (overrides config file)
    #[arg(long, global = true)]
    pub server: Option<String>,

    /// Configuration directory (overrides the default location)
    #[arg(long, global = true)]
    pub config_dir: Option<PathBuf>,

    /// Increase verbosity (-v, -vv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Sign in and remember the identity for later commands
    Login(LoginArgs),

    /// Forget the stored identity
    Logout,

    /// Show the signed-in identity
    Whoami(WhoamiArgs),

    /// List all notes
    #[command(name = "ls")]
    List(ListArgs),

    /// Show notes whose title or content contains a query
    Search(SearchArgs),

    /// Create a new note
    New(NewArgs),

    /// Edit a note's title, content, or tags
    Edit(EditArgs),

    /// Delete a note
    Rm(RmArgs),

    /// Pin a note
    Pin(PinArgs),

    /// Unpin a note
    Unpin(UnpinArgs),

    /// Show a single note in full
    Show(ShowArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `login` command
#[derive(Parser, Debug)]
pub struct LoginArgs {
    /// Email address identifying you to the note service
    pub email: String,
}

/// Arguments for the `whoami` command
#[derive(Parser, Debug)]
pub struct WhoamiArgs {
    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `ls` (list) command
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `search` command
#[derive(Parser, Debug)]
pub struct SearchArgs {
    /// Search query (case-insensitive substring)
    pub query: String,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `new` command
#[derive(Parser, Debug)]
pub struct NewArgs {
    /// Note title
    pub title: String,

    /// Note content
    #[arg(short, long, default_value = "")]
    pub content: String,

    /// Tag for the note (can be specified multiple times)
    #[arg(short, long = "tag", action = ArgAction::Append)]
    pub tags: Vec<String>,
}

/// Arguments for the `edit` command
#[derive(Parser, Debug)]
pub struct EditArgs {
    /// Note id
    pub id: String,

    /// New title (keeps the current one if omitted)
    #[arg(long)]
    pub title: Option<String>,

    /// New content (keeps the current one if omitted)
    #[arg(short, long)]
    pub content: Option<String>,

    /// Replace the note's tags (can be specified multiple times)
    #[arg(short, long = "tag", action = ArgAction::Append)]
    pub tags: Vec<String>,

    /// Remove all tags from the note
    #[arg(long, conflicts_with = "tags")]
    pub clear_tags: bool,
}

/// Arguments for the `rm` command
#[derive(Parser, Debug)]
pub struct RmArgs {
    /// Note id
    pub id: String,
}

/// Arguments for the `pin` command
#[derive(Parser, Debug)]
pub struct PinArgs {
    /// Note id
    pub id: String,
}

/// Arguments for the `unpin` command
#[derive(Parser, Debug)]
pub struct UnpinArgs {
    /// Note id
    pub id: String,
}

/// Arguments for the `show` command
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Note id
    pub id: String,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `completions` command
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for (bash, zsh, fish)
    #[arg(value_enum)]
    pub shell: Shell,
}
