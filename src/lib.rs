//! jot - notes that live on your server, edited from your terminal

pub mod app;
pub mod cli;
pub mod domain;
pub mod remote;
pub mod session;
pub mod store;

use anyhow::Result;
use clap::{CommandFactory, Parser};

use cli::{
    Cli, Command,
    config::Config,
    handlers::{
        handle_edit, handle_list, handle_login, handle_logout, handle_new, handle_pin,
        handle_rm, handle_search, handle_show, handle_unpin, handle_whoami,
    },
};

/// Main entry point for the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config_dir = cli
        .config_dir
        .clone()
        .unwrap_or_else(Config::default_config_dir);
    let server = cli.server.as_ref();
    let verbose = cli.verbose > 0;

    match &cli.command {
        Command::Login(args) => handle_login(args, &config_dir),
        Command::Logout => handle_logout(&config_dir),
        Command::Whoami(args) => handle_whoami(args, &config_dir),
        Command::List(args) => handle_list(args, server, &config_dir, verbose),
        Command::Search(args) => handle_search(args, server, &config_dir, verbose),
        Command::New(args) => handle_new(args, server, &config_dir, verbose),
        Command::Edit(args) => handle_edit(args, server, &config_dir, verbose),
        Command::Rm(args) => handle_rm(args, server, &config_dir, verbose),
        Command::Pin(args) => handle_pin(args, server, &config_dir, verbose),
        Command::Unpin(args) => handle_unpin(args, server, &config_dir, verbose),
        Command::Show(args) => handle_show(args, server, &config_dir, verbose),
        Command::Completions(args) => {
            let mut cmd = Cli::command();
            clap_complete::generate(args.shell, &mut cmd, "jot", &mut std::io::stdout());
            Ok(())
        }
    }
}
