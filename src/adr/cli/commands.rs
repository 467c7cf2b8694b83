//! # CLI Layer
//!
//! One possible client of the `adr` library. This is the only place that reads
//! arguments, prompts, prints, or decides the exit status.
//!
//! - `run()`: parse, set up logging and the API, dispatch
//! - `handle_*()`: call the API and print the result
//!
//! Handlers return `Ok(false)` when the command went through but reported an
//! error message (a record written while the index could not be rebuilt), so
//! the process still exits non-zero.

use super::print::{print_messages, print_next, print_records};
use super::prompt;
use super::setup::{Cli, Commands};
use adr::api::{AdrApi, CmdResult};
use adr::config::{AdrConfig, DIR_ENV};
use adr::error::{AdrError, Result};
use adr::logging;
use adr::store::fs::FileStore;
use clap::Parser;
use std::path::PathBuf;
use tracing::debug;

struct AppContext {
    api: AdrApi<FileStore>,
}

pub fn run() -> Result<bool> {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Record {
            number,
            status,
            title,
            interactive,
        }) => handle_record(&mut ctx, number, status, title, interactive),
        Some(Commands::List) | None => handle_list(&ctx),
        Some(Commands::Next) => handle_next(&ctx),
        Some(Commands::Reindex) => handle_reindex(&mut ctx),
        Some(Commands::Init) => handle_init(&mut ctx),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let dir_override = cli.dir.clone().or_else(|| std::env::var(DIR_ENV).ok());

    let config = AdrConfig::resolve(&cwd, dir_override.as_deref())?;
    let store_dir = config.store_dir(&cwd);
    debug!(dir = %store_dir.display(), width = config.number_width, "using record store");

    let store = FileStore::new(store_dir);
    Ok(AppContext {
        api: AdrApi::new(store, config.number_width),
    })
}

fn finish(result: &CmdResult) -> bool {
    print_messages(&result.messages);
    !result.has_errors()
}

fn handle_record(
    ctx: &mut AppContext,
    number: Option<String>,
    status: Option<String>,
    title: Option<String>,
    interactive: bool,
) -> Result<bool> {
    let (number, status, title) = if interactive {
        let answers = prompt::ask(&ctx.api, number, status, title)?;
        (Some(answers.number), answers.status, answers.title)
    } else {
        let status = status.ok_or_else(|| {
            AdrError::Api("--status is required (or use --interactive)".to_string())
        })?;
        (number, status, title)
    };

    let result = ctx
        .api
        .record(number.as_deref(), &status, title.as_deref())?;
    Ok(finish(&result))
}

fn handle_list(ctx: &AppContext) -> Result<bool> {
    let result = ctx.api.list()?;
    print_records(&result.records);
    Ok(finish(&result))
}

fn handle_next(ctx: &AppContext) -> Result<bool> {
    let result = ctx.api.next_number()?;
    if let Some(number) = &result.next_number {
        print_next(number);
    }
    Ok(!result.has_errors())
}

fn handle_reindex(ctx: &mut AppContext) -> Result<bool> {
    let result = ctx.api.reindex()?;
    Ok(finish(&result))
}

fn handle_init(ctx: &mut AppContext) -> Result<bool> {
    let result = ctx.api.init()?;
    Ok(finish(&result))
}
