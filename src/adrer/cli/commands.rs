//! # CLI Layer
//!
//! This module is one UI client for adr-er, not the application itself.
//!
//! It is the only place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Handles argument parsing
//! - Sets up logging
//! - Formats output for human consumption
//!
//! ## Structure
//!
//! - `run()`: Main dispatch logic (called by `main.rs`)
//! - `init_context()`: Builds the `AdrApi` from the working and config directories
//! - `handle_*()`: Per-command handlers that call the API and format output
//!
//! Business logic is tested in the command layer. Tests here only cover how
//! arguments become API calls.

use super::markdown::style_markdown;
use super::print::{print_config, print_messages, print_records, print_templates};
use super::setup::{Cli, Commands};
use adrer::api::{AdrApi, AdrPaths, ConfigAction, CreateOptions, RecordDraft};
use adrer::config::CONFIG_DIR_ENV;
use adrer::document::WriteMode;
use adrer::error::{AdrError, Result};
use adrer::format::DocumentFormat;
use clap::Parser;
use directories::ProjectDirs;
use std::io::IsTerminal;
use std::path::PathBuf;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

struct AppContext {
    api: AdrApi,
    dir: Option<String>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Create {
            title,
            context,
            decision,
            status,
            consequences,
            format,
            force,
        }) => {
            let draft = RecordDraft {
                title,
                context,
                decision,
                status,
                consequences,
            };
            handle_create(&ctx, draft, format, force)
        }
        Some(Commands::List) => handle_list(&ctx),
        Some(Commands::View { selector, raw }) => handle_view(&ctx, &selector, raw),
        Some(Commands::Templates) => handle_templates(&ctx),
        Some(Commands::Init { name }) => handle_init(&ctx, name),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        None => handle_list(&ctx),
    }
}

/// Logs go to stderr so rendered documents on stdout stay clean.
fn init_tracing(verbose: bool) {
    let default_directive = if verbose {
        "warn,adrer=debug,adr_er=debug"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let config_dir = config_dir()?;
    debug!(cwd = %cwd.display(), config_dir = %config_dir.display(), "paths resolved");

    let api = AdrApi::load(AdrPaths { cwd, config_dir })?;
    for warning in api.warnings() {
        warn!("{}", warning.content);
    }
    if api.catalog().skipped() > 0 {
        debug!(skipped = api.catalog().skipped(), "template files skipped");
    }

    Ok(AppContext {
        api,
        dir: cli.dir.clone(),
    })
}

fn config_dir() -> Result<PathBuf> {
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "adr-er", "adr-er")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| AdrError::Config("Could not determine config dir".into()))
}

fn handle_create(
    ctx: &AppContext,
    draft: RecordDraft,
    format: Option<String>,
    force: bool,
) -> Result<()> {
    let options = CreateOptions {
        format: format
            .as_deref()
            .map(str::parse::<DocumentFormat>)
            .transpose()?,
        mode: if force {
            WriteMode::Overwrite
        } else {
            WriteMode::CreateNew
        },
    };

    let result = ctx.api.create_record(ctx.dir.as_deref(), draft, &options)?;

    debug!(
        sequence = ?result.sequence,
        template = ?result.templates.first().map(|t| t.name.as_str()),
        "record created"
    );
    for path in &result.written {
        debug!(path = %path.display(), "record written");
    }
    if let Some(rendered) = &result.rendered {
        print!("{}", rendered);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list_records(ctx.dir.as_deref())?;
    print_records(&result.records);
    print_messages(&result.messages);
    Ok(())
}

fn handle_view(ctx: &AppContext, selector: &str, raw: bool) -> Result<()> {
    let result = ctx.api.view_record(ctx.dir.as_deref(), selector)?;
    if let Some(content) = &result.rendered {
        if raw || !std::io::stdout().is_terminal() {
            print!("{}", content);
        } else {
            print!("{}", style_markdown(content));
        }
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_templates(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.templates()?;
    print_templates(&result.templates);
    print_messages(&result.messages);
    Ok(())
}

fn handle_init(ctx: &AppContext, name: Option<String>) -> Result<()> {
    let result = ctx.api.init(name.as_deref())?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = config_action(key, value);
    let show_all = matches!(action, ConfigAction::ShowAll);

    let result = ctx.api.config(action)?;
    if show_all {
        if let Some(config) = &result.config {
            print_config(config);
        }
    }
    print_messages(&result.messages);
    Ok(())
}

fn config_action(key: Option<String>, value: Option<String>) -> ConfigAction {
    match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    }
}
