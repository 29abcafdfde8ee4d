//! # CLI Layer
//!
//! This module is **one possible UI client** for stockpile, not the
//! application itself.
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdin, stdout, stderr)
//! - Uses `std::process::exit` (via `main.rs`)
//! - Handles argument parsing
//! - Formats output for human consumption
//!
//! ## Structure
//!
//! - `run()`: Main dispatch logic (called by `main.rs`)
//! - `init_context()`: Builds `AppContext` with the API and output settings
//! - `handle_*()`: Per-command handlers that call the API and format output

use super::menu::Menu;
use super::print::{print_messages, render_items, render_low_stock};
use super::setup::{
    print_grouped_help, print_help_for_command, AddCommands, Cli, Commands, StockAction,
};
use clap::Parser;
use std::path::PathBuf;
use stockpile::api::{CmdResult, ConfigAction, StockAdjustment, StockApi};
use stockpile::config::KEYS;
use stockpile::error::Result;
use stockpile::init::initialize;
use stockpile::model::{ItemDraft, KindDraft};
use stockpile::store::fs::FileStore;

struct AppContext {
    api: StockApi<FileStore>,
    verbose: bool,
}

impl AppContext {
    fn show(&self, result: &CmdResult) -> Result<()> {
        print_messages(&result.messages, self.verbose)?;
        Ok(())
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.help {
        match &cli.command {
            Some(command) => print_help_for_command(command.name()),
            None => print_grouped_help(),
        }
        return Ok(());
    }

    if let Some(Commands::Help { command }) = &cli.command {
        match command {
            Some(name) => print_help_for_command(name),
            None => print_grouped_help(),
        }
        return Ok(());
    }

    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Add(kind)) => handle_add(&mut ctx, kind),
        Some(Commands::Stock { id, action, amount }) => handle_stock(&mut ctx, id, action, amount),
        Some(Commands::Remove { id }) => handle_remove(&mut ctx, id),
        Some(Commands::List) | None => handle_list(&ctx),
        Some(Commands::Search { terms }) => handle_search(&ctx, terms.join(" ")),
        Some(Commands::Low { threshold }) => handle_low(&ctx, threshold),
        Some(Commands::Menu) => handle_menu(&mut ctx),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        Some(Commands::Init) => handle_init(&ctx),
        Some(Commands::Help { .. }) => Ok(()),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let ctx = initialize(&cwd, cli.global, cli.file.as_deref())?;

    // Load warnings (skipped lines, duplicate ids) always show.
    print_messages(&ctx.loaded.messages, cli.verbose)?;

    Ok(AppContext {
        api: ctx.api,
        verbose: cli.verbose,
    })
}

fn handle_add(ctx: &mut AppContext, command: AddCommands) -> Result<()> {
    let draft = match command {
        AddCommands::Electronics {
            name,
            price,
            quantity,
            brand,
            warranty,
        } => ItemDraft {
            name: name.join(" "),
            price,
            quantity,
            kind: KindDraft::Electronics {
                brand,
                warranty_months: warranty,
            },
        },
        AddCommands::Grocery {
            name,
            price,
            quantity,
            category,
            expires,
        } => ItemDraft {
            name: name.join(" "),
            price,
            quantity,
            kind: KindDraft::Grocery {
                expiry_date: expires,
                category,
            },
        },
        AddCommands::Generic {
            name,
            price,
            quantity,
            category,
        } => ItemDraft {
            name: name.join(" "),
            price,
            quantity,
            kind: KindDraft::Generic { category },
        },
    };

    let result = ctx.api.create_item(draft)?;
    ctx.show(&result)
}

fn handle_stock(ctx: &mut AppContext, id: u64, action: StockAction, amount: u64) -> Result<()> {
    let adjustment = match action {
        StockAction::Add => StockAdjustment::Add(amount),
        StockAction::Remove => StockAdjustment::Remove(amount),
    };
    let result = ctx.api.adjust_stock(id, adjustment)?;
    ctx.show(&result)
}

fn handle_remove(ctx: &mut AppContext, id: u64) -> Result<()> {
    let result = ctx.api.remove_item(id)?;
    ctx.show(&result)
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list_items()?;
    print!(
        "{}",
        render_items(&result.listed_items, ctx.api.low_stock_threshold())
    );
    ctx.show(&result)
}

fn handle_search(ctx: &AppContext, term: String) -> Result<()> {
    let result = ctx.api.search_items(&term)?;
    if result.listed_items.is_empty() {
        // "No items match" is the whole answer here, so show it without -v.
        print_messages(&result.messages, true)?;
        return Ok(());
    }
    print!(
        "{}",
        render_items(&result.listed_items, ctx.api.low_stock_threshold())
    );
    ctx.show(&result)
}

fn handle_low(ctx: &AppContext, threshold: Option<i64>) -> Result<()> {
    let result = ctx.api.low_stock(threshold)?;
    let threshold = result
        .threshold
        .unwrap_or_else(|| ctx.api.low_stock_threshold());
    print!("{}", render_low_stock(&result.listed_items, threshold));
    print_messages(&result.messages, true)?;
    Ok(())
}

fn handle_menu(ctx: &mut AppContext) -> Result<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut menu = Menu::new(stdin.lock(), stdout.lock(), ctx.verbose);
    menu.run(&mut ctx.api)
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };
    let show_all = matches!(action, ConfigAction::ShowAll);

    let result = ctx.api.config(action)?;
    if show_all {
        if let Some(config) = &result.config {
            for key in KEYS {
                if let Some(value) = config.get(key) {
                    println!("{} = {}", key, value);
                }
            }
        }
    }
    // Values shown for a single key travel as Info messages.
    print_messages(&result.messages, true)?;
    Ok(())
}

fn handle_init(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.init()?;
    ctx.show(&result)
}
