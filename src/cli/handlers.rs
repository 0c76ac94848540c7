use std::path::{Path, PathBuf};

use chrono::{DateTime, Local, NaiveDate, TimeZone};

use crate::cli::commands::*;
use crate::cli::output::{format_config, format_item_table};
use crate::io::{config_io, store_io};
use crate::model::config::EmailConfig;
use crate::model::item::ItemPatch;
use crate::notify::sendgrid::SendGrid;
use crate::notify::{templates, Mailer};
use crate::ops::store::Store;

/// Default store file, relative to the working directory.
const DEFAULT_STORE_FILE: &str = "todo.json";

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let json = cli.json;
    let store_path = PathBuf::from(cli.file.unwrap_or_else(|| DEFAULT_STORE_FILE.to_string()));

    match cli.command {
        Commands::List => cmd_list(&store_path, json),
        Commands::Add(args) => cmd_add(&store_path, args, json),
        Commands::Edit(args) => cmd_edit(&store_path, args),
        Commands::Delete(args) => cmd_delete(&store_path, args),
        Commands::Toggle(args) => cmd_toggle(&store_path, args),
        Commands::Config(args) => cmd_config(args),
        Commands::Remind(args) => cmd_remind(&store_path, args),
        Commands::Summary(args) => cmd_summary(&store_path, args),
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Load the store from disk. A missing file is a fresh empty store; a
/// corrupt or unreadable one is backed up, reported, and replaced by an
/// empty store, never a crash.
fn load_store(path: &Path) -> Store {
    match store_io::load_items(path) {
        Ok(items) => Store::new(items),
        Err(e) => {
            match store_io::backup_corrupt(path) {
                Some(bak) => eprintln!(
                    "warning: {}; starting with an empty list (backed up as {})",
                    e,
                    bak.display()
                ),
                None => eprintln!("warning: {}; starting with an empty list", e),
            }
            Store::default()
        }
    }
}

/// Persist the store after a successful mutation.
fn persist(path: &Path, store: &Store) -> Result<(), Box<dyn std::error::Error>> {
    store_io::save_items(path, store.items())?;
    Ok(())
}

/// Parse a `YYYY-MM-DD` due date into midnight local time.
fn parse_due_date(input: &str) -> Result<DateTime<Local>, String> {
    let date = NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .map_err(|_| format!("invalid due date '{}' (expected YYYY-MM-DD)", input))?;
    let naive = date
        .and_hms_opt(0, 0, 0)
        .ok_or_else(|| format!("invalid due date '{}'", input))?;
    Local
        .from_local_datetime(&naive)
        .earliest()
        .ok_or_else(|| format!("invalid due date '{}'", input))
}

/// Resolve the recipient for an email command: an explicit `--to` wins,
/// otherwise the configured default.
fn resolve_recipient(
    to: Option<String>,
    to_name: Option<String>,
    cfg: &EmailConfig,
) -> Result<(String, String), String> {
    let email = match to {
        Some(t) => t,
        None => cfg.to_email.clone(),
    };
    if email.trim().is_empty() {
        return Err("no recipient: pass --to or set one with `tally config --to-email`".into());
    }
    let name = to_name.unwrap_or_else(|| cfg.to_name.clone());
    Ok((email, name))
}

// ---------------------------------------------------------------------------
// Store commands
// ---------------------------------------------------------------------------

fn cmd_list(store_path: &Path, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let store = load_store(store_path);

    if json {
        println!("{}", serde_json::to_string_pretty(store.items())?);
    } else if store.is_empty() {
        println!("(no to-do items)");
    } else {
        for line in format_item_table(store.items()) {
            println!("{}", line);
        }
    }
    Ok(())
}

fn cmd_add(
    store_path: &Path,
    args: AddArgs,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    // Validate input before touching the store: a bad date must not mutate.
    let due_date = args.due.as_deref().map(parse_due_date).transpose()?;

    let mut store = load_store(store_path);
    let item = store.add(args.name, due_date, args.notes.unwrap_or_default())?;
    persist(store_path, &store)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&item)?);
    } else {
        println!("added {}: {}", item.id, item.name);
    }
    Ok(())
}

fn cmd_edit(store_path: &Path, args: EditArgs) -> Result<(), Box<dyn std::error::Error>> {
    let due_date = if args.clear_due {
        Some(None)
    } else {
        match args.due.as_deref() {
            Some(d) => Some(Some(parse_due_date(d)?)),
            None => None,
        }
    };
    let patch = ItemPatch {
        name: args.name,
        due_date,
        notes: args.notes,
    };

    let mut store = load_store(store_path);
    store.edit(args.id, patch)?;
    persist(store_path, &store)?;
    println!("updated {}", args.id);
    Ok(())
}

fn cmd_delete(store_path: &Path, args: DeleteArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = load_store(store_path);
    let removed = store.delete(args.id)?;
    persist(store_path, &store)?;
    println!("deleted {}: {}", removed.id, removed.name);
    Ok(())
}

fn cmd_toggle(store_path: &Path, args: ToggleArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = load_store(store_path);
    let complete = store.toggle_complete(args.id)?;
    persist(store_path, &store)?;
    println!(
        "{} marked {}",
        args.id,
        if complete { "complete" } else { "incomplete" }
    );
    Ok(())
}

// ---------------------------------------------------------------------------
// Email commands
// ---------------------------------------------------------------------------

fn cmd_config(args: ConfigArgs) -> Result<(), Box<dyn std::error::Error>> {
    let path = config_io::config_path();

    if args.is_show() {
        let cfg = config_io::read_config_from(&path);
        for line in format_config(&cfg) {
            println!("{}", line);
        }
        return Ok(());
    }

    let mut cfg = config_io::read_config_from(&path);
    if let Some(v) = args.api_key {
        cfg.api_key = v;
    }
    if let Some(v) = args.from_email {
        cfg.from_email = v;
    }
    if let Some(v) = args.from_name {
        cfg.from_name = v;
    }
    if let Some(v) = args.to_email {
        cfg.to_email = v;
    }
    if let Some(v) = args.to_name {
        cfg.to_name = v;
    }
    config_io::write_config_to(&path, &cfg)?;
    println!("email configuration saved");
    Ok(())
}

fn cmd_remind(store_path: &Path, args: RemindArgs) -> Result<(), Box<dyn std::error::Error>> {
    let store = load_store(store_path);
    let item = store
        .find_by_id(args.id)
        .ok_or_else(|| format!("no item with id {}", args.id))?;

    let cfg = config_io::read_config();
    let (to_email, to_name) = resolve_recipient(args.to, args.to_name, &cfg)?;
    let mailer = SendGrid::from_config(&cfg)?;

    let mail = templates::reminder_mail(item, &to_email, &to_name);
    mailer.send(&mail)?;
    println!("reminder for {} sent to {}", item.id, to_email);
    Ok(())
}

fn cmd_summary(store_path: &Path, args: SummaryArgs) -> Result<(), Box<dyn std::error::Error>> {
    let store = load_store(store_path);

    let cfg = config_io::read_config();
    let (to_email, to_name) = resolve_recipient(args.to, args.to_name, &cfg)?;
    let mailer = SendGrid::from_config(&cfg)?;

    let mail = templates::summary_mail(store.items(), &to_email, &to_name);
    mailer.send(&mail)?;
    println!(
        "summary of {} item{} sent to {}",
        store.len(),
        if store.len() == 1 { "" } else { "s" },
        to_email
    );
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
