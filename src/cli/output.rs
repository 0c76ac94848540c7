use crate::model::config::EmailConfig;
use crate::model::item::Item;

const NOTES_WIDTH: usize = 28;

/// Render the item table as lines, column layout matching the listing:
/// id, name, created, due, done, notes.
pub fn format_item_table(items: &[Item]) -> Vec<String> {
    let header = format!(
        "| {:>3} | {:<20} | {:<16} | {:<10} | {:<4} | {:<28} |",
        "#", "Name", "Created", "Due", "Done", "Notes"
    );
    let separator = "-".repeat(header.len());

    let mut lines = vec![separator.clone(), header, separator.clone()];
    for item in items {
        lines.push(format_item_row(item));
    }
    lines.push(separator);
    lines
}

fn format_item_row(item: &Item) -> String {
    let due = match item.due_date {
        Some(d) => d.format("%Y-%m-%d").to_string(),
        None => "-".to_string(),
    };
    let done = if item.complete { "[x]" } else { "[ ]" };
    format!(
        "| {:>3} | {:<20} | {:<16} | {:<10} | {:<4} | {:<28} |",
        item.id,
        item.name,
        item.create_date.format("%Y-%m-%d %H:%M"),
        due,
        done,
        truncate(&item.notes, NOTES_WIDTH)
    )
}

/// Truncate to `max` characters, ending in an ellipsis when cut.
fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let cut: String = s.chars().take(max.saturating_sub(1)).collect();
    format!("{}…", cut)
}

/// Render the current email configuration, with the API key masked.
pub fn format_config(cfg: &EmailConfig) -> Vec<String> {
    let mut lines = Vec::new();
    lines.push(format!("api key:   {}", mask_key(&cfg.api_key)));
    lines.push(format!("from:      {}", format_address(&cfg.from_email, &cfg.from_name)));
    lines.push(format!("to:        {}", format_address(&cfg.to_email, &cfg.to_name)));
    lines.push(format!(
        "configured: {}",
        if cfg.is_configured() { "yes" } else { "no" }
    ));
    lines
}

fn format_address(email: &str, name: &str) -> String {
    if email.is_empty() {
        "(not set)".to_string()
    } else if name.is_empty() {
        email.to_string()
    } else {
        format!("{} <{}>", name, email)
    }
}

fn mask_key(key: &str) -> String {
    if key.is_empty() {
        "(not set)".to_string()
    } else {
        let prefix: String = key.chars().take(3).collect();
        format!("{}… ({} chars)", prefix, key.chars().count())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
