use crate::model::item::Item;
use crate::notify::OutgoingMail;

const FOOTER: &str = "Sent from tally";

/// Build a reminder message for a single item.
pub fn reminder_mail(item: &Item, to_email: &str, to_name: &str) -> OutgoingMail {
    OutgoingMail {
        to_email: to_email.to_string(),
        to_name: to_name.to_string(),
        subject: format!("To-Do Reminder: {}", item.name),
        text_body: reminder_text(item),
        html_body: reminder_html(item),
    }
}

/// Build a whole-list summary message.
pub fn summary_mail(items: &[Item], to_email: &str, to_name: &str) -> OutgoingMail {
    OutgoingMail {
        to_email: to_email.to_string(),
        to_name: to_name.to_string(),
        subject: "Your To-Do List Summary".to_string(),
        text_body: summary_text(items),
        html_body: summary_html(items),
    }
}

// ---------------------------------------------------------------------------
// Reminder bodies
// ---------------------------------------------------------------------------

fn due_str(item: &Item) -> String {
    match item.due_date {
        Some(d) => d.format("%Y-%m-%d").to_string(),
        None => "Not set".to_string(),
    }
}

fn status_str(item: &Item) -> &'static str {
    if item.complete { "Complete" } else { "Incomplete" }
}

fn reminder_text(item: &Item) -> String {
    let mut out = String::from("Hi!\n\nThis is a reminder about your to-do item:\n\n");
    out.push_str(&format!("Task: {}\n", item.name));
    out.push_str(&format!("Created: {}\n", item.create_date.format("%Y-%m-%d")));
    out.push_str(&format!("Due Date: {}\n", due_str(item)));
    out.push_str(&format!("Status: {}\n", status_str(item)));
    if !item.notes.trim().is_empty() {
        out.push_str(&format!("Notes: {}\n", item.notes));
    }
    out.push_str(&format!("\n---\n{}", FOOTER));
    out
}

fn reminder_html(item: &Item) -> String {
    let status_color = if item.complete { "green" } else { "orange" };
    let mut out = String::from(
        "<html><body style='font-family: Arial, sans-serif; color: #333;'>\
         <div style='max-width: 600px; margin: 0 auto; padding: 20px;'>\
         <h2 style='color: #2c3e50;'>To-Do Reminder</h2>\
         <div style='background-color: #f8f9fa; padding: 20px; border-radius: 8px;'>",
    );
    out.push_str(&format!("<h3 style='margin-top: 0;'>{}</h3>", escape(&item.name)));
    out.push_str(&format!(
        "<p><strong>Created:</strong> {}</p>",
        item.create_date.format("%Y-%m-%d")
    ));
    out.push_str(&format!("<p><strong>Due Date:</strong> {}</p>", due_str(item)));
    out.push_str(&format!(
        "<p><strong>Status:</strong> <span style='color: {};'>{}</span></p>",
        status_color,
        status_str(item)
    ));
    if !item.notes.trim().is_empty() {
        out.push_str(&format!(
            "<p><strong>Notes:</strong> {}</p>",
            escape(&item.notes)
        ));
    }
    out.push_str(&format!(
        "</div><hr style='border: none; border-top: 1px solid #eee;'>\
         <p style='color: #666; font-size: 12px; text-align: center;'>{}</p>\
         </div></body></html>",
        FOOTER
    ));
    out
}

// ---------------------------------------------------------------------------
// Summary bodies
// ---------------------------------------------------------------------------

fn summary_text(items: &[Item]) -> String {
    let incomplete: Vec<&Item> = items.iter().filter(|i| !i.complete).collect();
    let complete: Vec<&Item> = items.iter().filter(|i| i.complete).collect();

    let mut out = String::from("Hi!\n\nHere's your to-do list summary:\n\n");
    out.push_str(&format!("Total Tasks: {}\n", items.len()));
    out.push_str(&format!("Incomplete: {}\n", incomplete.len()));
    out.push_str(&format!("Complete: {}\n\n", complete.len()));

    if !incomplete.is_empty() {
        out.push_str("INCOMPLETE TASKS:\n==================\n");
        for item in &incomplete {
            out.push_str(&format!("- {}", item.name));
            if let Some(d) = item.due_date {
                out.push_str(&format!(" (Due: {})", d.format("%Y-%m-%d")));
            }
            out.push('\n');
        }
        out.push('\n');
    }

    if !complete.is_empty() {
        out.push_str("COMPLETED TASKS:\n================\n");
        for item in &complete {
            out.push_str(&format!("x {}\n", item.name));
        }
    }

    out.push_str(&format!("\n---\n{}", FOOTER));
    out
}

fn summary_html(items: &[Item]) -> String {
    let incomplete: Vec<&Item> = items.iter().filter(|i| !i.complete).collect();
    let complete: Vec<&Item> = items.iter().filter(|i| i.complete).collect();

    let mut out = String::from(
        "<html><body style='font-family: Arial, sans-serif; color: #333;'>\
         <div style='max-width: 600px; margin: 0 auto; padding: 20px;'>\
         <h2 style='color: #2c3e50;'>To-Do List Summary</h2>",
    );
    out.push_str(&format!(
        "<p>Total: <strong>{}</strong>, Incomplete: <strong>{}</strong>, \
         Complete: <strong>{}</strong></p>",
        items.len(),
        incomplete.len(),
        complete.len()
    ));

    if !incomplete.is_empty() {
        out.push_str("<h3 style='color: #856404;'>Incomplete Tasks</h3><ul>");
        for item in &incomplete {
            out.push_str(&format!("<li><strong>{}</strong>", escape(&item.name)));
            if let Some(d) = item.due_date {
                out.push_str(&format!(
                    " <span style='color: #856404; font-size: 12px;'>(Due: {})</span>",
                    d.format("%Y-%m-%d")
                ));
            }
            out.push_str("</li>");
        }
        out.push_str("</ul>");
    }

    if !complete.is_empty() {
        out.push_str("<h3 style='color: #0c5460;'>Completed Tasks</h3><ul>");
        for item in &complete {
            out.push_str(&format!("<li>{}</li>", escape(&item.name)));
        }
        out.push_str("</ul>");
    }

    out.push_str(&format!(
        "<hr style='border: none; border-top: 1px solid #eee;'>\
         <p style='color: #666; font-size: 12px; text-align: center;'>{}</p>\
         </div></body></html>",
        FOOTER
    ));
    out
}

/// Minimal HTML escaping for user-supplied text placed into mail bodies.
fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
