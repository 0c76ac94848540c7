use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "tally", about = concat!("tally v", env!("CARGO_PKG_VERSION"), " - your to-do list is one JSON file"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Use a different store file (default: todo.json)
    #[arg(short = 'f', long = "file", global = true)]
    pub file: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List all to-do items
    List,
    /// Add a new to-do item
    Add(AddArgs),
    /// Edit an item's name, due date, or notes
    Edit(EditArgs),
    /// Delete an item
    Delete(DeleteArgs),
    /// Mark an item complete/incomplete
    Toggle(ToggleArgs),
    /// Show or update the email configuration
    Config(ConfigArgs),
    /// Email a reminder for one item
    Remind(RemindArgs),
    /// Email a summary of the whole list
    Summary(SummaryArgs),
}

// ---------------------------------------------------------------------------
// Store command args
// ---------------------------------------------------------------------------

#[derive(Args)]
pub struct AddArgs {
    /// Item name
    pub name: String,
    /// Due date (YYYY-MM-DD)
    #[arg(long)]
    pub due: Option<String>,
    /// Free-form notes
    #[arg(long)]
    pub notes: Option<String>,
}

#[derive(Args)]
pub struct EditArgs {
    /// Item id
    pub id: u64,
    /// New name
    #[arg(long)]
    pub name: Option<String>,
    /// New due date (YYYY-MM-DD)
    #[arg(long)]
    pub due: Option<String>,
    /// Remove the due date
    #[arg(long, conflicts_with = "due")]
    pub clear_due: bool,
    /// New notes
    #[arg(long)]
    pub notes: Option<String>,
}

#[derive(Args)]
pub struct DeleteArgs {
    /// Item id
    pub id: u64,
}

#[derive(Args)]
pub struct ToggleArgs {
    /// Item id
    pub id: u64,
}

// ---------------------------------------------------------------------------
// Email command args
// ---------------------------------------------------------------------------

#[derive(Args)]
pub struct ConfigArgs {
    /// SendGrid API key
    #[arg(long)]
    pub api_key: Option<String>,
    /// Sender address
    #[arg(long)]
    pub from_email: Option<String>,
    /// Sender display name
    #[arg(long)]
    pub from_name: Option<String>,
    /// Default recipient address
    #[arg(long)]
    pub to_email: Option<String>,
    /// Default recipient display name
    #[arg(long)]
    pub to_name: Option<String>,
}

impl ConfigArgs {
    /// True when no field was given, so show instead of update.
    pub fn is_show(&self) -> bool {
        self.api_key.is_none()
            && self.from_email.is_none()
            && self.from_name.is_none()
            && self.to_email.is_none()
            && self.to_name.is_none()
    }
}

#[derive(Args)]
pub struct RemindArgs {
    /// Item id
    pub id: u64,
    /// Recipient address (default: configured recipient)
    #[arg(long)]
    pub to: Option<String>,
    /// Recipient display name
    #[arg(long)]
    pub to_name: Option<String>,
}

#[derive(Args)]
pub struct SummaryArgs {
    /// Recipient address (default: configured recipient)
    #[arg(long)]
    pub to: Option<String>,
    /// Recipient display name
    #[arg(long)]
    pub to_name: Option<String>,
}
