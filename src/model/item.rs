use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// A single to-do item.
///
/// JSON field names are stable (`createDate`, `dueDate`, ...); they are the
/// on-disk contract for the store file. Every field except `id` defaults on
/// absence so older files keep loading when fields are added.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Unique positive identifier, assigned by the store.
    pub id: u64,
    /// Display label. Interactive mutation rejects blank names; a blank name
    /// in a hand-edited file is tolerated on load.
    #[serde(default)]
    pub name: String,
    /// Set once when the item is created, never mutated afterwards.
    #[serde(default = "now")]
    pub create_date: DateTime<Local>,
    /// Optional deadline. `None` means no due date.
    #[serde(default)]
    pub due_date: Option<DateTime<Local>>,
    #[serde(default)]
    pub complete: bool,
    #[serde(default)]
    pub notes: String,
}

fn now() -> DateTime<Local> {
    Local::now()
}

impl Item {
    /// Create a new item. The caller (the store) is responsible for assigning
    /// a unique `id`.
    pub fn new(id: u64, name: String, due_date: Option<DateTime<Local>>, notes: String) -> Self {
        Item {
            id,
            name,
            create_date: Local::now(),
            due_date,
            complete: false,
            notes,
        }
    }
}

/// A partial update to an item. `None` fields are left untouched.
///
/// The due date is doubly optional: the outer `Option` says whether the field
/// is touched at all, the inner one distinguishes "set to this date" from
/// "clear the date". This keeps "unset" and "cleared" apart without sentinel
/// values.
#[derive(Debug, Clone, Default)]
pub struct ItemPatch {
    pub name: Option<String>,
    pub due_date: Option<Option<DateTime<Local>>>,
    pub notes: Option<String>,
}
