//! `spendtrack add` / `spendtrack edit`

use clap::Args;

use spendtrack::services::{date_codec, EntryDraft};
use spendtrack::store::EntryStore;
use spendtrack::types::{LedgerEntry, Result, SpendtrackError, DEFAULT_CATEGORY};

/// Add an entry
#[derive(Args, Debug)]
pub struct AddArgs {
    /// Amount spent
    #[arg(long, allow_hyphen_values = true)]
    pub amount: String,

    /// Category (Food, Transport, Housing, Utilities, Entertainment, Health, Shopping, Other)
    #[arg(long, default_value = DEFAULT_CATEGORY)]
    pub category: String,

    /// Date (YYYY-MM-DD), defaults to today
    #[arg(long)]
    pub date: Option<String>,

    /// Free-text note
    #[arg(long, default_value = "")]
    pub description: String,
}

impl AddArgs {
    pub fn run(self, store: &dyn EntryStore) -> Result<LedgerEntry> {
        let draft = EntryDraft {
            date: self.date.unwrap_or_else(date_codec::today_key),
            category: self.category,
            amount: self.amount,
            description: self.description,
        };
        store.insert(&draft)
    }
}

/// Edit an entry; omitted fields keep their current value
#[derive(Args, Debug)]
pub struct EditArgs {
    #[arg(value_name = "ID")]
    pub id: String,

    #[arg(long, allow_hyphen_values = true)]
    pub amount: Option<String>,

    #[arg(long)]
    pub category: Option<String>,

    #[arg(long)]
    pub date: Option<String>,

    #[arg(long)]
    pub description: Option<String>,
}

impl EditArgs {
    pub fn run(self, store: &dyn EntryStore) -> Result<LedgerEntry> {
        let current = store
            .get(&self.id)?
            .ok_or_else(|| SpendtrackError::NotFound(self.id.clone()))?;

        let mut draft = EntryDraft::from_entry(&current);
        if let Some(amount) = self.amount {
            draft.amount = amount;
        }
        if let Some(category) = self.category {
            draft.category = category;
        }
        if let Some(date) = self.date {
            draft.date = date;
        }
        if let Some(description) = self.description {
            draft.description = description;
        }

        store.update(&self.id, &draft)
    }
}
