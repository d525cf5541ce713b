//! Entry commands: add, list and delete recorded periods.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use cyclecast_cycle::{CycleEntry, EntryId};
use cyclecast_store::{EntryStore, JsonFileStore, NewEntry};

use crate::cli::{AddArgs, DeleteArgs, ListArgs};
use crate::config::CyclecastConfig;
use crate::convert;
use crate::output;

fn open_store(store_path: &Path) -> Result<JsonFileStore> {
    JsonFileStore::open(store_path)
        .with_context(|| format!("failed to open entry store: {}", store_path.display()))
}

/// Record a new period start.
pub fn run_add(args: AddArgs, store_path: &Path) -> Result<()> {
    let _cmd = info_span!("add").entered();
    let mut store = open_store(store_path)?;
    let new = NewEntry::new(args.start)
        .with_end_date(args.end)
        .with_notes(args.notes);
    let created = store
        .create(new)
        .with_context(|| format!("failed to add entry starting {}", args.start))?;
    info!(id = %created.id(), path = %store_path.display(), "entry saved");
    println!("added entry {}: {}", created.id(), created.start_date());
    Ok(())
}

/// List recorded entries, newest first.
pub fn run_list(args: ListArgs, config: &CyclecastConfig, store_path: &Path) -> Result<()> {
    let _cmd = info_span!("list").entered();
    let format = convert::build_output_format(&config.output, args.json)?;
    let store = open_store(store_path)?;
    let entries = store.list().context("failed to list entries")?;
    output::emit(format, &entries, |entries| render_text(entries))
}

/// Delete a recorded entry by id.
pub fn run_delete(args: DeleteArgs, store_path: &Path) -> Result<()> {
    let _cmd = info_span!("delete").entered();
    let id = EntryId::new(args.id);
    let mut store = open_store(store_path)?;
    store
        .delete(id)
        .with_context(|| format!("failed to delete entry {id}"))?;
    println!("deleted entry {id}");
    Ok(())
}

fn render_text(entries: &[CycleEntry]) -> Vec<String> {
    if entries.is_empty() {
        return vec!["no entries recorded".to_string()];
    }
    entries
        .iter()
        .map(|e| {
            let end = e.end_date().map_or_else(|| "-".to_string(), |d| d.to_string());
            format!("{:>4}  {}  {}  {}", e.id().get(), e.start_date(), end, e.notes())
                .trim_end()
                .to_string()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use cyclecast_calendar::CalendarDate;

    #[test]
    fn text_rows() {
        let entries = vec![
            CycleEntry::new(
                EntryId::new(2),
                CalendarDate::new(2024, 1, 29).unwrap(),
                Some(CalendarDate::new(2024, 2, 2).unwrap()),
                "heavy",
            )
            .unwrap(),
            CycleEntry::started(EntryId::new(1), CalendarDate::new(2024, 1, 1).unwrap()),
        ];
        assert_eq!(
            render_text(&entries),
            vec![
                "   2  2024-01-29  2024-02-02  heavy",
                "   1  2024-01-01  -",
            ]
        );
    }

    #[test]
    fn text_empty() {
        assert_eq!(render_text(&[]), vec!["no entries recorded"]);
    }
}
