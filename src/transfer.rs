use crate::config::TrackerConfig;
use crate::csv_codec::{self, CodecError, ColumnLayout};
use crate::statics;
use crate::store::InventoryStore;
use anyhow::Context;
use std::{fs, path::Path};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportOutcome {
    /// The store now holds exactly this many imported items.
    Replaced(usize),
    /// The text had no data rows; the store was left alone.
    NoData,
}

/// File name offered when exporting.
///
/// With titles enabled this is the trimmed title (or the configured export name when
/// blank) with whitespace runs collapsed to `-`, lowercased. Otherwise the configured
/// export name is used as-is.
pub fn export_file_name(title: &str, config: &TrackerConfig) -> String {
    let stem = if config.features.title_prefix {
        let trimmed = title.trim();
        let base = if trimmed.is_empty() {
            config.export_name.as_str()
        } else {
            trimmed
        };
        base.split_whitespace()
            .collect::<Vec<_>>()
            .join("-")
            .to_lowercase()
    } else {
        config.export_name.clone()
    };
    format!("{stem}.{}", statics::CSV_EXTENSION)
}

pub fn export_csv(store: &InventoryStore, layout: &ColumnLayout) -> Result<String, CodecError> {
    csv_codec::encode(store.items(), layout)
}

/// Replace the whole store with the records in `text`, unless it has no data rows.
pub fn import_csv(text: &str, layout: &ColumnLayout, store: &mut InventoryStore) -> ImportOutcome {
    let items = csv_codec::decode(text, layout);
    if items.is_empty() {
        return ImportOutcome::NoData;
    }
    let count = items.len();
    store.replace_all(items);
    ImportOutcome::Replaced(count)
}

pub fn write_export(
    path: &Path,
    store: &InventoryStore,
    layout: &ColumnLayout,
) -> anyhow::Result<()> {
    let text = export_csv(store, layout).context("encoding CSV")?;
    fs::write(path, text.as_bytes()).with_context(|| format!("writing {path:?}"))?;
    tracing::info!(path = %path.display(), items = store.len(), "exported CSV");
    Ok(())
}

pub fn read_import(
    path: &Path,
    layout: &ColumnLayout,
    store: &mut InventoryStore,
) -> anyhow::Result<ImportOutcome> {
    let bytes = fs::read(path).with_context(|| format!("reading {path:?}"))?;
    let text = std::str::from_utf8(&bytes).context("CSV file is not valid UTF-8")?;
    // Spreadsheet tools often prepend a byte order mark.
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let outcome = import_csv(text, layout, store);
    tracing::info!(path = %path.display(), ?outcome, "imported CSV");
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::{ImportOutcome, export_file_name, import_csv};
    use crate::config::TrackerConfig;
    use crate::csv_codec::ColumnLayout;
    use crate::item::InventoryItem;
    use crate::store::InventoryStore;
    use pretty_assertions::assert_eq;

    #[test]
    fn export_name_is_sanitized_title() {
        let config = TrackerConfig::default();
        assert_eq!(export_file_name("Back Room  Shelf", &config), "back-room-shelf.csv");
        assert_eq!(export_file_name("  Cold\tStore \n", &config), "cold-store.csv");
        assert_eq!(export_file_name("", &config), "inventory.csv");
    }

    #[test]
    fn export_name_fixed_without_titles() {
        let mut config = TrackerConfig::default();
        config.features.title_prefix = false;
        config.export_name = "stock".to_string();
        assert_eq!(export_file_name("Ignored Title", &config), "stock.csv");
    }

    #[test]
    fn header_only_import_keeps_store() {
        let mut store = InventoryStore::new();
        store.append(InventoryItem::new("I0000"));
        let before = store.clone();

        let layout = ColumnLayout::default();
        let header = "Coordinate,Code,Description,Carton,Single,Date,Notes\n";
        let outcome = import_csv(header, &layout, &mut store);
        assert_eq!(outcome, ImportOutcome::NoData);
        assert_eq!(store, before);

        assert_eq!(import_csv("", &layout, &mut store), ImportOutcome::NoData);
        assert_eq!(store, before);
    }

    #[test]
    fn import_replaces_everything() {
        let mut store = InventoryStore::new();
        store.append(InventoryItem::new("I0000"));
        let layout = ColumnLayout::default();
        let text = "h\nI0101,A,,1,,,\nI0202,B,,2,,,\n";
        assert_eq!(import_csv(text, &layout, &mut store), ImportOutcome::Replaced(2));
        let codes: Vec<_> = store.items().iter().map(|i| i.code.as_str()).collect();
        assert_eq!(codes, vec!["A", "B"]);
    }
}
