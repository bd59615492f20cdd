use crate::config::TrackerConfig;
use crate::coord::SlotPos;
use crate::csv_codec::{CodecError, ColumnLayout};
use crate::detail::{DetailModal, ItemDraft, ItemRowView, SlotDetail, SubmitOutcome, item_rows};
use crate::grid::{CellMode, CellView, Grid, cell_view};
use crate::store::InventoryStore;
use crate::transfer::{self, ImportOutcome};
use std::collections::HashMap;
use std::path::Path;

/// The application state: owns the inventory and the grid, and routes every user
/// interaction. The GUI holds one of these and nothing else stateful about the data.
#[derive(Debug, Clone)]
pub struct Tracker {
    config: TrackerConfig,
    layout: ColumnLayout,
    title: String,
    store: InventoryStore,
    grid: Grid,
    detail: SlotDetail,
}

impl Tracker {
    pub fn new(config: TrackerConfig) -> Self {
        let title = config.default_title.clone();
        let grid = Grid::new(&config.prefix_for(&title));
        Self {
            layout: config.layout(),
            config,
            title,
            store: InventoryStore::new(),
            grid,
            detail: SlotDetail::default(),
        }
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    pub fn layout(&self) -> &ColumnLayout {
        &self.layout
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn store(&self) -> &InventoryStore {
        &self.store
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn detail(&self) -> &SlotDetail {
        &self.detail
    }

    pub fn draft_mut(&mut self) -> &mut ItemDraft {
        self.detail.draft_mut()
    }

    /// Update the sheet title. When titles drive the prefix, every cell and every
    /// item is relabelled. Returns how many items moved.
    pub fn set_title(&mut self, title: impl Into<String>) -> usize {
        self.title = title.into();
        let prefix = self.config.prefix_for(&self.title);
        self.grid.relabel(&prefix, &mut self.store)
    }

    pub fn toggle_lock(&mut self, pos: SlotPos) -> Option<CellMode> {
        self.grid.toggle_lock(pos)
    }

    pub fn toggle_select(&mut self, pos: SlotPos) -> bool {
        self.grid.toggle_select(pos)
    }

    fn is_open_for_actions(&self, pos: SlotPos) -> bool {
        self.grid.cell(pos).is_some_and(|c| !c.is_locked())
    }

    /// Show the read-only listing. Locked cells can't be opened.
    pub fn open_view(&mut self, pos: SlotPos) -> bool {
        if !self.is_open_for_actions(pos) {
            return false;
        }
        self.detail.open_view(pos);
        true
    }

    pub fn open_edit(&mut self, pos: SlotPos) -> bool {
        if !self.is_open_for_actions(pos) {
            return false;
        }
        self.detail.open_edit(pos);
        true
    }

    pub fn start_edit(&mut self, index: usize) -> bool {
        self.detail
            .start_edit(index, &self.store, &self.config.features)
    }

    pub fn cancel_edit(&mut self) {
        self.detail.cancel_edit();
    }

    pub fn submit(&mut self) -> SubmitOutcome {
        let outcome = self.detail.submit(&self.grid, &mut self.store);
        tracing::debug!(?outcome, "submit item form");
        outcome
    }

    pub fn close_dialogs(&mut self) {
        self.detail.close();
    }

    pub fn open_coordinate(&self) -> Option<&str> {
        self.grid.coordinate_of(self.detail.open_slot()?)
    }

    /// Render descriptions for every cell, in display order.
    pub fn cell_views(&self) -> Vec<CellView> {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for item in self.store.items() {
            *counts.entry(item.coordinate.as_str()).or_default() += 1;
        }
        self.grid
            .cells()
            .iter()
            .map(|cell| cell_view(cell, counts.get(cell.coordinate()).copied().unwrap_or(0)))
            .collect()
    }

    /// Listing for whichever dialog is open; empty when none is.
    pub fn open_rows(&self) -> Vec<ItemRowView> {
        let for_edit = matches!(self.detail.modal(), DetailModal::Editing(_));
        let Some(coordinate) = self.open_coordinate() else {
            return Vec::new();
        };
        item_rows(&self.store, coordinate, &self.config.features, for_edit)
    }

    pub fn export_file_name(&self) -> String {
        transfer::export_file_name(&self.title, &self.config)
    }

    pub fn export_csv(&self) -> Result<String, CodecError> {
        transfer::export_csv(&self.store, &self.layout)
    }

    /// Replace the inventory from CSV text. An in-progress item edit is dropped since
    /// its index may now point at a different record.
    pub fn import_csv(&mut self, text: &str) -> ImportOutcome {
        let outcome = transfer::import_csv(text, &self.layout, &mut self.store);
        if matches!(outcome, ImportOutcome::Replaced(_)) {
            self.detail.reset_edit();
        }
        outcome
    }

    pub fn export_to(&self, path: &Path) -> anyhow::Result<()> {
        transfer::write_export(path, &self.store, &self.layout)
    }

    pub fn import_from(&mut self, path: &Path) -> anyhow::Result<ImportOutcome> {
        let outcome = transfer::read_import(path, &self.layout, &mut self.store)?;
        if matches!(outcome, ImportOutcome::Replaced(_)) {
            self.detail.reset_edit();
        }
        Ok(outcome)
    }
}

impl Default for Tracker {
    fn default() -> Self {
        Self::new(TrackerConfig::default())
    }
}
