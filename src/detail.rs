use crate::config::Features;
use crate::coord::SlotPos;
use crate::grid::Grid;
use crate::item::{InventoryItem, ItemField};
use crate::statics;
use crate::store::InventoryStore;

/// Which slot dialog is showing, if any. Dialogs are keyed by position so they keep
/// following the same slot when its label changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetailModal {
    #[default]
    Closed,
    Viewing(SlotPos),
    Editing(SlotPos),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditMode {
    /// Submitting appends a new item.
    #[default]
    Adding,
    /// Submitting overwrites the item at this store index.
    Updating(usize),
}

/// Form buffer for the edit dialog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemDraft {
    pub code: String,
    pub description: String,
    pub carton: String,
    pub single: String,
    pub date: String,
    pub notes: String,
}

impl ItemDraft {
    pub fn from_item(item: &InventoryItem) -> Self {
        Self {
            code: item.code.clone(),
            description: item.description.clone(),
            carton: item.carton.clone(),
            single: item.single.clone(),
            date: item.date.clone(),
            notes: item.notes.clone(),
        }
    }

    /// The coordinate is not part of the form.
    pub fn field_mut(&mut self, field: ItemField) -> Option<&mut String> {
        match field {
            ItemField::Coordinate => None,
            ItemField::Code => Some(&mut self.code),
            ItemField::Description => Some(&mut self.description),
            ItemField::Carton => Some(&mut self.carton),
            ItemField::Single => Some(&mut self.single),
            ItemField::Date => Some(&mut self.date),
            ItemField::Notes => Some(&mut self.notes),
        }
    }

    /// Build the record for `coordinate`, trimming every field.
    pub fn to_item(&self, coordinate: &str) -> InventoryItem {
        InventoryItem {
            coordinate: coordinate.to_string(),
            code: self.code.trim().to_string(),
            description: self.description.trim().to_string(),
            carton: self.carton.trim().to_string(),
            single: self.single.trim().to_string(),
            date: self.date.trim().to_string(),
            notes: self.notes.trim().to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// No edit dialog was open.
    Ignored,
    Added { index: usize },
    Updated { index: usize },
    /// The targeted index no longer exists; nothing changed.
    Missing { index: usize },
}

/// View/edit dialog controller. Holds only dialog and form state; the store and
/// grid are borrowed for the duration of each call.
#[derive(Debug, Clone, Default)]
pub struct SlotDetail {
    modal: DetailModal,
    mode: EditMode,
    draft: ItemDraft,
}

impl SlotDetail {
    pub fn modal(&self) -> DetailModal {
        self.modal
    }

    pub fn mode(&self) -> EditMode {
        self.mode
    }

    pub fn draft(&self) -> &ItemDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut ItemDraft {
        &mut self.draft
    }

    pub fn open_slot(&self) -> Option<SlotPos> {
        match self.modal {
            DetailModal::Closed => None,
            DetailModal::Viewing(pos) | DetailModal::Editing(pos) => Some(pos),
        }
    }

    pub fn open_view(&mut self, pos: SlotPos) {
        self.reset_edit();
        self.modal = DetailModal::Viewing(pos);
    }

    pub fn open_edit(&mut self, pos: SlotPos) {
        self.reset_edit();
        self.modal = DetailModal::Editing(pos);
    }

    /// Pre-fill the form from the item at `index` and switch to update mode.
    /// Only valid while the edit dialog is open and per-item editing is enabled.
    pub fn start_edit(
        &mut self,
        index: usize,
        store: &InventoryStore,
        features: &Features,
    ) -> bool {
        if !features.per_item_edit || !matches!(self.modal, DetailModal::Editing(_)) {
            return false;
        }
        let Some(item) = store.get(index) else {
            return false;
        };
        self.draft = ItemDraft::from_item(item);
        self.mode = EditMode::Updating(index);
        true
    }

    pub fn cancel_edit(&mut self) {
        self.reset_edit();
    }

    /// Back to "add" mode with an empty form.
    pub fn reset_edit(&mut self) {
        self.mode = EditMode::Adding;
        self.draft = ItemDraft::default();
    }

    /// Commit the form to the store. The item is filed under the edited slot's
    /// current label. Always returns to "add" mode afterwards.
    pub fn submit(&mut self, grid: &Grid, store: &mut InventoryStore) -> SubmitOutcome {
        let DetailModal::Editing(pos) = self.modal else {
            return SubmitOutcome::Ignored;
        };
        let Some(coordinate) = grid.coordinate_of(pos) else {
            return SubmitOutcome::Ignored;
        };

        let item = self.draft.to_item(coordinate);
        let outcome = match self.mode {
            EditMode::Adding => {
                store.append(item);
                SubmitOutcome::Added {
                    index: store.len() - 1,
                }
            }
            EditMode::Updating(index) => {
                if store.replace_at(index, item) {
                    SubmitOutcome::Updated { index }
                } else {
                    SubmitOutcome::Missing { index }
                }
            }
        };

        self.reset_edit();
        outcome
    }

    /// Hide both dialogs. Unsaved form input is dropped.
    pub fn close(&mut self) {
        self.modal = DetailModal::Closed;
        self.reset_edit();
    }

    pub fn submit_label(&self) -> &'static str {
        match self.mode {
            EditMode::Adding => statics::EN_BTN_ADD_ITEM,
            EditMode::Updating(_) => statics::EN_BTN_UPDATE_ITEM,
        }
    }

    pub fn shows_cancel(&self) -> bool {
        matches!(self.mode, EditMode::Updating(_))
    }
}

/// One numbered entry of a slot listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemRowView {
    /// Store index, used by the "Edit Item" button.
    pub index: usize,
    pub heading: String,
    pub fields: Vec<(&'static str, String)>,
    pub editable: bool,
}

/// Listing of every item in a slot, in store order. Empty values show a placeholder.
pub fn item_rows(
    store: &InventoryStore,
    coordinate: &str,
    features: &Features,
    for_edit: bool,
) -> Vec<ItemRowView> {
    store
        .items_by_slot(coordinate)
        .into_iter()
        .enumerate()
        .map(|(n, entry)| {
            let fields = ItemField::EDITABLE
                .into_iter()
                .filter(|f| features.description || *f != ItemField::Description)
                .map(|f| (f.form_label(), display_value(entry.item.field(f))))
                .collect();
            ItemRowView {
                index: entry.index,
                heading: format!("{} {}", statics::EN_ITEM_PREFIX, n + 1),
                fields,
                editable: for_edit && features.per_item_edit,
            }
        })
        .collect()
}

fn display_value(value: &str) -> String {
    if value.is_empty() {
        statics::EN_PLACEHOLDER_EMPTY.to_string()
    } else {
        value.to_string()
    }
}
