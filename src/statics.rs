// Central place for UI strings and other non-localized constants.
// Keep these out of gui.rs to reduce duplication and make tweaks safer.

// Grid geometry (12 columns by 6 rows).
pub const GRID_COLUMNS: u8 = 12;
pub const GRID_ROWS: u8 = 6;
pub const GRID_CELL_COUNT: usize = GRID_COLUMNS as usize * GRID_ROWS as usize;

// Config defaults.
pub const DEFAULT_TITLE: &str = "Inventory";
pub const DEFAULT_FIXED_PREFIX: &str = "I";
pub const DEFAULT_FALLBACK_PREFIX: char = 'X';
pub const DEFAULT_EXPORT_NAME: &str = "inventory";
pub const CONFIG_FILE_NAME: &str = "slotgrid.json5";

// CSV layout.
pub const CSV_EXTENSION: &str = "csv";
pub const CSV_COL_COORDINATE: &str = "Coordinate";
pub const CSV_COL_CODE: &str = "Code";
pub const CSV_COL_DESCRIPTION: &str = "Description";
pub const CSV_COL_CARTON: &str = "Carton";
pub const CSV_COL_SINGLE: &str = "Single";
pub const CSV_COL_DATE: &str = "Date";
pub const CSV_COL_NOTES: &str = "Notes";

// English UI strings (EN_ prefix to make future localization easier)
pub const EN_APP_TITLE: &str = "SlotGrid: Inventory Tracker";

pub const EN_BTN_EXPORT: &str = "Export CSV...";
pub const EN_BTN_IMPORT: &str = "Import CSV...";
pub const EN_BTN_TOGGLE_THEME: &str = "Theme";
pub const EN_BTN_CLEAR: &str = "Clear";
pub const EN_BTN_CLOSE: &str = "Close";
pub const EN_BTN_CANCEL: &str = "Cancel";
pub const EN_BTN_VIEW: &str = "View";
pub const EN_BTN_EDIT: &str = "Edit";
pub const EN_BTN_EDIT_ITEM: &str = "Edit Item";
pub const EN_BTN_ADD_ITEM: &str = "Add Item";
pub const EN_BTN_UPDATE_ITEM: &str = "Update Item";

pub const EN_LABEL_TITLE: &str = "Title:";
pub const EN_HINT_TITLE: &str = "Sheet title";
pub const EN_LABEL_ITEMS: &str = "items:";
pub const EN_LABEL_SELECTED: &str = "selected:";
pub const EN_LABEL_LOCKED: &str = "locked:";

pub const EN_WINDOW_VIEW_PREFIX: &str = "Slot";
pub const EN_WINDOW_EDIT_PREFIX: &str = "Edit slot";
pub const EN_HEADING_NEW_ITEM: &str = "New item";
pub const EN_HEADING_EDITING_ITEM: &str = "Editing item";

pub const EN_ITEM_PREFIX: &str = "Item";
pub const EN_NO_ITEMS: &str = "No items in this slot yet.";
pub const EN_PLACEHOLDER_EMPTY: &str = "-";

pub const EN_FIELD_CODE: &str = "Code:";
pub const EN_FIELD_DESCRIPTION: &str = "Description:";
pub const EN_FIELD_CARTON: &str = "Carton:";
pub const EN_FIELD_SINGLE: &str = "Single:";
pub const EN_FIELD_DATE: &str = "Date:";
pub const EN_FIELD_NOTES: &str = "Notes:";
pub const EN_HINT_DATE: &str = "YYYY-MM-DD";

pub const EN_SLOT_ARIA_PREFIX: &str = "Inventory slot";
pub const EN_LOCK_CELL: &str = "Lock cell";
pub const EN_UNLOCK_CELL: &str = "Unlock cell";
pub const EN_GLYPH_LOCKED: &str = "🔒";
pub const EN_GLYPH_UNLOCKED: &str = "🔓";

pub const EN_FILTER_CSV: &str = "CSV";

pub const EN_STATUS_EXPORTED: &str = "Exported";
pub const EN_STATUS_IMPORTED: &str = "Imported";
pub const EN_STATUS_IMPORT_EMPTY: &str = "Nothing to import (no data rows) in";
pub const EN_ERR_EXPORT: &str = "Failed to export";
pub const EN_ERR_IMPORT: &str = "Failed to import";

pub const EN_EMPTY: &str = "";
