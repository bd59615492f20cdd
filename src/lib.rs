//! Core library for SlotGrid, a visual inventory tracker.
//! Models a fixed 12x6 grid of storage slots, the records filed in each slot, and
//! CSV import/export of the whole inventory. The GUI is a thin layer on [`Tracker`].

pub mod config;
pub mod coord;
pub mod csv_codec;
pub mod detail;
pub mod grid;
mod gui;
pub mod item;
pub mod logging;
pub mod statics;
pub mod store;
mod tracker;
pub mod transfer;

pub use config::{Features, TrackerConfig};
pub use gui::run_gui;
pub use item::InventoryItem;
pub use store::InventoryStore;
pub use tracker::Tracker;
