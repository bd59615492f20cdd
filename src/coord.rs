use crate::statics;

/// Positional identity of a grid slot. `x` is the column (0..12), `y` the row (0..6).
/// Stable for the lifetime of the grid; the printable coordinate is derived from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotPos {
    pub x: u8,
    pub y: u8,
}

impl SlotPos {
    pub const fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    pub fn in_bounds(self) -> bool {
        self.x < statics::GRID_COLUMNS && self.y < statics::GRID_ROWS
    }

    pub fn coordinate(self, prefix: &str) -> String {
        encode(self.x, self.y, prefix)
    }
}

/// Printable slot label: `prefix` followed by the zero-padded column and row.
///
/// ```
/// assert_eq!(slotgrid::coord::encode(0, 5, "I"), "I0005");
/// assert_eq!(slotgrid::coord::encode(11, 0, "Q"), "Q1100");
/// ```
pub fn encode(x: u8, y: u8, prefix: &str) -> String {
    format!("{prefix}{x:02}{y:02}")
}

/// Prefix derived from a sheet title: its first non-blank character, uppercased.
/// Falls back to `fallback` when the title is empty or only whitespace.
pub fn prefix_from_title(title: &str, fallback: char) -> String {
    let first = title.trim().chars().next().unwrap_or(fallback);
    first.to_uppercase().collect()
}
