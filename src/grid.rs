use crate::coord::SlotPos;
use crate::statics;
use crate::store::InventoryStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellMode {
    #[default]
    Active,
    /// Locked: no selection, no view/edit. Only the lock toggle stays usable.
    Inactive,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridCell {
    pos: SlotPos,
    coordinate: String,
    mode: CellMode,
    selected: bool,
}

impl GridCell {
    fn new(pos: SlotPos, prefix: &str) -> Self {
        Self {
            pos,
            coordinate: pos.coordinate(prefix),
            mode: CellMode::Active,
            selected: false,
        }
    }

    pub fn pos(&self) -> SlotPos {
        self.pos
    }

    pub fn coordinate(&self) -> &str {
        &self.coordinate
    }

    pub fn mode(&self) -> CellMode {
        self.mode
    }

    pub fn is_locked(&self) -> bool {
        self.mode == CellMode::Inactive
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    // Every mode change clears the selection.
    fn set_mode(&mut self, mode: CellMode) {
        self.mode = mode;
        self.selected = false;
    }
}

/// The fixed 12x6 slot grid.
///
/// Cells are stored in display order: the highest row first, left to right within
/// a row. That order is purely visual; lookups go through [`SlotPos`].
#[derive(Debug, Clone)]
pub struct Grid {
    cells: Vec<GridCell>,
    prefix: String,
}

impl Grid {
    pub fn new(prefix: &str) -> Self {
        let mut cells = Vec::with_capacity(statics::GRID_CELL_COUNT);
        for y in (0..statics::GRID_ROWS).rev() {
            for x in 0..statics::GRID_COLUMNS {
                cells.push(GridCell::new(SlotPos::new(x, y), prefix));
            }
        }
        Self {
            cells,
            prefix: prefix.to_string(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn cells(&self) -> &[GridCell] {
        &self.cells
    }

    /// Display rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[GridCell]> {
        self.cells.chunks(usize::from(statics::GRID_COLUMNS))
    }

    fn display_index(pos: SlotPos) -> Option<usize> {
        if !pos.in_bounds() {
            return None;
        }
        let row = usize::from(statics::GRID_ROWS - 1 - pos.y);
        Some(row * usize::from(statics::GRID_COLUMNS) + usize::from(pos.x))
    }

    pub fn cell(&self, pos: SlotPos) -> Option<&GridCell> {
        self.cells.get(Self::display_index(pos)?)
    }

    fn cell_mut(&mut self, pos: SlotPos) -> Option<&mut GridCell> {
        let idx = Self::display_index(pos)?;
        self.cells.get_mut(idx)
    }

    pub fn coordinate_of(&self, pos: SlotPos) -> Option<&str> {
        self.cell(pos).map(GridCell::coordinate)
    }

    /// Flip a cell between active and locked. Returns the new mode.
    pub fn toggle_lock(&mut self, pos: SlotPos) -> Option<CellMode> {
        let cell = self.cell_mut(pos)?;
        let next = match cell.mode {
            CellMode::Active => CellMode::Inactive,
            CellMode::Inactive => CellMode::Active,
        };
        cell.set_mode(next);
        tracing::debug!(coordinate = %cell.coordinate, mode = ?next, "toggle lock");
        Some(next)
    }

    /// Flip the selection of an active cell. Locked cells ignore this.
    /// Returns the resulting selection state.
    pub fn toggle_select(&mut self, pos: SlotPos) -> bool {
        let Some(cell) = self.cell_mut(pos) else {
            return false;
        };
        if cell.is_locked() {
            return false;
        }
        cell.selected = !cell.selected;
        cell.selected
    }

    /// Re-derive every cell label from `prefix` and move the store's items along.
    ///
    /// All old/new label pairs are captured before anything is rewritten. Every
    /// cell shares the same prefix, so the old and new label sets never overlap
    /// and the per-cell relabels cannot collide.
    pub fn relabel(&mut self, prefix: &str, store: &mut InventoryStore) -> usize {
        if prefix == self.prefix {
            return 0;
        }

        let pairs: Vec<(String, String)> = self
            .cells
            .iter()
            .map(|c| (c.coordinate.clone(), c.pos.coordinate(prefix)))
            .collect();

        for (cell, (_, next)) in self.cells.iter_mut().zip(&pairs) {
            cell.coordinate = next.clone();
        }

        let moved: usize = pairs
            .iter()
            .map(|(old, next)| store.relabel(old, next))
            .sum();

        tracing::info!(from = %self.prefix, to = %prefix, moved, "relabel grid");
        self.prefix = prefix.to_string();
        moved
    }

    pub fn selected_count(&self) -> usize {
        self.cells.iter().filter(|c| c.selected).count()
    }

    pub fn locked_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_locked()).count()
    }
}

/// Everything the GUI needs to draw one cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellView {
    pub pos: SlotPos,
    pub label: String,
    pub accessible_label: String,
    pub locked: bool,
    pub selected: bool,
    pub actions_enabled: bool,
    pub lock_glyph: &'static str,
    pub lock_hint: &'static str,
    pub item_count: usize,
}

pub fn cell_view(cell: &GridCell, item_count: usize) -> CellView {
    let locked = cell.is_locked();
    CellView {
        pos: cell.pos,
        label: cell.coordinate.clone(),
        accessible_label: format!("{} {}", statics::EN_SLOT_ARIA_PREFIX, cell.coordinate),
        locked,
        selected: cell.selected && !locked,
        actions_enabled: !locked,
        lock_glyph: if locked {
            statics::EN_GLYPH_LOCKED
        } else {
            statics::EN_GLYPH_UNLOCKED
        },
        lock_hint: if locked {
            statics::EN_UNLOCK_CELL
        } else {
            statics::EN_LOCK_CELL
        },
        item_count,
    }
}
