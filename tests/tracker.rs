use pretty_assertions::assert_eq;
use slotgrid::coord::SlotPos;
use slotgrid::detail::SubmitOutcome;
use slotgrid::transfer::ImportOutcome;
use slotgrid::{InventoryItem, Tracker, TrackerConfig};

fn add_item(tracker: &mut Tracker, pos: SlotPos, code: &str, carton: &str) -> SubmitOutcome {
    assert!(tracker.open_edit(pos));
    let draft = tracker.draft_mut();
    draft.code = code.to_string();
    draft.carton = carton.to_string();
    tracker.submit()
}

#[test]
fn default_title_gives_i_prefix() {
    let tracker = Tracker::default();
    assert_eq!(tracker.title(), "Inventory");
    assert_eq!(tracker.grid().prefix(), "I");
    assert_eq!(tracker.grid().coordinate_of(SlotPos::new(0, 5)), Some("I0005"));
}

#[test]
fn adding_in_slot_appends_exactly_one() {
    let mut tracker = Tracker::default();
    let before = tracker.store().len();

    let outcome = add_item(&mut tracker, SlotPos::new(1, 1), "X1", "3");
    assert_eq!(outcome, SubmitOutcome::Added { index: before });
    assert_eq!(tracker.store().len(), before + 1);

    let item = tracker.store().get(before).unwrap();
    assert_eq!(
        item,
        &InventoryItem {
            coordinate: "I0101".to_string(),
            code: "X1".to_string(),
            carton: "3".to_string(),
            ..InventoryItem::default()
        }
    );
}

#[test]
fn updating_keeps_length_and_other_items() {
    let mut tracker = Tracker::default();
    add_item(&mut tracker, SlotPos::new(1, 1), "A", "1");
    add_item(&mut tracker, SlotPos::new(1, 1), "B", "2");
    add_item(&mut tracker, SlotPos::new(4, 0), "C", "3");
    let before = tracker.store().clone();

    assert!(tracker.open_edit(SlotPos::new(1, 1)));
    let rows = tracker.open_rows();
    assert_eq!(rows.len(), 2);
    assert!(tracker.start_edit(rows[1].index));
    tracker.draft_mut().single = "7".to_string();
    assert_eq!(tracker.submit(), SubmitOutcome::Updated { index: 1 });

    assert_eq!(tracker.store().len(), before.len());
    assert_eq!(tracker.store().items()[0], before.items()[0]);
    assert_eq!(tracker.store().items()[2], before.items()[2]);
    assert_eq!(tracker.store().items()[1].single, "7");
    assert_eq!(tracker.store().items()[1].code, "B");
}

#[test]
fn title_change_relabels_cells_and_items() {
    let mut tracker = Tracker::default();
    add_item(&mut tracker, SlotPos::new(0, 5), "A", "1");
    add_item(&mut tracker, SlotPos::new(3, 2), "B", "1");

    assert_eq!(tracker.set_title("Quarry"), 2);
    assert_eq!(tracker.store().items()[0].coordinate, "Q0005");
    assert_eq!(tracker.store().items()[1].coordinate, "Q0302");
    assert_eq!(tracker.grid().coordinate_of(SlotPos::new(0, 5)), Some("Q0005"));
    assert_eq!(tracker.cell_views()[0].label, "Q0005");

    // Blank title falls back to X.
    tracker.set_title("   ");
    assert_eq!(tracker.store().items()[0].coordinate, "X0005");
}

#[test]
fn open_dialog_follows_relabel() {
    let mut tracker = Tracker::default();
    add_item(&mut tracker, SlotPos::new(2, 3), "A", "1");
    assert!(tracker.open_edit(SlotPos::new(2, 3)));
    tracker.set_title("queue");
    assert_eq!(tracker.open_coordinate(), Some("Q0203"));
    assert_eq!(tracker.open_rows().len(), 1);

    tracker.draft_mut().code = "B".to_string();
    tracker.submit();
    assert_eq!(tracker.store().items()[1].coordinate, "Q0203");
}

#[test]
fn fixed_prefix_ignores_title() {
    let mut config = TrackerConfig::default();
    config.features.title_prefix = false;
    config.fixed_prefix = "B".to_string();
    let mut tracker = Tracker::new(config);
    add_item(&mut tracker, SlotPos::new(0, 0), "A", "1");

    assert_eq!(tracker.set_title("Quarry"), 0);
    assert_eq!(tracker.store().items()[0].coordinate, "B0000");
    assert_eq!(tracker.export_file_name(), "inventory.csv");
}

#[test]
fn header_only_import_is_noop() {
    let mut tracker = Tracker::default();
    add_item(&mut tracker, SlotPos::new(0, 0), "A", "1");
    let before = tracker.store().clone();

    let outcome = tracker.import_csv("Coordinate,Code,Description,Carton,Single,Date,Notes");
    assert_eq!(outcome, ImportOutcome::NoData);
    assert_eq!(tracker.store(), &before);
}

#[test]
fn export_then_import_restores_store() {
    let mut tracker = Tracker::default();
    add_item(&mut tracker, SlotPos::new(0, 0), "Widget, Large", "10");
    add_item(&mut tracker, SlotPos::new(0, 0), "5\" pipe", "1");
    assert!(tracker.open_edit(SlotPos::new(11, 5)));
    tracker.draft_mut().notes = "line one\nline two".to_string();
    tracker.submit();
    let before = tracker.store().clone();

    let text = tracker.export_csv().unwrap();
    let mut other = Tracker::default();
    assert_eq!(other.import_csv(&text), ImportOutcome::Replaced(3));
    assert_eq!(other.store(), &before);
}

#[test]
fn locking_clears_selection_and_disables_actions() {
    let mut tracker = Tracker::default();
    let pos = SlotPos::new(5, 4);
    assert!(tracker.toggle_select(pos));
    assert!(tracker.grid().cell(pos).unwrap().is_selected());

    tracker.toggle_lock(pos);
    let view = tracker
        .cell_views()
        .into_iter()
        .find(|v| v.pos == pos)
        .unwrap();
    assert!(!view.selected);
    assert!(!view.actions_enabled);
    assert!(!tracker.grid().cell(pos).unwrap().is_selected());
    assert!(!tracker.open_view(pos));
}

#[test]
fn closing_drops_unsaved_form() {
    let mut tracker = Tracker::default();
    assert!(tracker.open_edit(SlotPos::new(0, 0)));
    tracker.draft_mut().code = "unsaved".to_string();
    tracker.close_dialogs();

    assert_eq!(tracker.submit(), SubmitOutcome::Ignored);
    assert!(tracker.store().is_empty());
    assert!(tracker.open_edit(SlotPos::new(0, 0)));
    assert_eq!(tracker.detail().draft().code, "");
}
