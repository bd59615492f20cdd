use pretty_assertions::assert_eq;
use slotgrid::coord::SlotPos;
use slotgrid::transfer::ImportOutcome;
use slotgrid::{Tracker, TrackerConfig};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

#[test]
fn exported_file_reimports_identically() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let mut tracker = Tracker::default();
    assert!(tracker.open_edit(SlotPos::new(3, 3)));
    tracker.draft_mut().code = "A, B".to_string();
    tracker.draft_mut().description = "say \"hi\"".to_string();
    tracker.submit();

    let path = dir.path().join(tracker.export_file_name());
    assert!(path.ends_with("inventory.csv"));
    tracker.export_to(&path)?;

    let written = std::fs::read_to_string(&path)?;
    assert_eq!(
        written,
        "Coordinate,Code,Description,Carton,Single,Date,Notes\n\
         I0303,\"A, B\",\"say \"\"hi\"\"\",,,,"
    );

    let mut other = Tracker::default();
    assert_eq!(other.import_from(&path)?, ImportOutcome::Replaced(1));
    assert_eq!(other.store(), tracker.store());
    Ok(())
}

#[test]
fn import_accepts_crlf_and_bom() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("stock.csv");
    std::fs::write(
        &path,
        "\u{feff}Coordinate,Code,Description,Carton,Single,Date,Notes\r\n\
         I0000,A1,,1,0,2024-01-01,\r\n\r\n\
         I0101,B2\r\n",
    )?;

    let mut tracker = Tracker::default();
    assert_eq!(tracker.import_from(&path)?, ImportOutcome::Replaced(2));
    let items = tracker.store().items();
    assert_eq!(items[0].coordinate, "I0000");
    assert_eq!(items[0].date, "2024-01-01");
    assert_eq!(items[1].code, "B2");
    assert_eq!(items[1].notes, "");
    Ok(())
}

#[test]
fn import_of_missing_file_leaves_store() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let mut tracker = Tracker::default();
    assert!(tracker.open_edit(SlotPos::new(0, 0)));
    tracker.submit();

    let err = tracker.import_from(&dir.path().join("absent.csv"));
    assert!(err.is_err());
    assert_eq!(tracker.store().len(), 1);
    Ok(())
}

#[test]
fn non_utf8_import_is_an_error() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("latin1.csv");
    std::fs::write(&path, b"Coordinate,Code\nI0000,caf\xe9\n")?;

    let mut tracker = Tracker::default();
    let err = tracker.import_from(&path).unwrap_err();
    assert!(format!("{err:#}").contains("UTF-8"));
    assert!(tracker.store().is_empty());
    Ok(())
}

#[test]
fn config_file_without_descriptions_drops_column() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("slotgrid.json5");
    std::fs::write(
        &path,
        "{\n  // no descriptions\n  features: { description: false },\n  default_title: 'Bins',\n}\n",
    )?;

    let config = TrackerConfig::load(Some(path.as_path()))?;
    let mut tracker = Tracker::new(config);
    assert_eq!(tracker.grid().prefix(), "B");
    assert!(tracker.open_edit(SlotPos::new(1, 0)));
    tracker.draft_mut().code = "K".to_string();
    tracker.submit();

    assert_eq!(
        tracker.export_csv()?,
        "Coordinate,Code,Carton,Single,Date,Notes\nB0100,K,,,,"
    );
    assert_eq!(tracker.export_file_name(), "bins.csv");
    Ok(())
}

#[test]
fn explicit_missing_config_is_an_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let err = TrackerConfig::load(Some(dir.path().join("nope.json5").as_path())).unwrap_err();
    assert!(err.to_string().contains("nope.json5"));
}
