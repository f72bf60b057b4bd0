use crate::catalog::RoomCatalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::config::LabelConfig;
use crate::error::{LabelError, Result};
use crate::model::ItemRange;
use crate::qr::QrGenerator;
use crate::sheet::{self, LABELS_48};
use crate::strategy::RoomBatchGroup;
use std::path::Path;

/// Generate labels for every room in the catalog, 8 items per room in
/// catalog order, 48 labels per page. The batch spans as many pages as
/// the catalog needs; the last page may be partial.
pub fn run(config: &LabelConfig, first_item: u32) -> Result<CmdResult> {
    let catalog = RoomCatalog::load(&config.catalog_path)?;
    if catalog.total() == 0 {
        return Err(LabelError::Catalog(format!(
            "{}: room catalog is empty",
            config.catalog_path
        )));
    }

    let strategy = RoomBatchGroup::new(catalog.entries().to_vec(), first_item);
    let range = ItemRange::new(first_item, strategy.item_count());

    let qr = QrGenerator::new(&config.base_url, &config.qr_dir);
    for item in range.iter() {
        let room = strategy.entry_for(item).room.clone();
        qr.generate(item, Some(&room), None, None)?;
    }

    let output = sheet::generate_batch(
        &LABELS_48,
        &strategy,
        range,
        qr.qr_dir(),
        Path::new(&config.output_dir),
        &config.owner_line,
    )?;

    let mut result = CmdResult {
        output: Some(output.path.clone()),
        range: Some(output.range),
        ..Default::default()
    };
    result.add_message(CmdMessage::success(format!(
        "Saved {}",
        output.path.display()
    )));
    result.add_message(CmdMessage::info(format!(
        "Labelled {} rooms, next free item number: {}",
        catalog.total(),
        output.range.next()
    )));

    let capacity = LABELS_48.capacity() as u32;
    let remainder = output.range.count() % capacity;
    if remainder != 0 {
        result.add_message(CmdMessage::warning(format!(
            "Last page only has {} of {} labels filled",
            remainder, capacity
        )));
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn test_config(dir: &Path, catalog: &str) -> LabelConfig {
        let catalog_path = dir.join("rooms.json");
        fs::write(&catalog_path, catalog).unwrap();

        let mut config = LabelConfig::default();
        config.base_url = "https://inventory.test/link".to_string();
        config.qr_dir = dir.join("qr").to_string_lossy().into_owned();
        config.output_dir = dir.join("labels").to_string_lossy().into_owned();
        config.catalog_path = catalog_path.to_string_lossy().into_owned();
        config
    }

    #[test]
    fn test_two_room_catalog_consumes_sixteen_items() {
        let dir = tempdir().unwrap();
        let config = test_config(dir.path(), r#"{"K": ["K.1.105"], "U": ["UB2.147"]}"#);

        let result = run(&config, 1).unwrap();

        assert_eq!(
            result.output.unwrap(),
            dir.path().join("labels").join("ROOMS_U_1-16_48.pdf")
        );
        assert_eq!(result.range.unwrap().next(), 17);
        assert_eq!(fs::read_dir(dir.path().join("qr")).unwrap().count(), 16);

        // 16 of 48 slots used: the operator gets told
        assert!(result.messages.iter().any(|m| {
            matches!(m.level, crate::commands::MessageLevel::Warning)
                && m.content.contains("16 of 48")
        }));
    }

    #[test]
    fn test_large_catalog_spans_a_second_page() {
        let dir = tempdir().unwrap();
        // 7 rooms x 8 items = 56 labels, one more than a 48-slot page
        let config = test_config(
            dir.path(),
            r#"{"K": ["K.1", "K.2", "K.3", "K.4"], "U": ["U.1", "U.2", "U.3"]}"#,
        );

        let result = run(&config, 1).unwrap();

        let output = result.output.unwrap();
        assert_eq!(
            output,
            dir.path().join("labels").join("ROOMS_U_1-56_48.pdf")
        );
        assert_eq!(result.range.unwrap().next(), 57);
        assert_eq!(fs::read_dir(dir.path().join("qr")).unwrap().count(), 56);

        // The page tree of the written document holds two pages
        let bytes = fs::read(&output).unwrap();
        assert!(String::from_utf8_lossy(&bytes).contains("/Count 2"));
    }

    #[test]
    fn test_empty_catalog_is_rejected() {
        let dir = tempdir().unwrap();
        let config = test_config(dir.path(), "{}");

        let err = run(&config, 1).unwrap_err();
        assert!(matches!(err, LabelError::Catalog(_)));
        // Nothing written
        assert!(!dir.path().join("qr").exists());
        assert!(!dir.path().join("labels").exists());
    }
}
