use crate::commands::{CmdMessage, CmdResult};
use crate::config::LabelConfig;
use crate::error::Result;
use crate::model::ItemRange;
use crate::qr::QrGenerator;
use crate::sheet::{self, SheetSpec};
use crate::strategy::BoxGroup;
use std::path::Path;

/// Generate one page of boxed-item labels: a QR image per item, then
/// the sheet. The range covers exactly one grid's worth of items.
pub fn run(
    config: &LabelConfig,
    spec: &SheetSpec,
    box_number: u32,
    first_item: u32,
) -> Result<CmdResult> {
    let range = ItemRange::new(first_item, spec.capacity() as u32);

    let qr = QrGenerator::new(&config.base_url, &config.qr_dir);
    for item in range.iter() {
        qr.generate(item, None, None, Some(box_number))?;
    }

    let strategy = BoxGroup::new(box_number, spec.capacity());
    let output = sheet::generate_page(
        spec,
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
        "Next free item number: {}",
        output.range.next()
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sheet::LABELS_24;
    use tempfile::tempdir;

    fn test_config(dir: &Path) -> LabelConfig {
        let mut config = LabelConfig::default();
        config.base_url = "https://inventory.test/link".to_string();
        config.qr_dir = dir.join("qr").to_string_lossy().into_owned();
        config.output_dir = dir.join("labels").to_string_lossy().into_owned();
        config
    }

    #[test]
    fn test_run_writes_qr_images_and_one_pdf() {
        let dir = tempdir().unwrap();
        let config = test_config(dir.path());

        let result = run(&config, &LABELS_24, 7, 100).unwrap();

        let output = result.output.unwrap();
        assert_eq!(
            output,
            dir.path().join("labels").join("7_100-123_24.pdf")
        );
        assert!(output.exists());

        let range = result.range.unwrap();
        assert_eq!(range.next(), 124);

        // One QR image per item in the range, nothing else
        for item in 100..=123u32 {
            assert!(dir.path().join("qr").join(format!("{}.png", item)).exists());
        }
        assert_eq!(
            std::fs::read_dir(dir.path().join("qr")).unwrap().count(),
            24
        );
    }
}
