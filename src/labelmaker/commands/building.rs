use crate::commands::{CmdMessage, CmdResult};
use crate::config::LabelConfig;
use crate::error::Result;
use crate::model::ItemRange;
use crate::qr::QrGenerator;
use crate::sheet::{self, SheetSpec};
use crate::strategy::BuildingGroup;
use std::path::Path;

/// Generate one page of building labels for unboxed items. The
/// building travels in the QR payload as the destination.
pub fn run(
    config: &LabelConfig,
    spec: &SheetSpec,
    building: &str,
    first_item: u32,
) -> Result<CmdResult> {
    let range = ItemRange::new(first_item, spec.capacity() as u32);

    let qr = QrGenerator::new(&config.base_url, &config.qr_dir);
    for item in range.iter() {
        qr.generate(item, Some(building), None, None)?;
    }

    let strategy = BuildingGroup::new(building, spec.capacity());
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
