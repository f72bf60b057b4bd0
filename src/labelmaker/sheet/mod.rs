//! Sheet layouts and the page-filling engine.
//!
//! A [`SheetSpec`] fixes the physical grid of one label-sheet product:
//! page size, rows, columns, cell size, margins, gaps (all mm) plus the
//! drawing routine for its cell size. Labels fill the grid left to
//! right, top to bottom; one grid's worth of labels is one page.

pub mod draw;
mod render;

use crate::error::{LabelError, Result};
use crate::model::{ItemRange, LabelRecord};
use crate::strategy::GroupStrategy;
use std::fs;
use std::path::{Path, PathBuf};

/// Physical grid of one label-sheet product. Immutable; the two
/// supported products are [`LABELS_24`] and [`LABELS_48`].
#[derive(Debug, Clone, Copy)]
pub struct SheetSpec {
    pub page_width: f32,
    pub page_height: f32,
    pub columns: usize,
    pub rows: usize,
    pub label_width: f32,
    pub label_height: f32,
    pub left_margin: f32,
    pub top_margin: f32,
    pub row_gap: f32,
    pub column_gap: f32,
    pub drawer: draw::Drawer,
}

/// Avery Zweckform L4773-20: A4, 3 x 8 grid, 24 labels per page.
pub const LABELS_24: SheetSpec = SheetSpec {
    page_width: 210.0,
    page_height: 297.0,
    columns: 3,
    rows: 8,
    label_width: 63.5,
    label_height: 33.9,
    left_margin: 7.0,
    top_margin: 13.0,
    row_gap: 0.0,
    column_gap: 3.0,
    drawer: draw::label_24,
};

/// Avery Zweckform L4778-20: A4, 4 x 12 grid, 48 labels per page.
pub const LABELS_48: SheetSpec = SheetSpec {
    page_width: 210.0,
    page_height: 297.0,
    columns: 4,
    rows: 12,
    label_width: 45.7,
    label_height: 21.2,
    left_margin: 10.0,
    top_margin: 21.5,
    row_gap: 0.0,
    column_gap: 2.5,
    drawer: draw::label_48,
};

impl SheetSpec {
    pub fn capacity(&self) -> usize {
        self.rows * self.columns
    }

    /// Lower-left corner (mm, page coordinates) of the cell at `slot`
    /// on a page. Slots run left to right, then row by row from the
    /// top of the page.
    pub fn cell_origin(&self, slot: usize) -> (f32, f32) {
        let row = slot / self.columns;
        let col = slot % self.columns;
        let x = self.left_margin + col as f32 * (self.label_width + self.column_gap);
        let y = self.page_height
            - self.top_margin
            - (row + 1) as f32 * self.label_height
            - row as f32 * self.row_gap;
        (x, y)
    }
}

/// An in-memory accumulation of label records against one spec.
/// `save` renders them as a paginated PDF; a grid's worth of records
/// fills a page, and a final partial page is allowed.
pub struct Sheet<'a> {
    spec: &'a SheetSpec,
    owner_line: String,
    records: Vec<LabelRecord>,
}

impl<'a> Sheet<'a> {
    pub fn new(spec: &'a SheetSpec, owner_line: impl Into<String>) -> Self {
        Self {
            spec,
            owner_line: owner_line.into(),
            records: Vec::new(),
        }
    }

    pub fn push(&mut self, record: LabelRecord) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[LabelRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        render::write_pdf(self.spec, &self.records, &self.owner_line, path.as_ref())
    }
}

/// What one generation run produced: the document written and the item
/// range it consumed. `range.next()` is the first unused item number.
#[derive(Debug)]
pub struct SheetOutput {
    pub path: PathBuf,
    pub range: ItemRange,
}

/// Fill exactly one page. The range must match the grid capacity;
/// anything else is rejected instead of silently under- or
/// over-filling the page.
pub fn generate_page(
    spec: &SheetSpec,
    strategy: &dyn GroupStrategy,
    range: ItemRange,
    qr_dir: &Path,
    out_dir: &Path,
    owner_line: &str,
) -> Result<SheetOutput> {
    if range.count() as usize != spec.capacity() {
        return Err(LabelError::CapacityMismatch {
            expected: spec.capacity(),
            got: range.count() as usize,
        });
    }
    generate_batch(spec, strategy, range, qr_dir, out_dir, owner_line)
}

/// Fill as many pages as the range needs. Used by the room batches,
/// whose totals are rarely a multiple of the grid capacity.
pub fn generate_batch(
    spec: &SheetSpec,
    strategy: &dyn GroupStrategy,
    range: ItemRange,
    qr_dir: &Path,
    out_dir: &Path,
    owner_line: &str,
) -> Result<SheetOutput> {
    let mut sheet = Sheet::new(spec, owner_line);
    for item in range.iter() {
        sheet.push(strategy.record_for(item, qr_dir));
    }

    fs::create_dir_all(out_dir)?;
    let path = out_dir.join(strategy.output_name_for(&range));
    sheet.save(&path)?;

    Ok(SheetOutput { path, range })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::boxed_id;
    use crate::strategy::BoxGroup;
    use tempfile::tempdir;

    fn assert_mm(actual: f32, expected: f32) {
        assert!(
            (actual - expected).abs() < 1e-3,
            "expected {} mm, got {} mm",
            expected,
            actual
        );
    }

    #[test]
    fn test_grid_capacities() {
        assert_eq!(LABELS_24.capacity(), 24);
        assert_eq!(LABELS_48.capacity(), 48);
    }

    #[test]
    fn test_cell_origin_first_row() {
        let (x, y) = LABELS_24.cell_origin(0);
        assert_mm(x, 7.0);
        assert_mm(y, 297.0 - 13.0 - 33.9);

        // One column to the right: width plus column gap
        let (x, _) = LABELS_24.cell_origin(1);
        assert_mm(x, 7.0 + 63.5 + 3.0);
    }

    #[test]
    fn test_cell_origin_wraps_rows_before_columns() {
        // Slot 3 on a 3-column grid is the start of the second row
        let (x, y) = LABELS_24.cell_origin(3);
        assert_mm(x, 7.0);
        assert_mm(y, 297.0 - 13.0 - 2.0 * 33.9);
    }

    #[test]
    fn test_cell_origin_48_uses_its_own_margins() {
        let (x, y) = LABELS_48.cell_origin(0);
        assert_mm(x, 10.0);
        assert_mm(y, 297.0 - 21.5 - 21.2);

        let (x, _) = LABELS_48.cell_origin(5);
        assert_mm(x, 10.0 + 45.7 + 2.5);
    }

    #[test]
    fn test_sheet_accumulates_in_order() {
        let mut sheet = Sheet::new(&LABELS_24, "");
        for item in 1..=3u32 {
            sheet.push(LabelRecord::Boxed {
                id: boxed_id(1, item),
                item,
                qr_path: std::path::PathBuf::from(format!("qr/{}.png", item)),
            });
        }
        assert_eq!(sheet.len(), 3);
        let items: Vec<u32> = sheet.records().iter().map(|r| r.item()).collect();
        assert_eq!(items, vec![1, 2, 3]);
    }

    #[test]
    fn test_generate_page_rejects_capacity_mismatch() {
        let dir = tempdir().unwrap();
        let strategy = BoxGroup::new(7, LABELS_24.capacity());
        let err = generate_page(
            &LABELS_24,
            &strategy,
            ItemRange::new(100, 48),
            dir.path(),
            dir.path(),
            "",
        )
        .unwrap_err();
        assert!(matches!(
            err,
            LabelError::CapacityMismatch { expected: 24, got: 48 }
        ));
        // Nothing was written
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}
