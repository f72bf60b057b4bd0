//! Grouping strategies: how a run of item numbers becomes labels.
//!
//! Each generation mode supplies its own ID scheme, label record, and
//! output file name through [`GroupStrategy`]; the sheet engine stays
//! generic over the mode.

use crate::catalog::RoomEntry;
use crate::model::{boxed_id, unboxed_id, ItemRange, LabelRecord};
use std::path::Path;

pub trait GroupStrategy {
    /// The label ID printed for `item`.
    fn id_for(&self, item: u32) -> String;

    /// The full label record for `item`, pointing at its QR image
    /// under `qr_dir`.
    fn record_for(&self, item: u32, qr_dir: &Path) -> LabelRecord;

    /// File name of the document covering `range`.
    fn output_name_for(&self, range: &ItemRange) -> String;
}

fn qr_path(qr_dir: &Path, item: u32) -> std::path::PathBuf {
    qr_dir.join(format!("{}.png", item))
}

/// Labels for the items of a single box.
pub struct BoxGroup {
    box_number: u32,
    capacity: usize,
}

impl BoxGroup {
    pub fn new(box_number: u32, capacity: usize) -> Self {
        Self {
            box_number,
            capacity,
        }
    }
}

impl GroupStrategy for BoxGroup {
    fn id_for(&self, item: u32) -> String {
        boxed_id(self.box_number, item)
    }

    fn record_for(&self, item: u32, qr_dir: &Path) -> LabelRecord {
        LabelRecord::Boxed {
            id: self.id_for(item),
            item,
            qr_path: qr_path(qr_dir, item),
        }
    }

    fn output_name_for(&self, range: &ItemRange) -> String {
        format!(
            "{}_{}-{}_{}.pdf",
            self.box_number,
            range.first(),
            range.last(),
            self.capacity
        )
    }
}

/// Labels for unboxed items headed to one building.
pub struct BuildingGroup {
    building: String,
    capacity: usize,
}

impl BuildingGroup {
    pub fn new(building: impl Into<String>, capacity: usize) -> Self {
        Self {
            building: building.into(),
            capacity,
        }
    }
}

impl GroupStrategy for BuildingGroup {
    fn id_for(&self, item: u32) -> String {
        unboxed_id(item)
    }

    fn record_for(&self, item: u32, qr_dir: &Path) -> LabelRecord {
        LabelRecord::Building {
            id: self.id_for(item),
            item,
            building: self.building.clone(),
            qr_path: qr_path(qr_dir, item),
        }
    }

    fn output_name_for(&self, range: &ItemRange) -> String {
        format!(
            "{}_{}-{}_{}.pdf",
            self.building,
            range.first(),
            range.last(),
            self.capacity
        )
    }
}

/// Labels for every catalog room, 8 items per room in catalog order.
pub struct RoomBatchGroup {
    entries: Vec<RoomEntry>,
    first: u32,
}

/// Items allocated to each room.
pub const ITEMS_PER_ROOM: u32 = 8;

impl RoomBatchGroup {
    pub fn new(entries: Vec<RoomEntry>, first: u32) -> Self {
        Self { entries, first }
    }

    /// Total items a full batch over these rooms consumes.
    pub fn item_count(&self) -> u32 {
        self.entries.len() as u32 * ITEMS_PER_ROOM
    }

    /// The catalog entry `item` falls into: items are handed out in
    /// blocks of 8 per room, in catalog order, starting at `first`.
    pub fn entry_for(&self, item: u32) -> &RoomEntry {
        let index = ((item - self.first) / ITEMS_PER_ROOM) as usize;
        &self.entries[index % self.entries.len()]
    }
}

impl GroupStrategy for RoomBatchGroup {
    fn id_for(&self, item: u32) -> String {
        unboxed_id(item)
    }

    fn record_for(&self, item: u32, qr_dir: &Path) -> LabelRecord {
        LabelRecord::Room {
            id: self.id_for(item),
            item,
            room: self.entry_for(item).room.clone(),
            qr_path: qr_path(qr_dir, item),
        }
    }

    fn output_name_for(&self, range: &ItemRange) -> String {
        // Named after the building of the last room iterated. See
        // DESIGN.md before changing this.
        let last_building = self
            .entries
            .last()
            .map(|e| e.building.as_str())
            .unwrap_or("");
        format!(
            "ROOMS_{}_{}-{}_48.pdf",
            last_building,
            range.first(),
            range.last()
        )
    }
}
