use std::path::PathBuf;

/// A contiguous, inclusive block of item numbers consumed by one
/// generation run. Ranges are chained explicitly: the caller takes
/// `following()` for the next run instead of relying on a counter
/// kept anywhere else. Arithmetic clamps at `u32::MAX` rather than
/// wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemRange {
    first: u32,
    count: u32,
}

impl ItemRange {
    pub fn new(first: u32, count: u32) -> Self {
        Self { first, count }
    }

    pub fn first(&self) -> u32 {
        self.first
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    /// Last item number covered, inclusive.
    pub fn last(&self) -> u32 {
        self.first.saturating_add(self.count.saturating_sub(1))
    }

    /// First item number NOT covered. Use this to chain runs without
    /// gaps or overlaps.
    pub fn next(&self) -> u32 {
        self.first.saturating_add(self.count)
    }

    /// The range a subsequent run of `count` items would cover.
    pub fn following(&self, count: u32) -> Self {
        Self::new(self.next(), count)
    }

    pub fn iter(&self) -> impl Iterator<Item = u32> {
        self.first..self.first.saturating_add(self.count)
    }
}

/// Boxed ID scheme: `B<box:3>I<item:5>`.
pub fn boxed_id(box_number: u32, item: u32) -> String {
    format!("B{:03}I{:05}", box_number, item)
}

/// Unboxed ID scheme: `I<item:5>`. Used for building and room labels.
pub fn unboxed_id(item: u32) -> String {
    format!("I{:05}", item)
}

/// The data one label is drawn from. One variant per layout flavor,
/// carrying only the fields its drawing routine reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LabelRecord {
    Boxed {
        id: String,
        item: u32,
        qr_path: PathBuf,
    },
    Building {
        id: String,
        item: u32,
        building: String,
        qr_path: PathBuf,
    },
    Room {
        id: String,
        item: u32,
        room: String,
        qr_path: PathBuf,
    },
}

impl LabelRecord {
    pub fn id(&self) -> &str {
        match self {
            LabelRecord::Boxed { id, .. } => id,
            LabelRecord::Building { id, .. } => id,
            LabelRecord::Room { id, .. } => id,
        }
    }

    pub fn item(&self) -> u32 {
        match self {
            LabelRecord::Boxed { item, .. } => *item,
            LabelRecord::Building { item, .. } => *item,
            LabelRecord::Room { item, .. } => *item,
        }
    }

    pub fn qr_path(&self) -> &PathBuf {
        match self {
            LabelRecord::Boxed { qr_path, .. } => qr_path,
            LabelRecord::Building { qr_path, .. } => qr_path,
            LabelRecord::Room { qr_path, .. } => qr_path,
        }
    }
}
