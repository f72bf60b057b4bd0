//! Per-variant label drawing routines.
//!
//! A drawing routine is a pure function from a label record and the
//! cell dimensions to a list of draw primitives. Coordinates are in
//! points relative to the cell's lower-left corner; the renderer
//! translates them onto the page grid.

use crate::model::LabelRecord;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontKind {
    /// Monospace, used for IDs and the big building/room letters.
    Mono,
    /// Sans-serif, used for the ownership caption.
    Sans,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawPrimitive {
    Text {
        x: f32,
        y: f32,
        size: f32,
        font: FontKind,
        content: String,
    },
    Image {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        path: PathBuf,
    },
}

/// Signature shared by the layout drawing routines. The final argument
/// is the ownership caption printed on boxed labels.
pub type Drawer = fn(&LabelRecord, f32, f32, &str) -> Vec<DrawPrimitive>;

fn text(x: f32, y: f32, size: f32, font: FontKind, content: impl Into<String>) -> DrawPrimitive {
    DrawPrimitive::Text {
        x,
        y,
        size,
        font,
        content: content.into(),
    }
}

fn image(x: f32, y: f32, width: f32, height: f32, path: &PathBuf) -> DrawPrimitive {
    DrawPrimitive::Image {
        x,
        y,
        width,
        height,
        path: path.clone(),
    }
}

/// Artwork for the 24-per-page layout (63.5 x 33.9 mm cells).
pub fn label_24(record: &LabelRecord, _width: f32, _height: f32, owner_line: &str) -> Vec<DrawPrimitive> {
    match record {
        LabelRecord::Boxed { id, qr_path, .. } => vec![
            text(58.0, 75.0, 12.0, FontKind::Sans, "Property of"),
            text(58.0, 55.0, 14.0, FontKind::Sans, owner_line),
            text(-2.0, 10.0, 30.0, FontKind::Mono, id),
            image(117.0, 35.0, 60.0, 60.0, qr_path),
        ],
        LabelRecord::Building {
            id,
            building,
            qr_path,
            ..
        } => vec![
            text(0.0, 20.0, 100.0, FontKind::Mono, building.to_uppercase()),
            text(70.0, 10.0, 30.0, FontKind::Mono, id),
            image(117.0, 35.0, 60.0, 60.0, qr_path),
        ],
        LabelRecord::Room {
            id, room, qr_path, ..
        } => vec![
            text(0.0, 55.0, 30.0, FontKind::Mono, room.to_uppercase()),
            text(-2.0, 10.0, 24.0, FontKind::Mono, id),
            image(117.0, 35.0, 60.0, 60.0, qr_path),
        ],
    }
}

/// Artwork for the 48-per-page layout (45.7 x 21.2 mm cells).
pub fn label_48(record: &LabelRecord, _width: f32, _height: f32, owner_line: &str) -> Vec<DrawPrimitive> {
    match record {
        LabelRecord::Boxed { id, qr_path, .. } => vec![
            text(30.0, 50.0, 8.0, FontKind::Sans, "Property of"),
            text(30.0, 40.0, 8.0, FontKind::Sans, owner_line),
            text(-2.0, 5.0, 20.0, FontKind::Mono, id),
            image(80.0, 20.0, 40.0, 40.0, qr_path),
        ],
        LabelRecord::Building {
            id,
            building,
            qr_path,
            ..
        } => vec![
            text(0.0, 20.0, 60.0, FontKind::Mono, building.to_uppercase()),
            text(-2.0, 5.0, 20.0, FontKind::Mono, id),
            image(80.0, 20.0, 40.0, 40.0, qr_path),
        ],
        LabelRecord::Room {
            id, room, qr_path, ..
        } => vec![
            text(0.0, 35.0, 22.0, FontKind::Mono, room.to_uppercase()),
            text(-2.0, 5.0, 18.0, FontKind::Mono, id),
            image(92.0, 0.0, 35.0, 35.0, qr_path),
        ],
    }
}
