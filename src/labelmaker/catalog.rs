use crate::error::{LabelError, Result};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// One (building, room) pair from the catalog file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomEntry {
    pub building: String,
    pub room: String,
}

/// The flattened room catalog. The source file is a JSON object
/// mapping building name to an ordered list of room names; flattening
/// preserves building order as read and room order within a building.
/// Duplicate rooms in the file propagate as duplicate entries.
#[derive(Debug, Clone)]
pub struct RoomCatalog {
    entries: Vec<RoomEntry>,
}

impl RoomCatalog {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            LabelError::Catalog(format!("{}: {}", path.display(), e))
        })?;

        let parsed: Value = serde_json::from_str(&content).map_err(|e| {
            LabelError::Catalog(format!("{}: {}", path.display(), e))
        })?;

        let map = parsed.as_object().ok_or_else(|| {
            LabelError::Catalog(format!(
                "{}: expected an object mapping building to room list",
                path.display()
            ))
        })?;

        let mut entries = Vec::new();
        for (building, rooms) in map {
            let rooms = rooms.as_array().ok_or_else(|| {
                LabelError::Catalog(format!(
                    "{}: rooms for building {:?} must be a list",
                    path.display(),
                    building
                ))
            })?;
            for room in rooms {
                let room = room.as_str().ok_or_else(|| {
                    LabelError::Catalog(format!(
                        "{}: room names in building {:?} must be strings",
                        path.display(),
                        building
                    ))
                })?;
                entries.push(RoomEntry {
                    building: building.clone(),
                    room: room.to_string(),
                });
            }
        }

        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[RoomEntry] {
        &self.entries
    }

    pub fn total(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn write_catalog(content: &str) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempdir().unwrap();
        let path = dir.path().join("rooms.json");
        fs::write(&path, content).unwrap();
        (dir, path)
    }

    #[test]
    fn test_load_preserves_file_order() {
        let (_dir, path) = write_catalog(
            r#"{"U": ["U.1", "U.2"], "K": ["K.1.105"], "AW": ["AW.120", "AW.121"]}"#,
        );
        let catalog = RoomCatalog::load(&path).unwrap();

        let flat: Vec<(&str, &str)> = catalog
            .entries()
            .iter()
            .map(|e| (e.building.as_str(), e.room.as_str()))
            .collect();
        assert_eq!(
            flat,
            vec![
                ("U", "U.1"),
                ("U", "U.2"),
                ("K", "K.1.105"),
                ("AW", "AW.120"),
                ("AW", "AW.121"),
            ]
        );
        assert_eq!(catalog.total(), 5);
    }

    #[test]
    fn test_duplicate_rooms_propagate() {
        let (_dir, path) = write_catalog(r#"{"K": ["K.1", "K.1"]}"#);
        let catalog = RoomCatalog::load(&path).unwrap();
        assert_eq!(catalog.total(), 2);
        assert_eq!(catalog.entries()[0], catalog.entries()[1]);
    }

    #[test]
    fn test_missing_file_is_fatal() {
        let dir = tempdir().unwrap();
        let err = RoomCatalog::load(dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, LabelError::Catalog(_)));
    }

    #[test]
    fn test_malformed_catalog_is_fatal() {
        let (_dir, path) = write_catalog(r#"["not", "a", "map"]"#);
        assert!(RoomCatalog::load(&path).is_err());

        let (_dir, path) = write_catalog(r#"{"K": "not-a-list"}"#);
        assert!(RoomCatalog::load(&path).is_err());

        let (_dir, path) = write_catalog(r#"{"K": [1, 2]}"#);
        assert!(RoomCatalog::load(&path).is_err());
    }
}
