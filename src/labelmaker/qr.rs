use crate::error::{LabelError, Result};
use image::Luma;
use qrcode::QrCode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// The record encoded into each item's QR symbol. Optional fields
/// serialize as `null` so every payload carries the same keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QrPayload {
    pub item: u32,
    pub link: String,
    pub destination: Option<String>,
    pub storage: Option<String>,
    #[serde(rename = "box")]
    pub box_number: Option<u32>,
}

/// Writes one QR PNG per item number into a fixed directory. The file
/// name is the item number, so regenerating an item overwrites its
/// previous image.
pub struct QrGenerator {
    base_url: String,
    qr_dir: PathBuf,
}

impl QrGenerator {
    pub fn new(base_url: impl Into<String>, qr_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_url: base_url.into(),
            qr_dir: qr_dir.into(),
        }
    }

    pub fn qr_dir(&self) -> &Path {
        &self.qr_dir
    }

    /// Path the image for `item` is (or will be) written to.
    pub fn image_path(&self, item: u32) -> PathBuf {
        self.qr_dir.join(format!("{}.png", item))
    }

    /// Encode and write the QR image for one item. Returns the payload
    /// that was encoded, for caller inspection.
    pub fn generate(
        &self,
        item: u32,
        destination: Option<&str>,
        storage: Option<&str>,
        box_number: Option<u32>,
    ) -> Result<QrPayload> {
        let payload = QrPayload {
            item,
            link: format!("{}/{}", self.base_url, item),
            destination: destination.map(String::from),
            storage: storage.map(String::from),
            box_number,
        };

        fs::create_dir_all(&self.qr_dir)?;

        let encoded = serde_json::to_string(&payload)?;
        let code = QrCode::new(encoded.as_bytes())
            .map_err(|e| LabelError::Qr(e.to_string()))?;
        let img = code.render::<Luma<u8>>().build();
        img.save(self.image_path(item))
            .map_err(|e| LabelError::Image(e.to_string()))?;

        Ok(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_payload_fields_and_round_trip() {
        let dir = tempdir().unwrap();
        let generator = QrGenerator::new("https://inventory.test/link", dir.path().join("qr"));

        let payload = generator.generate(42, None, None, Some(3)).unwrap();
        assert_eq!(payload.item, 42);
        assert_eq!(payload.link, "https://inventory.test/link/42");
        assert_eq!(payload.box_number, Some(3));
        assert_eq!(payload.destination, None);
        assert_eq!(payload.storage, None);

        let encoded = serde_json::to_string(&payload).unwrap();
        let decoded: QrPayload = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, payload);
    }

    #[test]
    fn test_optional_fields_serialize_as_null() {
        let payload = QrPayload {
            item: 1,
            link: "x/1".to_string(),
            destination: None,
            storage: None,
            box_number: None,
        };
        let encoded = serde_json::to_string(&payload).unwrap();
        assert!(encoded.contains(r#""destination":null"#));
        assert!(encoded.contains(r#""storage":null"#));
        assert!(encoded.contains(r#""box":null"#));
    }

    #[test]
    fn test_creates_directory_and_writes_png() {
        let dir = tempdir().unwrap();
        let qr_dir = dir.path().join("deep").join("qr");
        let generator = QrGenerator::new("https://inventory.test/link", &qr_dir);

        generator.generate(7, Some("K"), None, None).unwrap();

        let path = qr_dir.join("7.png");
        assert!(path.exists());
        // Written file decodes as an image
        assert!(image::open(&path).is_ok());
    }

    #[test]
    fn test_regeneration_overwrites_in_place() {
        let dir = tempdir().unwrap();
        let generator = QrGenerator::new("https://inventory.test/link", dir.path());

        generator.generate(9, None, None, Some(1)).unwrap();
        let first = fs::read(generator.image_path(9)).unwrap();

        generator.generate(9, None, None, Some(2)).unwrap();
        let second = fs::read(generator.image_path(9)).unwrap();

        // Same file name, fresh content for the new payload
        assert_eq!(generator.image_path(9), dir.path().join("9.png"));
        assert_ne!(first, second);
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }
}
