use crate::error::{LabelError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const DEFAULT_BASE_URL: &str = "https://inventory.example.org/link";
const DEFAULT_QR_DIR: &str = "out/qr-codes";
const DEFAULT_OUTPUT_DIR: &str = "out/labels";
const DEFAULT_CATALOG_PATH: &str = "data/rooms.json";
const DEFAULT_OWNER_LINE: &str = "Property of the event";

/// Tool configuration, read from an optional JSON file. Every field
/// has a default so the tool runs with no config at all.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LabelConfig {
    /// Base URL the QR payload links point at; the item number is
    /// appended as the final path segment.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Directory QR PNGs are written to (one file per item number).
    #[serde(default = "default_qr_dir")]
    pub qr_dir: String,

    /// Directory the generated label-sheet PDFs are written to.
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    /// Path of the room catalog file (building -> ordered room list).
    #[serde(default = "default_catalog_path")]
    pub catalog_path: String,

    /// Ownership caption printed on boxed labels.
    #[serde(default = "default_owner_line")]
    pub owner_line: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_qr_dir() -> String {
    DEFAULT_QR_DIR.to_string()
}

fn default_output_dir() -> String {
    DEFAULT_OUTPUT_DIR.to_string()
}

fn default_catalog_path() -> String {
    DEFAULT_CATALOG_PATH.to_string()
}

fn default_owner_line() -> String {
    DEFAULT_OWNER_LINE.to_string()
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            qr_dir: default_qr_dir(),
            output_dir: default_output_dir(),
            catalog_path: default_catalog_path(),
            owner_line: default_owner_line(),
        }
    }
}

impl LabelConfig {
    /// Load config from the given file, or return defaults if the file
    /// does not exist.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(LabelError::Io)?;
        let config: LabelConfig =
            serde_json::from_str(&content).map_err(LabelError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given file, creating parent directories.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(LabelError::Io)?;
            }
        }

        let content = serde_json::to_string_pretty(self).map_err(LabelError::Serialization)?;
        fs::write(path, content).map_err(LabelError::Io)?;
        Ok(())
    }
}
