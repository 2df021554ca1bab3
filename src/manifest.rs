//! Project manifest (bible.yaml) parsing.
//!
//! The manifest names the design document to read and where derived
//! output goes. Every field is optional.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{BibleError, Result};
use crate::types::CardRecord;

/// The name of the manifest file.
pub const MANIFEST_FILENAME: &str = "bible.yaml";

/// Project manifest loaded from bible.yaml.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Manifest {
    /// The design document to parse.
    #[serde(default = "default_input")]
    pub input: PathBuf,

    /// Where the JSON export is written.
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Directory holding generated card art.
    #[serde(default = "default_images")]
    pub images: PathBuf,
}

fn default_input() -> PathBuf {
    PathBuf::from("design_bible.md")
}

fn default_output() -> PathBuf {
    PathBuf::from("dist/cards.json")
}

fn default_images() -> PathBuf {
    PathBuf::from("images")
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            input: default_input(),
            output: default_output(),
            images: default_images(),
        }
    }
}

impl Manifest {
    /// Load manifest from a bible.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| BibleError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read manifest: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Load `bible.yaml` from `dir` if present, defaults otherwise.
    pub fn discover(dir: &Path) -> Result<Self> {
        let path = dir.join(MANIFEST_FILENAME);
        if path.exists() {
            log::debug!("using manifest {}", path.display());
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse manifest from YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(content).map_err(|e| BibleError::Config {
            message: format!("Invalid manifest: {}", e),
            help: Some("Check bible.yaml syntax".to_string()),
        })
    }

    /// Serialize to YAML for `bible init`.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| BibleError::Config {
            message: format!("Failed to serialize manifest: {}", e),
            help: None,
        })
    }

    /// Where a card's image is expected to live.
    pub fn image_path(&self, card: &CardRecord) -> PathBuf {
        self.images.join(card.image_filename())
    }
}
