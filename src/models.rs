use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// An RFP document handed to the intake flow. Only the file handle and its
/// basic attributes; no bytes are read until a real extraction backend exists.
#[derive(Debug, Clone)]
pub struct RfpDocument {
    pub name: String,
    pub size_bytes: u64,
    pub path: Option<PathBuf>,
}

impl RfpDocument {
    /// Build a document from a file on disk, reading its size from metadata.
    pub fn from_path<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .map(str::to_owned)
            .ok_or_else(|| anyhow::anyhow!("Document path has no file name: {:?}", path))?;
        let size_bytes = std::fs::metadata(path)?.len();
        Ok(Self {
            name,
            size_bytes,
            path: Some(path.to_path_buf()),
        })
    }

    /// Build a document from a name and size only; mock services never touch
    /// the bytes.
    pub fn detached(name: impl Into<String>, size_bytes: u64) -> Self {
        Self {
            name: name.into(),
            size_bytes,
            path: None,
        }
    }

    /// Lowercased extension including the leading dot, e.g. ".pdf".
    pub fn extension(&self) -> Option<String> {
        let (stem, ext) = self.name.rsplit_once('.')?;
        if stem.is_empty() {
            return None;
        }
        Some(format!(".{}", ext.to_lowercase()))
    }

    pub fn size_mb(&self) -> f64 {
        self.size_bytes as f64 / (1024.0 * 1024.0)
    }
}

/// Structured result of analyzing an RFP document. Held in memory for the
/// current session only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RfpAnalysis {
    pub requirements: Vec<String>,
    pub deadline: Option<String>,
    pub funding_amount: Option<String>,
    pub focus_areas: Vec<String>,
    pub key_sections: Vec<String>,
}
