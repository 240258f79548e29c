use crate::data::ImageFormatKind;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use uuid::Uuid;

/// One written (or attempted) output file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputReport {
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
    /// False when the write failed and the save policy allowed continuing
    pub saved: bool,
}

/// Summary of a single pipeline run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineReport {
    pub run_id: Uuid,
    pub name: String,
    pub format: ImageFormatKind,
    pub source_size: (u32, u32),
    pub grayscale: OutputReport,
    pub thumbnail: OutputReport,
}

impl PipelineReport {
    pub fn all_saved(&self) -> bool {
        self.grayscale.saved && self.thumbnail.saved
    }

    pub fn outputs(&self) -> [&OutputReport; 2] {
        [&self.grayscale, &self.thumbnail]
    }
}
