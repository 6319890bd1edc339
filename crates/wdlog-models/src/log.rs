//! Detection-log container.
//!
//! One `DetectionLog` is fetched per processed video, either inline in the
//! processing response or from the catalog's per-video logs endpoint. The
//! wire format is a JSON array of positional rows (see [`FrameRecord`]).

use serde::{Deserialize, Serialize};

use crate::frame::FrameRecord;

/// The raw detection sequence for one processed video.
///
/// Immutable for the lifetime of a result view; recompact whenever a new
/// log is supplied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DetectionLog {
    records: Vec<FrameRecord>,
}

impl DetectionLog {
    /// Create a log from raw records.
    pub fn new(records: Vec<FrameRecord>) -> Self {
        Self { records }
    }

    /// Parse a log from the backend's JSON representation.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// The raw records in arrival order.
    pub fn records(&self) -> &[FrameRecord] {
        &self.records
    }

    /// Number of raw records, including zero-count padding rows.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of frames with at least one detection.
    ///
    /// This is the "Detections" badge shown next to each catalog entry.
    pub fn detection_count(&self) -> usize {
        self.records.iter().filter(|r| r.has_detection()).count()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FrameRecord> {
        self.records.iter()
    }
}

impl FromIterator<FrameRecord> for DetectionLog {
    fn from_iter<I: IntoIterator<Item = FrameRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a DetectionLog {
    type Item = &'a FrameRecord;
    type IntoIter = std::slice::Iter<'a, FrameRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
