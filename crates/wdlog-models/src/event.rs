//! Compacted detection events and their display labels.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::frame::FrameRecord;

/// What was detected at the start of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum DetectionLabel {
    #[serde(rename = "weapon")]
    Weapon,
    #[serde(rename = "knife")]
    Knife,
    #[serde(rename = "weapon and knife")]
    WeaponAndKnife,
}

impl DetectionLabel {
    /// Derive a label from detection counts.
    ///
    /// Returns `None` when both counts are zero; such frames never produce
    /// an event.
    pub fn from_counts(weapons: u32, knives: u32) -> Option<Self> {
        match (weapons > 0, knives > 0) {
            (true, true) => Some(DetectionLabel::WeaponAndKnife),
            (true, false) => Some(DetectionLabel::Weapon),
            (false, true) => Some(DetectionLabel::Knife),
            (false, false) => None,
        }
    }

    /// Returns the label as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            DetectionLabel::Weapon => "weapon",
            DetectionLabel::Knife => "knife",
            DetectionLabel::WeaponAndKnife => "weapon and knife",
        }
    }

    /// User-facing log message for this label.
    pub fn message(&self) -> &'static str {
        match self {
            DetectionLabel::Weapon => "Detected weapon.",
            DetectionLabel::Knife => "Detected knife.",
            DetectionLabel::WeaponAndKnife => "Detected weapon and knife.",
        }
    }
}

impl fmt::Display for DetectionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A user-facing detection-log entry.
///
/// Represents the first frame of a contiguous run of identical, non-zero
/// detections. Carries the raw counts alongside the derived label so the UI
/// can format either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct DetectionEvent {
    /// First frame of the run
    pub frame: u64,
    /// Weapons detected across the run
    pub weapons: u32,
    /// Knives detected across the run
    pub knives: u32,
    /// Display label derived from the counts
    pub label: DetectionLabel,
}

impl DetectionEvent {
    /// Build an event from a raw record, or `None` if the record carries
    /// no detection.
    pub fn from_record(record: &FrameRecord) -> Option<Self> {
        DetectionLabel::from_counts(record.weapons, record.knives).map(|label| Self {
            frame: record.frame,
            weapons: record.weapons,
            knives: record.knives,
            label,
        })
    }

    /// Playback position of this event's frame at the given frame rate.
    pub fn time_secs(&self, frame_rate: u32) -> f64 {
        self.frame as f64 / frame_rate as f64
    }
}
