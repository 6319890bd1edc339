//! Raw per-frame detection records.
//!
//! The processing backend reports detections as positional JSON arrays,
//! one row per sampled frame: `[frame_number, weapon_count, knife_count]`.
//! Rows may be truncated or padded with `null` for frames where a detector
//! produced no output, so deserialization is deliberately lenient.

use serde::de::{IgnoredAny, SeqAccess, Visitor};
use serde::ser::SerializeTuple;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// One sampled video frame's detection counts.
///
/// Frame numbers arrive in non-decreasing order; gaps and duplicates are
/// both legal since the backend may sample rather than annotate every frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FrameRecord {
    /// Frame number within the source video (0-based)
    pub frame: u64,
    /// Number of weapons detected in this frame
    pub weapons: u32,
    /// Number of knives detected in this frame
    pub knives: u32,
}

impl FrameRecord {
    /// Create a new frame record.
    pub fn new(frame: u64, weapons: u32, knives: u32) -> Self {
        Self {
            frame,
            weapons,
            knives,
        }
    }

    /// Whether this frame carries any detection at all.
    pub fn has_detection(&self) -> bool {
        self.weapons > 0 || self.knives > 0
    }
}

impl Serialize for FrameRecord {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut row = serializer.serialize_tuple(3)?;
        row.serialize_element(&self.frame)?;
        row.serialize_element(&self.weapons)?;
        row.serialize_element(&self.knives)?;
        row.end()
    }
}

impl<'de> Deserialize<'de> for FrameRecord {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct RowVisitor;

        impl<'de> Visitor<'de> for RowVisitor {
            type Value = FrameRecord;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a [frame, weapons, knives] array")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                // Short rows and nulls both mean "nothing detected here".
                let frame = seq.next_element::<Option<u64>>()?.flatten().unwrap_or(0);
                let weapons = seq.next_element::<Option<u32>>()?.flatten().unwrap_or(0);
                let knives = seq.next_element::<Option<u32>>()?.flatten().unwrap_or(0);

                // Older backend revisions appended extra per-class columns.
                while seq.next_element::<IgnoredAny>()?.is_some() {}

                Ok(FrameRecord {
                    frame,
                    weapons,
                    knives,
                })
            }
        }

        deserializer.deserialize_seq(RowVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_row() {
        let rec: FrameRecord = serde_json::from_str("[12, 2, 1]").unwrap();
        assert_eq!(rec, FrameRecord::new(12, 2, 1));
        assert!(rec.has_detection());
    }

    #[test]
    fn test_deserialize_empty_row_is_all_zero() {
        let rec: FrameRecord = serde_json::from_str("[]").unwrap();
        assert_eq!(rec, FrameRecord::default());
        assert!(!rec.has_detection());
    }

    #[test]
    fn test_deserialize_short_row() {
        let rec: FrameRecord = serde_json::from_str("[7]").unwrap();
        assert_eq!(rec, FrameRecord::new(7, 0, 0));
    }

    #[test]
    fn test_deserialize_null_counts() {
        let rec: FrameRecord = serde_json::from_str("[4, null, 2]").unwrap();
        assert_eq!(rec, FrameRecord::new(4, 0, 2));
    }

    #[test]
    fn test_deserialize_ignores_extra_columns() {
        let rec: FrameRecord = serde_json::from_str("[4, 1, 0, 0.87]").unwrap();
        assert_eq!(rec, FrameRecord::new(4, 1, 0));
    }

    #[test]
    fn test_serialize_as_positional_row() {
        let json = serde_json::to_string(&FrameRecord::new(3, 0, 1)).unwrap();
        assert_eq!(json, "[3,0,1]");
    }
}
