//! Detection-log compaction.
//!
//! A raw log annotates (a sampling of) every frame; most rows are either
//! silent or repeat the previous frame's counts. Compaction reduces the log
//! to one event per run: a maximal contiguous stretch of frames with
//! unchanged, non-zero counts and no frame-number gap greater than 1.

use tracing::debug;
use wdlog_models::{DetectionEvent, FrameRecord};

/// Compact a raw detection log into its ordered list of events.
///
/// Silent rows (both counts zero) are dropped outright; they neither start
/// nor break a run beyond removing their frame from consideration. Of the
/// remaining rows, one event is emitted per run start: the first row, and
/// every row whose frame number jumps by more than 1 or whose counts differ
/// from the previous surviving row.
///
/// Input is expected in non-decreasing frame order and is not re-sorted.
/// Pure and O(n); an empty log yields an empty event list.
pub fn compact(records: &[FrameRecord]) -> Vec<DetectionEvent> {
    let mut events = Vec::new();
    let mut prev: Option<&FrameRecord> = None;

    for record in records {
        if !record.has_detection() {
            continue;
        }

        let starts_run = match prev {
            None => true,
            Some(p) => {
                record.frame.saturating_sub(p.frame) > 1
                    || record.weapons != p.weapons
                    || record.knives != p.knives
            }
        };

        if starts_run {
            if let Some(event) = DetectionEvent::from_record(record) {
                events.push(event);
            }
        }
        prev = Some(record);
    }

    debug!(
        raw = records.len(),
        events = events.len(),
        "compacted detection log"
    );
    events
}
