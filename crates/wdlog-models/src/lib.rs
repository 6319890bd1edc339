//! Shared data models for the weapon-detection log client.
//!
//! This crate provides Serde-serializable types for:
//! - Raw per-frame detection records as emitted by the processing backend
//! - Compacted detection events and their display labels
//! - The detection-log container fetched per processed video
//! - Catalog helpers (processing-timestamp extraction from filenames)

pub mod catalog;
pub mod event;
pub mod frame;
pub mod log;

// Re-export common types
pub use catalog::{processed_at_from_filename, CatalogError};
pub use event::{DetectionEvent, DetectionLabel};
pub use frame::FrameRecord;
pub use log::DetectionLog;
