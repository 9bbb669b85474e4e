//! Core types for phstatus.
//!
//! This crate turns a flat list of all-day calendar entries into merged
//! holiday spans and decides which presence status to publish:
//! - `event` for the raw and merged value types
//! - `summary`, `group` and `merge` for the normalization pipeline
//! - `lookup` and `status` for answering "is today (or soon) a holiday?"
//! - `provider` for the collaborator traits and the check orchestration

pub mod date_range;
pub mod error;
pub mod event;
pub mod group;
pub mod lookup;
pub mod merge;
pub mod provider;
pub mod status;
pub mod summary;

pub use error::{PhStatusError, PhStatusResult};
pub use event::{MergedHoliday, RawEvent};
