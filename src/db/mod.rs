//! # Mapping Database Module
//!
//! Parsing and indexing of SDL-style `gamecontrollerdb.txt` mapping lines.
//!
//! This module handles:
//! - Line-by-line parsing of mapping definitions (permissive, never fatal)
//! - Device identity decoding from the embedded GUID hex segments
//! - A keyed mapping table with file and in-memory load entry points
//! - A thread-safe shared handle for concurrent lookups

pub mod parser;
pub mod record;
pub mod table;

pub use record::{AxisMapping, AxisSlot, ButtonSlot, DeviceIdentity, MappingRecord};
pub use table::{MappingDatabase, SharedMappingDatabase};
