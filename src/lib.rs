//! # Gamepad Remap Library
//!
//! Resolve community gamepad mapping databases and remap raw controller
//! state to a canonical logical layout.
//!
//! This library provides the core functionality for consuming SDL-style
//! `gamecontrollerdb.txt` mapping lines: parsing them into per-device
//! mapping records, indexing the records by vendor/product identity, and
//! applying a resolved record to a raw button/axis snapshot.

pub mod config;
pub mod db;
pub mod error;
pub mod remap;
pub mod state;
