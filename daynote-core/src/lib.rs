//! Core types for daynote.
//!
//! - `grid` and `cursor` for month display and navigation
//! - `holiday` for fixed and date-specific holiday lookup
//! - `store` for per-day notes and events
//! - `state` and `session` for the calendar state container and its persistence

pub mod cursor;
pub mod date_key;
pub mod daynote_config;
pub mod error;
pub mod grid;
pub mod holiday;
pub mod session;
pub mod state;
pub mod storage;
pub mod store;

pub use date_key::DateKey;
pub use error::{DayNoteError, DayNoteResult};
