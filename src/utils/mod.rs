//! Utility modules for the bandstand application.
//!
//! Common helpers used throughout the crate. Currently this is date/time
//! handling: the loose timestamp parser, the show start-time wire format,
//! and relative date phrasing for listings.
//!
//! All utilities here are pure functions so they stay trivial to test.

pub mod datetime;
