//! Bandstand - a client for a musical venue and artist booking service
//!
//! This library talks to a booking service that manages venues, artists,
//! and the shows that connect them. It covers listing, detail, and search
//! calls, form submissions for new records, and the delete-and-redirect
//! actions a listing page wires to its delete buttons.
//!
//! # Modules
//!
//! The library is organized into several key modules:
//!
//! * [`api`] - Booking service HTTP client and error types
//! * [`actions`] - Delete-and-redirect action handlers
//! * [`config`] - Application configuration management
//! * [`models`] - Wire models for venues, artists, and shows
//! * [`navigator`] - Current-location tracking with replace semantics
//! * [`utils`] - Date/time parsing and formatting helpers

/// Delete-and-redirect action handlers
pub mod actions;

/// Booking service HTTP client
pub mod api;

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Logging setup for debugging and error tracking
pub mod logger;

/// Wire models for the booking domain
pub mod models;

/// Current-location tracking for action handlers
pub mod navigator;

/// Utility functions for date/time handling
pub mod utils;

// Re-export the main entry points for convenient access
pub use api::BookingClient;
pub use navigator::Navigator;
