//! Constants used throughout the application
//!
//! This module centralizes magic strings, CLI text, and other constant
//! values to improve maintainability and consistency.

/// Fallback service endpoint when no configuration provides one
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

/// Environment variable overriding the configured service endpoint
pub const BASE_URL_ENV: &str = "BANDSTAND_BASE_URL";

/// Default log file when logging is enabled
pub const DEFAULT_LOG_FILE: &str = "bandstand.log";

// Request timeout bounds (seconds)
/// Minimum request timeout
pub const TIMEOUT_MIN_SECONDS: u64 = 1;
/// Maximum request timeout
pub const TIMEOUT_MAX_SECONDS: u64 = 300;

// CLI Messages
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";
pub const MSG_VENUE_DELETED: &str = "✅ Venue deleted";
pub const MSG_ARTIST_DELETED: &str = "✅ Artist deleted";
pub const ERROR_VENUE_DELETE_FAILED: &str = "❌ Failed to delete venue (see log)";
pub const ERROR_ARTIST_DELETE_FAILED: &str = "❌ Failed to delete artist (see log)";
