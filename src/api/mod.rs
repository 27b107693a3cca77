//! HTTP client for the booking service.
//!
//! This module defines the client itself, the error type at the client seam,
//! and the [`ResourceKind`] descriptors that parameterize the two
//! delete-and-redirect actions over venues and artists.

pub mod client;

pub use client::BookingClient;

/// Errors from booking service calls.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("server rejected {path}: {status}")]
    Rejected {
        path: String,
        status: reqwest::StatusCode,
    },
}

/// Descriptor for a deletable resource collection.
///
/// `collection_path` is the prefix an instance id is appended to (no URL
/// encoding is applied; ids are assumed already safe). `listing_path` is
/// where the navigator lands after a deletion attempt completes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResourceKind {
    pub collection_path: &'static str,
    pub listing_path: &'static str,
}

/// The venues collection
pub const VENUES: ResourceKind = ResourceKind {
    collection_path: "/venues/",
    listing_path: "/venues",
};

/// The artists collection
pub const ARTISTS: ResourceKind = ResourceKind {
    collection_path: "/artists/",
    listing_path: "/artists",
};
