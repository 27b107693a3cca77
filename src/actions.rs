//! Delete-and-redirect action handlers.
//!
//! These are the fire-and-forget actions a listing page wires to its delete
//! buttons: remove one resource, then move to the collection listing. The
//! two public entry points share one parameterized implementation; venues
//! and artists differ only in their [`ResourceKind`] descriptor.

use log::error;

use crate::api::{BookingClient, ResourceKind, ARTISTS, VENUES};
use crate::navigator::Navigator;

/// Delete one resource and move the navigator to its collection listing.
///
/// The request completing at all counts as success, whatever the server
/// answered, and navigation replaces the current location. A transport
/// failure leaves the location untouched and is logged rather than
/// surfaced; there is no retry.
pub async fn delete_and_redirect(
    client: &BookingClient,
    navigator: &Navigator,
    kind: &ResourceKind,
    id: &str,
) {
    match client.delete_resource(kind, id).await {
        Ok(()) => navigator.replace(kind.listing_path),
        Err(err) => error!("delete {}{} failed: {}", kind.collection_path, id, err),
    }
}

/// Delete a venue and land on the venues listing.
pub async fn venue_delete(client: &BookingClient, navigator: &Navigator, venue_id: &str) {
    delete_and_redirect(client, navigator, &VENUES, venue_id).await;
}

/// Delete an artist and land on the artists listing.
pub async fn artist_delete(client: &BookingClient, navigator: &Navigator, artist_id: &str) {
    delete_and_redirect(client, navigator, &ARTISTS, artist_id).await;
}
