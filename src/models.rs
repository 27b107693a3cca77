//! Wire models for the booking service.
//!
//! These structs mirror the JSON payloads the service exchanges: venue and
//! artist records with their show history, the grouped venue listing, search
//! results, and the submission shapes for creating or editing records.

use serde::{Deserialize, Serialize};

/// One venue row in a listing or search result.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VenueSummary {
    pub id: i64,
    pub name: String,
    pub num_upcoming_shows: i64,
}

/// Venues grouped by city and state on the listing page.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Area {
    pub city: String,
    pub state: String,
    pub venues: Vec<VenueSummary>,
}

/// A show as it appears on a venue's detail page.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VenueShow {
    pub artist_id: i64,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    /// Start time in [`crate::utils::datetime::SHOW_TIME_FORMAT`]
    pub start_time: String,
}

/// Full venue record.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Venue {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub genres: Vec<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub facebook_link: Option<String>,
    #[serde(default)]
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
    pub image_link: Option<String>,
    pub past_shows_count: i64,
    pub upcoming_shows_count: i64,
    #[serde(default)]
    pub past_shows: Vec<VenueShow>,
    #[serde(default)]
    pub upcoming_shows: Vec<VenueShow>,
}

/// One artist row in the artists listing.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ArtistSummary {
    pub id: i64,
    pub name: String,
}

/// A show as it appears on an artist's detail page.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ArtistShow {
    pub venue_id: i64,
    pub venue_name: String,
    pub venue_image_link: Option<String>,
    /// Start time in [`crate::utils::datetime::SHOW_TIME_FORMAT`]
    pub start_time: String,
}

/// Full artist record.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Artist {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub genres: Vec<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub facebook_link: Option<String>,
    #[serde(default)]
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
    pub image_link: Option<String>,
    pub past_shows_count: i64,
    pub upcoming_shows_count: i64,
    #[serde(default)]
    pub past_shows: Vec<ArtistShow>,
    #[serde(default)]
    pub upcoming_shows: Vec<ArtistShow>,
}

/// One hit in a name search, for venues and artists alike.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SearchHit {
    pub id: i64,
    pub name: String,
    pub num_upcoming_shows: i64,
}

/// Name-search response envelope.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SearchResults {
    pub count: i64,
    pub data: Vec<SearchHit>,
}

/// A show row on the shows listing page, joining venue and artist names.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ShowListing {
    pub venue_id: i64,
    pub venue_name: String,
    pub artist_id: i64,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    /// Start time in [`crate::utils::datetime::SHOW_TIME_FORMAT`]
    pub start_time: String,
}

/// Submission shape for creating or editing a venue.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct VenueForm {
    pub name: String,
    pub city: Option<String>,
    pub state: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    #[serde(default)]
    pub genres: Vec<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website: Option<String>,
    #[serde(default)]
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
}

/// Submission shape for creating or editing an artist.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ArtistForm {
    pub name: String,
    pub city: Option<String>,
    pub state: Option<String>,
    pub phone: Option<String>,
    #[serde(default)]
    pub genres: Vec<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website: Option<String>,
    #[serde(default)]
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
}

/// Submission shape for booking a show.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NewShow {
    pub venue_id: i64,
    pub artist_id: i64,
    /// Start time in [`crate::utils::datetime::SHOW_TIME_FORMAT`]
    pub start_time: String,
}
