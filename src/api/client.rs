//! Booking service client implementation.

use std::time::Duration;

use log::debug;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::{ApiError, ResourceKind};
use crate::models::{
    Area, Artist, ArtistForm, ArtistSummary, NewShow, SearchResults, ShowListing, Venue, VenueForm,
};

/// Default request timeout in seconds
const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// Asynchronous client for the booking service.
///
/// One shared [`reqwest::Client`] backs all calls; the client is cheap to
/// clone and safe to share across tasks. Calls that decode a response body
/// treat non-success HTTP statuses as [`ApiError::Rejected`]. The delete
/// call is the exception: completion of the request counts as success no
/// matter what the server answered (see [`BookingClient::delete_resource`]).
#[derive(Clone)]
pub struct BookingClient {
    base_url: String,
    http: reqwest::Client,
}

impl BookingClient {
    /// Create a client for the service at `base_url` with the default timeout.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT_SECONDS)
    }

    /// Create a client with an explicit request timeout.
    ///
    /// A trailing slash on `base_url` is tolerated; resource paths always
    /// start with one.
    pub fn with_timeout(base_url: impl Into<String>, timeout_seconds: u64) -> Result<Self, ApiError> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_seconds))
            .build()?;
        Ok(Self { base_url, http })
    }

    /// The configured service endpoint, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let resp = self.http.get(self.url(path)).send().await?;
        if !resp.status().is_success() {
            return Err(ApiError::Rejected {
                path: path.to_string(),
                status: resp.status(),
            });
        }
        Ok(resp.json().await?)
    }

    async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let resp = self.http.post(self.url(path)).json(body).send().await?;
        if !resp.status().is_success() {
            return Err(ApiError::Rejected {
                path: path.to_string(),
                status: resp.status(),
            });
        }
        Ok(resp.json().await?)
    }

    async fn post_submission<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(), ApiError> {
        let resp = self.http.post(self.url(path)).json(body).send().await?;
        if !resp.status().is_success() {
            return Err(ApiError::Rejected {
                path: path.to_string(),
                status: resp.status(),
            });
        }
        Ok(())
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    // Venues

    /// List all venues, grouped by city/state area.
    pub async fn venues(&self) -> Result<Vec<Area>, ApiError> {
        self.get_json("/venues").await
    }

    /// Fetch one venue with its past and upcoming shows.
    pub async fn venue(&self, venue_id: i64) -> Result<Venue, ApiError> {
        self.get_json(&format!("/venues/{}", venue_id)).await
    }

    /// Case-insensitive name search over venues.
    pub async fn search_venues(&self, term: &str) -> Result<SearchResults, ApiError> {
        self.post_json("/venues/search", &serde_json::json!({ "search_term": term }))
            .await
    }

    /// List a new venue.
    pub async fn create_venue(&self, form: &VenueForm) -> Result<(), ApiError> {
        self.post_submission("/venues/create", form).await
    }

    /// Update an existing venue with a full form submission.
    pub async fn update_venue(&self, venue_id: i64, form: &VenueForm) -> Result<(), ApiError> {
        self.post_submission(&format!("/venues/{}/edit", venue_id), form)
            .await
    }

    // Artists

    /// List all artists.
    pub async fn artists(&self) -> Result<Vec<ArtistSummary>, ApiError> {
        self.get_json("/artists").await
    }

    /// Fetch one artist with their past and upcoming shows.
    pub async fn artist(&self, artist_id: i64) -> Result<Artist, ApiError> {
        self.get_json(&format!("/artists/{}", artist_id)).await
    }

    /// Case-insensitive name search over artists.
    pub async fn search_artists(&self, term: &str) -> Result<SearchResults, ApiError> {
        self.post_json("/artists/search", &serde_json::json!({ "search_term": term }))
            .await
    }

    /// List a new artist.
    pub async fn create_artist(&self, form: &ArtistForm) -> Result<(), ApiError> {
        self.post_submission("/artists/create", form).await
    }

    /// Update an existing artist with a full form submission.
    pub async fn update_artist(&self, artist_id: i64, form: &ArtistForm) -> Result<(), ApiError> {
        self.post_submission(&format!("/artists/{}/edit", artist_id), form)
            .await
    }

    // Shows

    /// List all shows with venue and artist names joined in.
    pub async fn shows(&self) -> Result<Vec<ShowListing>, ApiError> {
        self.get_json("/shows").await
    }

    /// Book a show.
    pub async fn create_show(&self, show: &NewShow) -> Result<(), ApiError> {
        self.post_submission("/shows/create", show).await
    }

    // Deletion

    /// Issue one DELETE for a resource instance.
    ///
    /// The URL is the collection path with the id appended verbatim. Any
    /// completed request counts as success - the server's verdict on the
    /// deletion is not inspected, so a 404 or 500 still returns `Ok`. Only
    /// a transport-level failure (the request could not be sent or
    /// completed) is an error.
    pub async fn delete_resource(&self, kind: &ResourceKind, id: &str) -> Result<(), ApiError> {
        let url = format!("{}{}{}", self.base_url, kind.collection_path, id);
        debug!("DELETE {}", url);
        self.http.delete(&url).send().await?;
        Ok(())
    }
}
