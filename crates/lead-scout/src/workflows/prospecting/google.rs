use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use tokio::runtime::Runtime;

use super::domain::{AnchorPoint, BusinessStatus, EnrichedCandidate, RawCandidate};
use super::gateway::{GatewayError, PlacesGateway, SearchPage, SearchRequest};
use crate::config::{HttpConfig, PlacesCredentials};

const GEOCODE_URL: &str = "https://maps.googleapis.com/maps/api/geocode/json";
const PLACES_TEXT_SEARCH_URL: &str = "https://maps.googleapis.com/maps/api/place/textsearch/json";
const PLACES_DETAILS_URL: &str = "https://maps.googleapis.com/maps/api/place/details/json";

// Basic + Contact + Atmosphere field groups; each group is billed separately.
const PLACE_DETAIL_FIELDS: &str = "name,place_id,formatted_address,formatted_phone_number,\
website,rating,user_ratings_total,business_status,types,url";

const GEOCODE_TIMEOUT: Duration = Duration::from_secs(10);
const DETAILS_TIMEOUT: Duration = Duration::from_secs(10);

/// Google Geocoding + Places client exposing a synchronous gateway over an
/// async `reqwest` client.
pub struct GooglePlacesClient {
    http: reqwest::Client,
    runtime: Runtime,
    api_key: String,
    search_timeout: Duration,
}

impl GooglePlacesClient {
    pub fn new(credentials: &PlacesCredentials, http: &HttpConfig) -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder()
            .timeout(http.timeout)
            .build()
            .map_err(|err| GatewayError::Transport(err.to_string()))?;
        let runtime = Runtime::new().map_err(|err| GatewayError::Transport(err.to_string()))?;

        Ok(Self {
            http: client,
            runtime,
            api_key: credentials.api_key().to_string(),
            search_timeout: http.timeout,
        })
    }

    fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        params: &[(&str, String)],
        timeout: Duration,
    ) -> Result<T, GatewayError> {
        self.runtime.block_on(async {
            let response = self
                .http
                .get(url)
                .query(params)
                .timeout(timeout)
                .send()
                .await
                .map_err(|err| GatewayError::Transport(err.to_string()))?
                .error_for_status()
                .map_err(|err| GatewayError::Transport(err.to_string()))?;

            response
                .json::<T>()
                .await
                .map_err(|err| GatewayError::Decode(err.to_string()))
        })
    }
}

impl std::fmt::Debug for GooglePlacesClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GooglePlacesClient").finish_non_exhaustive()
    }
}

impl PlacesGateway for GooglePlacesClient {
    fn geocode(&self, postal_code: &str) -> Result<AnchorPoint, GatewayError> {
        let params = [
            ("address", postal_code.to_string()),
            ("key", self.api_key.clone()),
        ];
        let envelope: GeocodeEnvelope = self.get_json(GEOCODE_URL, &params, GEOCODE_TIMEOUT)?;
        envelope.into_anchor()
    }

    fn text_search(&self, request: &SearchRequest) -> Result<SearchPage, GatewayError> {
        let params = match request {
            SearchRequest::Initial {
                query,
                anchor,
                radius_meters,
            } => vec![
                ("query", query.clone()),
                ("location", anchor.as_location_param()),
                ("radius", radius_meters.to_string()),
                ("type", "establishment".to_string()),
                ("key", self.api_key.clone()),
            ],
            SearchRequest::Continuation { page_token } => vec![
                ("pagetoken", page_token.clone()),
                ("key", self.api_key.clone()),
            ],
        };
        let envelope: SearchEnvelope =
            self.get_json(PLACES_TEXT_SEARCH_URL, &params, self.search_timeout)?;
        envelope.into_page()
    }

    fn place_details(&self, place_id: &str) -> Result<EnrichedCandidate, GatewayError> {
        let params = [
            ("place_id", place_id.to_string()),
            ("fields", PLACE_DETAIL_FIELDS.to_string()),
            ("key", self.api_key.clone()),
        ];
        let envelope: DetailsEnvelope =
            self.get_json(PLACES_DETAILS_URL, &params, DETAILS_TIMEOUT)?;
        envelope.into_candidate(place_id)
    }
}

#[derive(Debug, Deserialize)]
struct GeocodeEnvelope {
    status: String,
    #[serde(default)]
    results: Vec<GeocodeResult>,
}

#[derive(Debug, Deserialize)]
struct GeocodeResult {
    geometry: Geometry,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    location: LatLng,
}

#[derive(Debug, Deserialize)]
struct LatLng {
    lat: f64,
    lng: f64,
}

impl GeocodeEnvelope {
    fn into_anchor(self) -> Result<AnchorPoint, GatewayError> {
        if self.status != "OK" {
            return Err(GatewayError::Status {
                status: self.status,
            });
        }
        let location = self
            .results
            .into_iter()
            .next()
            .map(|result| result.geometry.location)
            .ok_or_else(|| GatewayError::Status {
                status: "OK without results".to_string(),
            })?;

        Ok(AnchorPoint {
            latitude: location.lat,
            longitude: location.lng,
        })
    }
}

#[derive(Debug, Deserialize)]
struct SearchEnvelope {
    status: String,
    #[serde(default)]
    results: Vec<SearchResult>,
    #[serde(default)]
    next_page_token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SearchResult {
    #[serde(default)]
    place_id: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    formatted_address: Option<String>,
}

impl SearchEnvelope {
    fn into_page(self) -> Result<SearchPage, GatewayError> {
        match self.status.as_str() {
            "OK" => {}
            "ZERO_RESULTS" => return Ok(SearchPage::default()),
            _ => {
                return Err(GatewayError::Status {
                    status: self.status,
                })
            }
        }

        let candidates = self
            .results
            .into_iter()
            .filter_map(|result| {
                let place_id = result.place_id.filter(|id| !id.trim().is_empty())?;
                Some(RawCandidate {
                    place_id,
                    name: result.name,
                    address: result.formatted_address,
                })
            })
            .collect();

        Ok(SearchPage {
            candidates,
            next_page_token: self.next_page_token.filter(|token| !token.is_empty()),
        })
    }
}

#[derive(Debug, Deserialize)]
struct DetailsEnvelope {
    status: String,
    #[serde(default)]
    result: Option<PlaceDetails>,
}

#[derive(Debug, Deserialize)]
struct PlaceDetails {
    #[serde(default)]
    place_id: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    formatted_address: Option<String>,
    #[serde(default)]
    formatted_phone_number: Option<String>,
    #[serde(default)]
    website: Option<String>,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    rating: Option<f64>,
    #[serde(default)]
    user_ratings_total: Option<u32>,
    #[serde(default)]
    business_status: Option<String>,
}

impl DetailsEnvelope {
    fn into_candidate(self, requested_id: &str) -> Result<EnrichedCandidate, GatewayError> {
        if self.status != "OK" {
            return Err(GatewayError::Status {
                status: self.status,
            });
        }
        let details = self.result.ok_or_else(|| {
            GatewayError::Decode("details response missing result".to_string())
        })?;

        Ok(EnrichedCandidate {
            place_id: details
                .place_id
                .unwrap_or_else(|| requested_id.to_string()),
            name: details.name.unwrap_or_default(),
            formatted_address: details.formatted_address.unwrap_or_default(),
            phone: details.formatted_phone_number,
            website: details.website,
            maps_url: details.url,
            rating: details.rating,
            review_count: details.user_ratings_total.unwrap_or(0),
            business_status: details
                .business_status
                .as_deref()
                .map(BusinessStatus::parse),
        })
    }
}
