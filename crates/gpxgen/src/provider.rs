//! OpenRouteService client for fetching round-trip route skeletons.

use std::io::Cursor;

use serde_json::json;
use thiserror::Error;
use tracing::{debug, warn};

use telemetry::Waypoint;

/// Default directions endpoint.
const DEFAULT_BASE_URL: &str = "https://api.openrouteservice.org/v2/directions";

/// Number of via points requested for a round trip.
pub const ROUND_TRIP_VIA_POINTS: u32 = 5;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("provider returned status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("failed to parse provider GPX: {0}")]
    Gpx(String),
    #[error("provider returned no usable route points")]
    NoRoute,
}

/// Activity profile tag the routing provider plans for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RouteProfile {
    #[default]
    FootWalking,
    CyclingRoad,
}

impl RouteProfile {
    pub fn as_str(&self) -> &'static str {
        match self {
            RouteProfile::FootWalking => "foot-walking",
            RouteProfile::CyclingRoad => "cycling-road",
        }
    }

    /// Maps a request tag to a profile, falling back to foot-walking.
    pub fn from_tag(tag: Option<&str>) -> Self {
        match tag {
            None | Some("") | Some("foot-walking") => RouteProfile::FootWalking,
            Some("cycling-road") => RouteProfile::CyclingRoad,
            Some(other) => {
                warn!("unknown route type {other:?}, using foot-walking");
                RouteProfile::FootWalking
            }
        }
    }
}

/// Client for the round-trip directions API.
#[derive(Clone)]
pub struct RouteProvider {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl RouteProvider {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Sets a custom directions endpoint (e.g. a self-hosted instance).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Fetches a round trip of roughly `length_m` meters starting and ending
    /// at `start`, returning the provider's sparse waypoints in travel order.
    pub async fn fetch_round_trip(
        &self,
        start: (f64, f64),
        length_m: u32,
        profile: RouteProfile,
    ) -> Result<Vec<Waypoint>, ProviderError> {
        let (lat, lon) = start;
        let url = format!("{}/{}/gpx?gpxType=track", self.base_url, profile.as_str());
        let payload = json!({
            "coordinates": [[lon, lat]],
            "options": {
                "round_trip": {
                    "length": length_m,
                    "points": ROUND_TRIP_VIA_POINTS,
                }
            },
            "elevation": true,
            "instructions": false,
            "geometry_simplify": false,
        });

        let response = self
            .client
            .post(&url)
            .header(reqwest::header::AUTHORIZATION, &self.api_key)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(ProviderError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let waypoints = parse_route_points(&body)?;
        debug!(
            waypoints = waypoints.len(),
            profile = profile.as_str(),
            "fetched round-trip route"
        );
        Ok(waypoints)
    }
}

/// Extracts ordered route points from the provider's GPX response.
///
/// Points without an elevation are dropped with a warning rather than
/// aborting the whole route.
pub(crate) fn parse_route_points(gpx_xml: &str) -> Result<Vec<Waypoint>, ProviderError> {
    let parsed =
        gpx::read(Cursor::new(gpx_xml.as_bytes())).map_err(|e| ProviderError::Gpx(e.to_string()))?;

    let mut waypoints = Vec::new();
    for route in &parsed.routes {
        for pt in &route.points {
            let lon = pt.point().x();
            let lat = pt.point().y();
            let Some(elevation) = pt.elevation else {
                warn!("route point ({lat}, {lon}) has no elevation, skipping");
                continue;
            };
            waypoints.push(Waypoint::new(lat, lon, elevation));
        }
    }

    if waypoints.is_empty() {
        return Err(ProviderError::NoRoute);
    }
    Ok(waypoints)
}
