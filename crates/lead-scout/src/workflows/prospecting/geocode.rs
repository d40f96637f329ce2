use tracing::{error, info};

use super::domain::AnchorPoint;
use super::gateway::{GatewayError, PlacesGateway};

/// The anchor could not be resolved, so there is nothing to search around.
#[derive(Debug, thiserror::Error)]
#[error("could not geocode postal code {postal_code}: {source}")]
pub struct GeocodeFailure {
    pub postal_code: String,
    #[source]
    pub source: GatewayError,
}

pub fn resolve_anchor(
    gateway: &dyn PlacesGateway,
    postal_code: &str,
) -> Result<AnchorPoint, GeocodeFailure> {
    info!(postal_code, "geocoding anchor postal code");

    match gateway.geocode(postal_code) {
        Ok(anchor) => Ok(anchor),
        Err(source) => {
            error!(postal_code, %source, "geocoding failed");
            Err(GeocodeFailure {
                postal_code: postal_code.to_string(),
                source,
            })
        }
    }
}
