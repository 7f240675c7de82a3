//! Sequential chained endpoint: boat record first, then its brand

use axum::extract::{Path, State};
use axum::Json;
use tracing::debug;

use tandem_core::compose;
use tandem_core::models::{BoatRecord, BrandRecord, CompositeRecord};

use crate::error::ApiError;
use crate::state::AppState;

/// GET /boats/{id}
///
/// Fetches the boat record, then resolves its `brand` field against the
/// brand service. The second call is never issued when the first fails:
/// `?` translates the boat failure before the brand fetch is reached.
pub async fn get_boat(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<CompositeRecord>, ApiError> {
    debug!(%id, "aggregating boat with chained brand lookup");

    let boat: BoatRecord = state.boat.fetch(&id).await?;

    debug!(boat_id = %boat.id, brand_key = %boat.brand, "resolving brand");
    let brand: BrandRecord = state.brand.fetch(&boat.brand).await?;

    Ok(Json(compose::boat_with_brand(boat, brand)))
}
