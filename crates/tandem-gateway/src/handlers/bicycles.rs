//! Parallel fan-out endpoint: bicycle record + brand record for one id

use axum::extract::{Path, State};
use axum::Json;
use tracing::debug;

use tandem_core::compose;
use tandem_core::models::{BicycleRecord, BrandRecord, CompositeRecord};

use crate::error::ApiError;
use crate::fanout;
use crate::state::AppState;

/// GET /bicycles/{id}
///
/// Issues the bicycle and brand fetches concurrently with the same id and
/// composes both records into the response. Composition only happens after
/// both calls settled successfully; any failure is translated instead.
pub async fn get_bicycle(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<CompositeRecord>, ApiError> {
    debug!(%id, "aggregating bicycle with brand");

    let (bicycle, brand) = tokio::join!(
        state.bicycle.fetch::<BicycleRecord>(&id),
        state.brand.fetch::<BrandRecord>(&id),
    );

    let (bicycle, brand) = fanout::settle(bicycle, brand)?;

    Ok(Json(compose::bicycle_with_brand(bicycle, brand)))
}
