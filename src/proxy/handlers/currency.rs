// Currency Handler
use axum::extract::{Json, RawQuery, State};
use serde_json::Value;

use crate::error::{AppError, AppResult};
use crate::models::{ConvertQuery, RatesQuery};
use crate::proxy::common::validation::is_valid_amount;
use crate::proxy::server::AppState;
use crate::proxy::upstream::UpstreamEndpoint;

/// List available currencies
pub async fn handle_list_currencies(State(state): State<AppState>) -> AppResult<Json<Value>> {
    let upstream = &state.upstream;
    let api_key = upstream.api_key()?;

    let payload = upstream
        .fetch_json(UpstreamEndpoint::Currencies, api_key, &[])
        .await
        .map_err(AppError::masking_upstream_status)?;

    Ok(Json(payload))
}

/// Convert an amount between two currencies
///
/// An upstream HTTP error is relayed with its own status code.
/// The raw query is parsed here, after the key check, so repeated or odd
/// parameters never produce a non-JSON rejection.
pub async fn handle_convert(
    State(state): State<AppState>,
    RawQuery(raw): RawQuery,
) -> AppResult<Json<Value>> {
    let upstream = &state.upstream;
    let api_key = upstream.api_key()?;

    let query = ConvertQuery::from_raw(raw.as_deref());

    let (amount, from, to) = (query.amount(), query.from(), query.to());
    if !is_valid_amount(amount) {
        return Err(AppError::InvalidAmount);
    }

    tracing::info!("Converting {} {} -> {}", amount, from, to);
    let payload = upstream
        .fetch_json(
            UpstreamEndpoint::Convert,
            api_key,
            &[("amount", amount), ("from", from), ("to", to)],
        )
        .await?;
    tracing::debug!("Conversion result: {}", payload);

    Ok(Json(payload))
}

/// Exchange rates from a base currency
pub async fn handle_rates(
    State(state): State<AppState>,
    RawQuery(raw): RawQuery,
) -> AppResult<Json<Value>> {
    let upstream = &state.upstream;
    let api_key = upstream.api_key()?;

    let query = RatesQuery::from_raw(raw.as_deref());

    let payload = upstream
        .fetch_json(UpstreamEndpoint::Rates, api_key, &[("from", query.from())])
        .await
        .map_err(AppError::masking_upstream_status)?;

    Ok(Json(payload))
}
