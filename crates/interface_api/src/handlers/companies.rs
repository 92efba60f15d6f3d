//! Company handlers

use axum::{
    extract::{Path, State},
    Json,
};

use core_kernel::{CompanyId, UserId};

use crate::dto::cards::{ActivationResponse, CompanyListResponse};
use crate::error::ApiError;
use crate::AppState;

/// Lists a user's companies with summary statistics
///
/// 404 when the user id is unknown; an empty `companies` array when the
/// user simply has none.
pub async fn list_for_user(
    State(state): State<AppState>,
    Path(user_id): Path<UserId>,
) -> Result<Json<CompanyListResponse>, ApiError> {
    let summaries = state
        .company_service
        .get_companies_summary(user_id)
        .await?
        .ok_or_else(ApiError::user_not_found)?;

    Ok(Json(CompanyListResponse {
        companies: summaries.into_iter().map(Into::into).collect(),
    }))
}

/// Activates a company's card
///
/// Idempotent: an already active company stays active and gets a fresh
/// activation timestamp. 404 when the company id is unknown.
pub async fn activate_card(
    State(state): State<AppState>,
    Path(company_id): Path<CompanyId>,
) -> Result<Json<ActivationResponse>, ApiError> {
    let company = state
        .company_service
        .activate_company_card(company_id)
        .await?
        .ok_or_else(ApiError::company_not_found)?;

    Ok(Json(ActivationResponse {
        company: company.into(),
    }))
}
