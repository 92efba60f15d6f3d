//! Transaction handlers

use axum::{
    extract::{Path, State},
    Json,
};

use core_kernel::CompanyId;

use crate::dto::cards::TransactionListResponse;
use crate::error::ApiError;
use crate::AppState;

/// Lists a company's transactions, most recent first
///
/// Unbounded listing; 404 when the company id is unknown, an empty
/// `transactions` array when the company has none.
pub async fn list_for_company(
    State(state): State<AppState>,
    Path(company_id): Path<CompanyId>,
) -> Result<Json<TransactionListResponse>, ApiError> {
    let transactions = state
        .transaction_service
        .get_transactions(company_id)
        .await?
        .ok_or_else(ApiError::company_not_found)?;

    Ok(Json(TransactionListResponse {
        transactions: transactions.into_iter().map(Into::into).collect(),
    }))
}
