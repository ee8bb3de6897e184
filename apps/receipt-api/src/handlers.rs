//! HTTP handlers for the receipt API

use axum::{
    extract::{Query, State},
    Json,
};
use std::sync::Arc;

use receipt_core::TenantDetails;

use crate::error::ApiError;
use crate::models::*;
use crate::state::AppState;

/// Health check endpoint
pub async fn health() -> &'static str {
    "OK"
}

/// Generate an intermediate template from a base template and tenant fields
pub async fn generate_intermediate_template(
    State(state): State<Arc<AppState>>,
    Json(req): Json<IntermediateTemplateRequest>,
) -> Result<Json<IntermediateTemplateResponse>, ApiError> {
    let tenant = TenantDetails {
        tenant_info: req.tenant_info,
        tenant_number: req.tenant_number,
        address: req.address,
        amount: req.amount,
    };

    let file = state.service.generate_intermediate(
        &req.base_template_name,
        &tenant,
        &req.intermediate_template_name,
    )?;

    Ok(Json(IntermediateTemplateResponse {
        message: "Intermediate template generated successfully",
        file,
    }))
}

/// Generate a final document for one month
pub async fn generate_document(
    State(state): State<Arc<AppState>>,
    Json(req): Json<DocumentRequest>,
) -> Result<Json<DocumentResponse>, ApiError> {
    let document =
        state
            .service
            .generate_document(&req.intermediate_template_name, req.year, req.month)?;

    Ok(Json(DocumentResponse {
        message: "Final document generated successfully",
        file: document.file,
        path: document.path.display().to_string(),
    }))
}

/// Generate the documents for every month of a year
pub async fn generate_all_documents(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AllDocumentsRequest>,
) -> Result<Json<AllDocumentsResponse>, ApiError> {
    let files = state
        .service
        .generate_all_documents(&req.intermediate_template_name, req.year)?;

    Ok(Json(AllDocumentsResponse {
        message: "Documents generated for all months",
        files,
    }))
}

/// List base template files
pub async fn list_base_templates(
    State(state): State<Arc<AppState>>,
) -> Result<Json<BaseTemplatesResponse>, ApiError> {
    let base_templates = state.service.list_base_templates()?;
    Ok(Json(BaseTemplatesResponse { base_templates }))
}

/// List intermediate template files
pub async fn list_intermediate_templates(
    State(state): State<Arc<AppState>>,
) -> Result<Json<IntermediateTemplatesResponse>, ApiError> {
    let intermediate_templates = state.service.list_intermediate_templates()?;
    Ok(Json(IntermediateTemplatesResponse {
        intermediate_templates,
    }))
}

/// Look up a previously generated document
pub async fn document_info(
    State(state): State<Arc<AppState>>,
    Query(query): Query<DocumentInfoQuery>,
) -> Result<Json<DocumentInfoResponse>, ApiError> {
    let document =
        state
            .service
            .document_info(&query.intermediate_template_name, query.year, query.month)?;

    Ok(Json(DocumentInfoResponse {
        document: document.file,
        path: document.path.display().to_string(),
    }))
}
