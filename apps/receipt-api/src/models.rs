//! Request and response models for the receipt API

use serde::{Deserialize, Serialize};

/// Request to generate an intermediate template from a base template
#[derive(Debug, Clone, Deserialize)]
pub struct IntermediateTemplateRequest {
    /// Name of the base template under the base root
    pub base_template_name: String,
    /// Exactly 3 lines of tenant information
    pub tenant_info: Vec<String>,
    /// Tenant number in `MM/YYYY` format
    pub tenant_number: String,
    /// Exactly 4 address lines
    pub address: Vec<String>,
    /// Rent amount
    pub amount: f64,
    /// Name of the intermediate template to write
    pub intermediate_template_name: String,
}

/// Request to generate a final document for one month
#[derive(Debug, Clone, Deserialize)]
pub struct DocumentRequest {
    pub intermediate_template_name: String,
    /// Defaults to the current year
    #[serde(default)]
    pub year: Option<i32>,
    /// 1-12, defaults to the current month
    #[serde(default)]
    pub month: Option<u32>,
}

/// Request to generate the documents for all twelve months
#[derive(Debug, Clone, Deserialize)]
pub struct AllDocumentsRequest {
    pub intermediate_template_name: String,
    /// Defaults to the current year
    #[serde(default)]
    pub year: Option<i32>,
}

/// Query parameters for document lookup
#[derive(Debug, Clone, Deserialize)]
pub struct DocumentInfoQuery {
    pub intermediate_template_name: String,
    pub year: i32,
    pub month: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct IntermediateTemplateResponse {
    pub message: &'static str,
    pub file: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct DocumentResponse {
    pub message: &'static str,
    pub file: String,
    pub path: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct AllDocumentsResponse {
    pub message: &'static str,
    pub files: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BaseTemplatesResponse {
    pub base_templates: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct IntermediateTemplatesResponse {
    pub intermediate_templates: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DocumentInfoResponse {
    pub document: String,
    pub path: String,
}
