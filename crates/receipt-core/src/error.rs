//! Error types for the receipt pipeline

use thiserror::Error;

use crate::render::RenderError;

/// Pipeline errors
#[derive(Error, Debug)]
pub enum Error {
    #[error("{0}")]
    Validation(String),

    #[error("Month must be between 1 and 12, got {0}")]
    InvalidMonth(u32),

    #[error("Base template not found: {0}")]
    BaseTemplateNotFound(String),

    #[error("Intermediate template not found: {0}")]
    IntermediateTemplateNotFound(String),

    #[error("Document not generated: {template} for {month:02}/{year}")]
    DocumentNotFound {
        template: String,
        year: i32,
        month: u32,
    },

    #[error("Template render failed: {0}")]
    Render(#[from] RenderError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
