//! Two-stage rent receipt rendering pipeline
//!
//! A base template is filled with tenant details to produce an intermediate
//! template, which is later filled with per-month date fields to produce a
//! final document. This crate provides:
//! - Template rendering (`{{ name }}` substitution)
//! - The filesystem template store (base / intermediate / final roots)
//! - Tenant field validation
//! - The generation service composing the two stages

pub mod clock;
pub mod config;
pub mod dates;
pub mod error;
pub mod render;
pub mod service;
pub mod store;
pub mod tenant;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::StoreConfig;
pub use error::{Error, Result};
pub use service::ReceiptService;
pub use store::GeneratedDocument;
pub use tenant::TenantDetails;
