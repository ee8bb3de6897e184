//! Generation service: the two rendering stages, bulk generation, and
//! listings.

use chrono::Datelike;
use serde_json::json;
use tracing::info;

use crate::clock::{Clock, SystemClock};
use crate::config::StoreConfig;
use crate::dates::first_last_day;
use crate::error::{Error, Result};
use crate::render::{render, Context};
use crate::store::{GeneratedDocument, TemplateStore};
use crate::tenant::TenantDetails;

/// Renders intermediate templates and final documents over a template store.
/// One instance serves all requests; the filesystem is the only shared state,
/// and concurrent writes to the same path are last-writer-wins.
pub struct ReceiptService<C: Clock> {
    store: TemplateStore,
    clock: C,
}

impl ReceiptService<SystemClock> {
    pub fn new(config: StoreConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }
}

impl<C: Clock> ReceiptService<C> {
    pub fn with_clock(config: StoreConfig, clock: C) -> Self {
        Self {
            store: TemplateStore::new(config),
            clock,
        }
    }

    /// Stage 1: fill a base template with tenant fields and store the result
    /// as an intermediate template. Returns the output file name.
    ///
    /// Validation runs before any file is touched. The date placeholders of
    /// the base template survive this pass untouched.
    pub fn generate_intermediate(
        &self,
        base_template_name: &str,
        tenant: &TenantDetails,
        intermediate_template_name: &str,
    ) -> Result<String> {
        tenant.validate()?;

        let template = self.store.read_base(base_template_name)?;

        let mut context = Context::new();
        context.insert("tenant_info".to_string(), json!(tenant.tenant_info));
        context.insert("tenant_number".to_string(), json!(tenant.tenant_number));
        context.insert("address".to_string(), json!(tenant.address));
        context.insert("amount".to_string(), json!(tenant.amount));

        let rendered = render(&template, &context)?;
        self.store
            .write_intermediate(intermediate_template_name, &rendered)?;

        info!(
            base = base_template_name,
            file = intermediate_template_name,
            "generated intermediate template"
        );
        Ok(intermediate_template_name.to_string())
    }

    /// Stage 2: fill an intermediate template with the date fields of one
    /// month and store the final document. Absent year/month default to the
    /// current date.
    pub fn generate_document(
        &self,
        intermediate_template_name: &str,
        year: Option<i32>,
        month: Option<u32>,
    ) -> Result<GeneratedDocument> {
        let today = self.clock.today();
        let year = year.unwrap_or_else(|| today.year());
        let month = month.unwrap_or_else(|| today.month());

        // Range check before any file access
        if !(1..=12).contains(&month) {
            return Err(Error::InvalidMonth(month));
        }

        let (first_day, last_day) = first_last_day(year, month)?;
        let template = self.store.read_intermediate(intermediate_template_name)?;

        let mut context = Context::new();
        context.insert("first_day".to_string(), json!(first_day));
        context.insert("last_day".to_string(), json!(last_day));
        context.insert("year".to_string(), json!(year));
        context.insert("month".to_string(), json!(format!("{month:02}")));

        let rendered = render(&template, &context)?;
        let document = self
            .store
            .write_final(intermediate_template_name, year, month, &rendered)?;

        info!(file = %document.file, "generated final document");
        Ok(document)
    }

    /// Generate the documents for all twelve months of a year, ascending.
    /// Fail-fast: the first failing month propagates and later months are
    /// skipped; months already written stay on disk.
    pub fn generate_all_documents(
        &self,
        intermediate_template_name: &str,
        year: Option<i32>,
    ) -> Result<Vec<String>> {
        let year = year.unwrap_or_else(|| self.clock.today().year());

        let mut files = Vec::with_capacity(12);
        for month in 1..=12 {
            let document =
                self.generate_document(intermediate_template_name, Some(year), Some(month))?;
            files.push(document.file);
        }

        info!(
            template = intermediate_template_name,
            year, "generated documents for all months"
        );
        Ok(files)
    }

    pub fn list_base_templates(&self) -> Result<Vec<String>> {
        self.store.list_base()
    }

    pub fn list_intermediate_templates(&self) -> Result<Vec<String>> {
        self.store.list_intermediate()
    }

    /// Name and path of a previously generated document, if it exists.
    pub fn document_info(
        &self,
        intermediate_template_name: &str,
        year: i32,
        month: u32,
    ) -> Result<GeneratedDocument> {
        if !(1..=12).contains(&month) {
            return Err(Error::InvalidMonth(month));
        }
        self.store
            .document_info(intermediate_template_name, year, month)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use std::fs;

    const BASE_TEMPLATE: &str = "\
Quittance de loyer
{{ tenant_info }}
Locataire n° {{ tenant_number }}
{{ address }}
Montant : {{ amount }} EUR
Période du {{ first_day }} au {{ last_day }} ({{ month }}/{{ year }})
";

    fn fixture() -> (tempfile::TempDir, ReceiptService<FixedClock>) {
        let tmp = tempfile::tempdir().unwrap();
        let config = StoreConfig::new(tmp.path());
        config.ensure_dirs().unwrap();
        fs::write(tmp.path().join("base/receipt.html"), BASE_TEMPLATE).unwrap();

        let clock = FixedClock(NaiveDate::from_ymd_opt(2025, 6, 15).unwrap());
        let service = ReceiptService::with_clock(config, clock);
        (tmp, service)
    }

    fn tenant() -> TenantDetails {
        TenantDetails {
            tenant_info: vec![
                "Jean Martin".to_string(),
                "Appartement 4".to_string(),
                "3e étage".to_string(),
            ],
            tenant_number: "03/2024".to_string(),
            address: vec![
                "12 rue des Lilas".to_string(),
                "Bât. B".to_string(),
                "75011".to_string(),
                "Paris".to_string(),
            ],
            amount: 650.5,
        }
    }

    #[test]
    fn intermediate_keeps_date_placeholders() {
        let (tmp, service) = fixture();
        let file = service
            .generate_intermediate("receipt.html", &tenant(), "martin.html")
            .unwrap();
        assert_eq!(file, "martin.html");

        let content = fs::read_to_string(tmp.path().join("intermediate/martin.html")).unwrap();
        assert!(content.contains("Jean Martin\nAppartement 4\n3e étage"));
        assert!(content.contains("Locataire n° 03/2024"));
        assert!(content.contains("Montant : 650.5 EUR"));
        // Stage-2 markers must survive stage 1
        assert!(content.contains("{{ first_day }}"));
        assert!(content.contains("{{ last_day }}"));
        assert!(content.contains("{{ month }}/{{ year }}"));
    }

    #[test]
    fn intermediate_generation_is_idempotent() {
        let (tmp, service) = fixture();
        service
            .generate_intermediate("receipt.html", &tenant(), "martin.html")
            .unwrap();
        let first = fs::read_to_string(tmp.path().join("intermediate/martin.html")).unwrap();

        service
            .generate_intermediate("receipt.html", &tenant(), "martin.html")
            .unwrap();
        let second = fs::read_to_string(tmp.path().join("intermediate/martin.html")).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn validation_failure_writes_nothing() {
        let (tmp, service) = fixture();
        let mut bad = tenant();
        bad.tenant_number = "13/2024".to_string();

        let err = service
            .generate_intermediate("receipt.html", &bad, "martin.html")
            .unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
        assert!(!tmp.path().join("intermediate/martin.html").exists());
    }

    #[test]
    fn missing_base_template_is_not_found() {
        let (_tmp, service) = fixture();
        let err = service
            .generate_intermediate("nope.html", &tenant(), "martin.html")
            .unwrap_err();
        assert!(matches!(err, Error::BaseTemplateNotFound(_)));
    }

    #[test]
    fn document_fills_date_fields() {
        let (tmp, service) = fixture();
        service
            .generate_intermediate("receipt.html", &tenant(), "martin.html")
            .unwrap();

        let doc = service
            .generate_document("martin.html", Some(2024), Some(2))
            .unwrap();
        assert_eq!(doc.file, "martin.html_02_2024.html");

        let content = fs::read_to_string(&doc.path).unwrap();
        assert!(content.contains("du 01/02/2024 au 29/02/2024"));
        assert!(content.contains("(02/2024)"));
        // Tenant fields from stage 1 still present
        assert!(content.contains("Locataire n° 03/2024"));
    }

    #[test]
    fn document_defaults_to_clock_date() {
        let (_tmp, service) = fixture();
        service
            .generate_intermediate("receipt.html", &tenant(), "martin.html")
            .unwrap();

        let doc = service.generate_document("martin.html", None, None).unwrap();
        assert_eq!(doc.file, "martin.html_06_2025.html");
    }

    #[test]
    fn out_of_range_month_is_rejected_before_file_access() {
        let (_tmp, service) = fixture();
        // No intermediate template exists; the month check must fire first.
        for month in [0, 13] {
            let err = service
                .generate_document("absent.html", Some(2025), Some(month))
                .unwrap_err();
            assert!(matches!(err, Error::InvalidMonth(m) if m == month));
        }
    }

    #[test]
    fn missing_intermediate_is_not_found() {
        let (_tmp, service) = fixture();
        let err = service
            .generate_document("absent.html", Some(2025), Some(1))
            .unwrap_err();
        assert!(matches!(err, Error::IntermediateTemplateNotFound(_)));
    }

    #[test]
    fn regeneration_overwrites_the_same_key() {
        let (_tmp, service) = fixture();
        service
            .generate_intermediate("receipt.html", &tenant(), "martin.html")
            .unwrap();

        let first = service
            .generate_document("martin.html", Some(2025), Some(4))
            .unwrap();
        let second = service
            .generate_document("martin.html", Some(2025), Some(4))
            .unwrap();
        assert_eq!(first, second);

        let year_dir = first.path.parent().unwrap();
        assert_eq!(fs::read_dir(year_dir).unwrap().count(), 1);
    }

    #[test]
    fn bulk_generation_produces_twelve_ordered_files() {
        let (_tmp, service) = fixture();
        service
            .generate_intermediate("receipt.html", &tenant(), "martin.html")
            .unwrap();

        let files = service
            .generate_all_documents("martin.html", Some(2025))
            .unwrap();
        let expected: Vec<String> = (1..=12)
            .map(|m| format!("martin.html_{m:02}_2025.html"))
            .collect();
        assert_eq!(files, expected);

        for month in 1..=12 {
            assert!(service.document_info("martin.html", 2025, month).is_ok());
        }
    }

    #[test]
    fn bulk_generation_fails_fast_on_missing_template() {
        let (_tmp, service) = fixture();
        let err = service
            .generate_all_documents("absent.html", Some(2025))
            .unwrap_err();
        assert!(matches!(err, Error::IntermediateTemplateNotFound(_)));
    }

    #[test]
    fn bulk_generation_defaults_year_from_clock() {
        let (_tmp, service) = fixture();
        service
            .generate_intermediate("receipt.html", &tenant(), "martin.html")
            .unwrap();

        let files = service.generate_all_documents("martin.html", None).unwrap();
        assert_eq!(files[0], "martin.html_01_2025.html");
        assert_eq!(files[11], "martin.html_12_2025.html");
    }

    #[test]
    fn document_info_before_generation_is_not_found() {
        let (_tmp, service) = fixture();
        assert!(matches!(
            service.document_info("martin.html", 2025, 5),
            Err(Error::DocumentNotFound { .. })
        ));
    }

    #[test]
    fn document_info_rejects_out_of_range_months() {
        let (_tmp, service) = fixture();
        assert!(matches!(
            service.document_info("martin.html", 2025, 0),
            Err(Error::InvalidMonth(0))
        ));
    }

    #[test]
    fn listings_delegate_to_the_store() {
        let (tmp, service) = fixture();
        assert_eq!(service.list_base_templates().unwrap(), vec!["receipt.html"]);
        assert!(service.list_intermediate_templates().unwrap().is_empty());

        service
            .generate_intermediate("receipt.html", &tenant(), "martin.html")
            .unwrap();
        assert_eq!(
            service.list_intermediate_templates().unwrap(),
            vec!["martin.html"]
        );
        let _ = tmp;
    }
}
