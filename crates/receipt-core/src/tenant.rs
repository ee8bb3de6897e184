//! Tenant fields and their validation
//!
//! Validation runs before any file I/O; a bad request never touches the
//! template store.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Request-scoped tenant fields used to fill a base template. Not persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TenantDetails {
    /// Exactly 3 lines
    pub tenant_info: Vec<String>,
    /// `MM/YYYY`, month in 1..=12
    pub tenant_number: String,
    /// Exactly 4 lines
    pub address: Vec<String>,
    pub amount: f64,
}

impl TenantDetails {
    pub fn validate(&self) -> Result<()> {
        if self.tenant_info.len() != 3 {
            return Err(Error::Validation(format!(
                "tenant_info must have exactly 3 lines, got {}",
                self.tenant_info.len()
            )));
        }
        if self.address.len() != 4 {
            return Err(Error::Validation(format!(
                "address must have exactly 4 lines, got {}",
                self.address.len()
            )));
        }
        validate_tenant_number(&self.tenant_number)
    }
}

/// Check the `MM/YYYY` shape of a tenant number: 7 characters, `/` at
/// position 2, digits everywhere else, month between 01 and 12.
pub fn validate_tenant_number(value: &str) -> Result<()> {
    let bytes = value.as_bytes();
    if bytes.len() != 7 || bytes[2] != b'/' {
        return Err(Error::Validation(format!(
            "tenant_number '{value}' must use the MM/YYYY format"
        )));
    }
    let digits_ok = bytes[..2]
        .iter()
        .chain(&bytes[3..])
        .all(u8::is_ascii_digit);
    if !digits_ok {
        return Err(Error::Validation(format!(
            "tenant_number '{value}' must contain only digits around the separator"
        )));
    }
    let month: u32 = value[..2].parse().map_err(|_| {
        Error::Validation(format!("tenant_number '{value}' has an unreadable month"))
    })?;
    if !(1..=12).contains(&month) {
        return Err(Error::Validation(format!(
            "tenant_number month must be between 01 and 12, got {month:02}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn tenant(info: &[&str], number: &str, address: &[&str]) -> TenantDetails {
        TenantDetails {
            tenant_info: info.iter().map(|s| s.to_string()).collect(),
            tenant_number: number.to_string(),
            address: address.iter().map(|s| s.to_string()).collect(),
            amount: 650.0,
        }
    }

    #[test]
    fn accepts_well_formed_details() {
        let t = tenant(
            &["Jean Martin", "Appartement 4", "3e étage"],
            "03/2024",
            &["12 rue des Lilas", "Bât. B", "75011", "Paris"],
        );
        assert!(t.validate().is_ok());
    }

    #[test]
    fn rejects_wrong_line_counts() {
        let t = tenant(&["one", "two"], "03/2024", &["a", "b", "c", "d"]);
        assert!(matches!(t.validate(), Err(Error::Validation(_))));

        let t = tenant(&["one", "two", "three"], "03/2024", &["a", "b", "c"]);
        assert!(matches!(t.validate(), Err(Error::Validation(_))));
    }

    #[test]
    fn rejects_bad_tenant_numbers() {
        for bad in [
            "3/2024",   // too short
            "003/2024", // too long
            "03-2024",  // wrong separator
            "0/32024",  // separator misplaced
            "ab/2024",  // non-digit month
            "03/20x4",  // non-digit year
            "00/2024",  // month zero
            "13/2024",  // month too large
            "",
        ] {
            assert!(
                validate_tenant_number(bad).is_err(),
                "expected rejection of {bad:?}"
            );
        }
    }

    #[test]
    fn month_boundaries() {
        assert!(validate_tenant_number("01/2024").is_ok());
        assert!(validate_tenant_number("12/2024").is_ok());
        assert!(validate_tenant_number("00/2024").is_err());
        assert!(validate_tenant_number("13/2024").is_err());
    }

    proptest! {
        #[test]
        fn accepts_all_valid_months_and_years(month in 1u32..=12, year in "[0-9]{4}") {
            let number = format!("{month:02}/{year}");
            prop_assert!(validate_tenant_number(&number).is_ok());
        }

        #[test]
        fn rejects_wrong_lengths(s in "[0-9/]{0,6}|[0-9/]{8,12}") {
            prop_assert!(validate_tenant_number(&s).is_err());
        }

        #[test]
        fn rejects_non_digit_years(month in 1u32..=12, year in "[a-zA-Z]{4}") {
            let number = format!("{month:02}/{year}");
            prop_assert!(validate_tenant_number(&number).is_err());
        }

        #[test]
        fn rejects_out_of_range_months(month in 13u32..=99, year in "[0-9]{4}") {
            let number = format!("{month:02}/{year}");
            prop_assert!(validate_tenant_number(&number).is_err());
        }
    }
}
