//! Input validation helpers
//!
//! Centralized text length constants and validation functions.
//! SQLite TEXT has no built-in length enforcement, so limits are applied
//! at the handler boundary.

use crate::utils::AppError;

// ── Text length limits ──────────────────────────────────────────────

/// Entity names: product, format, store name
pub const MAX_NAME_LEN: usize = 200;

/// Notes and descriptions
pub const MAX_NOTE_LEN: usize = 500;

/// Short identifiers: phone numbers, currency symbols
pub const MAX_SHORT_TEXT_LEN: usize = 100;

/// Addresses
pub const MAX_ADDRESS_LEN: usize = 500;

/// Template bodies (user-authored HTML)
pub const MAX_TEMPLATE_LEN: usize = 64 * 1024;

// ── Validation helpers (CRUD handlers) ──────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty")));
    }
    if value.len() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        )));
    }
    Ok(())
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> Result<(), AppError> {
    if let Some(v) = value
        && v.len() > max_len
    {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            v.len()
        )));
    }
    Ok(())
}

/// Validate a product price band: non-negative and `base <= max`.
pub fn validate_price_band(base_price: f64, max_price: f64) -> Result<(), AppError> {
    if !base_price.is_finite() || !max_price.is_finite() {
        return Err(AppError::validation("prices must be finite numbers"));
    }
    if base_price < 0.0 || max_price < 0.0 {
        return Err(AppError::validation("prices must be non-negative"));
    }
    if base_price > max_price {
        return Err(AppError::validation(format!(
            "base_price ({base_price}) must not exceed max_price ({max_price})"
        )));
    }
    Ok(())
}

/// Validate an optional logo payload: a `data:<mime>;base64,<data>` URL
/// whose payload actually decodes.
pub fn validate_logo_data(value: &Option<String>) -> Result<(), AppError> {
    use base64::Engine;

    let Some(logo) = value else {
        return Ok(());
    };
    if logo.is_empty() {
        return Ok(());
    }

    let payload = logo
        .strip_prefix("data:")
        .and_then(|rest| rest.split_once(";base64,"))
        .map(|(_, data)| data)
        .ok_or_else(|| AppError::validation("logo_data must be a base64 data URL"))?;

    base64::engine::general_purpose::STANDARD
        .decode(payload)
        .map_err(|_| AppError::validation("logo_data payload is not valid base64"))?;
    Ok(())
}

/// Validate a tax rate in percent: finite and within [0, 100].
pub fn validate_tax_rate(tax_rate: f64) -> Result<(), AppError> {
    if !tax_rate.is_finite() || !(0.0..=100.0).contains(&tax_rate) {
        return Err(AppError::validation(format!(
            "tax_rate must be between 0 and 100, got {tax_rate}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_text_rejects_empty_and_oversized() {
        assert!(validate_required_text("Apple", "name", MAX_NAME_LEN).is_ok());
        assert!(validate_required_text("   ", "name", MAX_NAME_LEN).is_err());
        assert!(validate_required_text(&"x".repeat(201), "name", MAX_NAME_LEN).is_err());
    }

    #[test]
    fn price_band_ordering() {
        assert!(validate_price_band(10.0, 20.0).is_ok());
        assert!(validate_price_band(10.0, 10.0).is_ok());
        assert!(validate_price_band(20.0, 10.0).is_err());
        assert!(validate_price_band(-1.0, 10.0).is_err());
        assert!(validate_price_band(f64::NAN, 10.0).is_err());
    }

    #[test]
    fn logo_data_must_be_a_data_url() {
        assert!(validate_logo_data(&None).is_ok());
        assert!(validate_logo_data(&Some("data:image/png;base64,AAAA".into())).is_ok());
        assert!(validate_logo_data(&Some("http://example.com/logo.png".into())).is_err());
        assert!(validate_logo_data(&Some("data:image/png;base64,not base64!!".into())).is_err());
    }

    #[test]
    fn tax_rate_bounds() {
        assert!(validate_tax_rate(0.0).is_ok());
        assert!(validate_tax_rate(7.5).is_ok());
        assert!(validate_tax_rate(100.0).is_ok());
        assert!(validate_tax_rate(101.0).is_err());
        assert!(validate_tax_rate(-0.1).is_err());
    }
}
