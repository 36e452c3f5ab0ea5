//! Slip Format Model

use serde::{Deserialize, Serialize};

fn default_currency() -> String {
    "Rs".to_string()
}

/// Slip format entity — a named HTML template plus branding and tax config
///
/// `template_html` carries `{{token}}` placeholders resolved by the
/// rendering engine. Logo image data arrives base64-encoded (data URL) with
/// its mime type alongside.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct SlipFormat {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub template_html: String,
    pub logo_data: Option<String>,
    pub logo_type: Option<String>,
    pub store_name: Option<String>,
    pub store_address: Option<String>,
    pub store_phone: Option<String>,
    pub store_email: Option<String>,
    pub store_website: Option<String>,
    /// Tax rate in percent (e.g. 7.5 = 7.5%)
    pub tax_rate: f64,
    #[serde(default = "default_currency")]
    pub currency_symbol: String,
    pub footer_text: Option<String>,
    /// Category tag; `"international"` suppresses `{{items}}` detail
    pub category: Option<String>,
    pub is_active: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Create slip format payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlipFormatCreate {
    pub name: String,
    pub description: Option<String>,
    pub template_html: String,
    pub logo_data: Option<String>,
    pub logo_type: Option<String>,
    pub store_name: Option<String>,
    pub store_address: Option<String>,
    pub store_phone: Option<String>,
    pub store_email: Option<String>,
    pub store_website: Option<String>,
    #[serde(default)]
    pub tax_rate: f64,
    #[serde(default = "default_currency")]
    pub currency_symbol: String,
    pub footer_text: Option<String>,
    pub category: Option<String>,
}

/// Update slip format payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SlipFormatUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub template_html: Option<String>,
    pub logo_data: Option<String>,
    pub logo_type: Option<String>,
    pub store_name: Option<String>,
    pub store_address: Option<String>,
    pub store_phone: Option<String>,
    pub store_email: Option<String>,
    pub store_website: Option<String>,
    pub tax_rate: Option<f64>,
    pub currency_symbol: Option<String>,
    pub footer_text: Option<String>,
    pub category: Option<String>,
    pub is_active: Option<bool>,
}
