//! Template engine
//!
//! `render` is a pure function of `(template, context)`. Scalar tokens are
//! replaced globally, `{{#each items}}...{{/each}}` blocks expand per item,
//! and unrecognized tokens pass through untouched. Values are inserted raw;
//! templates are trusted operator input, not end-user content.

use rust_decimal::Decimal;
use shared::models::SlipFormat;

use crate::pricing::{to_decimal, to_f64};
use crate::utils::time::{display_date, parse_date};

const EACH_OPEN: &str = "{{#each items}}";
const EACH_CLOSE: &str = "{{/each}}";

/// One item row as the engine sees it
#[derive(Debug, Clone)]
pub struct RenderItem {
    pub name: String,
    pub quantity: i64,
    pub unit: String,
    pub total_price: f64,
}

/// Resolved rendering context for one slip
#[derive(Debug, Clone)]
pub struct SlipContext {
    pub store_name: String,
    pub store_address: String,
    pub store_phone: String,
    pub store_email: String,
    pub store_website: String,
    pub logo_data: Option<String>,
    pub footer_text: String,
    pub currency_symbol: String,
    pub tax_rate: f64,
    /// Suppresses `{{items}}` rows (international formats carry none)
    pub suppress_items: bool,

    pub serial_number: String,
    /// Display-formatted date (dd/mm/yyyy)
    pub date: String,
    pub total: f64,
    pub items: Vec<RenderItem>,
}

impl SlipContext {
    /// Build a context from a stored format plus one slip's data.
    ///
    /// `slip_date` is the stored YYYY-MM-DD form; an unparseable date is
    /// shown verbatim rather than failing the render.
    pub fn new(
        format: &SlipFormat,
        serial_number: &str,
        slip_date: &str,
        total: f64,
        items: Vec<RenderItem>,
    ) -> Self {
        let date = parse_date(slip_date)
            .map(display_date)
            .unwrap_or_else(|_| slip_date.to_string());

        Self {
            store_name: format
                .store_name
                .clone()
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| format.name.clone()),
            store_address: format.store_address.clone().unwrap_or_default(),
            store_phone: format.store_phone.clone().unwrap_or_default(),
            store_email: format.store_email.clone().unwrap_or_default(),
            store_website: format.store_website.clone().unwrap_or_default(),
            logo_data: format.logo_data.clone().filter(|d| !d.is_empty()),
            footer_text: format.footer_text.clone().unwrap_or_default(),
            currency_symbol: format.currency_symbol.clone(),
            tax_rate: format.tax_rate,
            suppress_items: format.category.as_deref() == Some("international"),
            serial_number: serial_number.to_string(),
            date,
            total,
            items,
        }
    }

    fn logo_img(&self) -> String {
        match &self.logo_data {
            Some(data) => format!(
                "<img src=\"{data}\" alt=\"Logo\" style=\"max-width: 80px; height: auto;\">"
            ),
            None => String::new(),
        }
    }

    /// Tax as a plain number string: 10 → "10", 7.5 → "7.5"
    fn tax_rate_display(&self) -> String {
        format!("{}", self.tax_rate)
    }

    fn tax_amount(&self) -> f64 {
        let tax = to_decimal(self.total) * to_decimal(self.tax_rate) / Decimal::from(100);
        to_f64(tax.round_dp_with_strategy(
            crate::pricing::DECIMAL_PLACES,
            rust_decimal::RoundingStrategy::MidpointAwayFromZero,
        ))
    }

    fn grand_total(&self) -> f64 {
        to_f64(to_decimal(self.total) + to_decimal(self.tax_amount()))
    }

    /// Default `{{items}}` rows (flex row per item), or empty when suppressed.
    fn items_html(&self) -> String {
        if self.suppress_items {
            return String::new();
        }
        let mut html = String::new();
        for item in &self.items {
            html.push_str(&format!(
                "\n  <div style=\"display:flex;justify-content:space-between;align-items:center;margin:5px 0;font-size:12px\">\n    <span style=\"flex:1;text-align:left;\">{}</span>\n    <span style=\"flex:1;text-align:center;\">{} {}</span>\n    <span style=\"flex:1;text-align:right;\">{:.2}</span>\n  </div>\n",
                item.name, item.quantity, item.unit, item.total_price
            ));
        }
        html
    }
}

/// Render one slip through a template.
pub fn render(template: &str, ctx: &SlipContext) -> String {
    let tax_amount = ctx.tax_amount();
    let grand_total = ctx.grand_total();

    let scalars = template
        .replace("{{logo}}", &ctx.logo_img())
        .replace("{{store_name}}", &ctx.store_name)
        .replace("{{store_address}}", &ctx.store_address)
        .replace("{{store_phone}}", &ctx.store_phone)
        .replace("{{store_email}}", &ctx.store_email)
        .replace("{{store_website}}", &ctx.store_website)
        .replace("{{date}}", &ctx.date)
        .replace("{{slip_number}}", &ctx.serial_number)
        .replace("{{total}}", &format!("{:.2}", ctx.total))
        .replace("{{tax_rate}}", &ctx.tax_rate_display())
        .replace("{{tax_amount}}", &format!("{tax_amount:.2}"))
        .replace("{{grand_total}}", &format!("{grand_total:.2}"))
        .replace("{{currency_symbol}}", &ctx.currency_symbol)
        .replace("{{footer_text}}", &ctx.footer_text);

    let expanded = expand_each_blocks(&scalars, &ctx.items);

    expanded.replace("{{items}}", &ctx.items_html())
}

/// Expand every `{{#each items}}...{{/each}}` block, non-greedy to the
/// first closing tag. An unclosed open tag is left verbatim.
fn expand_each_blocks(input: &str, items: &[RenderItem]) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(open) = rest.find(EACH_OPEN) {
        let after_open = &rest[open + EACH_OPEN.len()..];
        let Some(close) = after_open.find(EACH_CLOSE) else {
            break;
        };

        out.push_str(&rest[..open]);
        let inner = &after_open[..close];
        for item in items {
            out.push_str(
                &inner
                    .replace("{{name}}", &item.name)
                    .replace("{{quantity}}", &item.quantity.to_string())
                    .replace("{{unit}}", &item.unit)
                    .replace("{{price}}", &format!("{:.2}", item.total_price)),
            );
        }
        rest = &after_open[close + EACH_CLOSE.len()..];
    }

    out.push_str(rest);
    out
}
