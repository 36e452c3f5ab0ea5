//! Batch slip generator
//!
//! Produces ephemeral `GeneratedSlip`s; nothing here touches the database.
//! All validation happens before any random draw so a bad request never
//! yields a partial batch.

use chrono::Duration;
use rand::Rng;
use rand::seq::SliceRandom;
use rust_decimal::Decimal;
use shared::models::{GenerateSlipsRequest, GeneratedSlip, GeneratedSlipItem, Product, SlipFormat};

use crate::pricing::{PricingConfig, generate_unit_price, round_money, to_decimal, to_f64};
use crate::utils::time::parse_date;
use crate::utils::{AppError, AppResult};

pub const MAX_BATCH_SIZE: u32 = 100;

/// Generate a batch of slips for one format.
///
/// `products` is the resolved catalog for the request's item selections;
/// every `product_id` in the request must resolve to an entry.
pub fn generate_batch(
    rng: &mut impl Rng,
    request: &GenerateSlipsRequest,
    format: &SlipFormat,
    products: &[Product],
    pricing: &PricingConfig,
) -> AppResult<Vec<GeneratedSlip>> {
    let start = parse_date(&request.start_date)?;
    let end = parse_date(&request.end_date)?;
    if start > end {
        return Err(AppError::validation(
            "start_date must not be after end_date",
        ));
    }
    if request.count == 0 || request.count > MAX_BATCH_SIZE {
        return Err(AppError::validation(format!(
            "count must be between 1 and {MAX_BATCH_SIZE}, got {}",
            request.count
        )));
    }
    if request.items.is_empty() {
        return Err(AppError::validation("at least one product must be selected"));
    }

    // Resolve selections up front so a missing product aborts the batch
    let mut selections = Vec::with_capacity(request.items.len());
    for selection in &request.items {
        if let Some(q) = selection.quantity
            && q < 1
        {
            return Err(AppError::validation(format!(
                "quantity must be at least 1, got {q}"
            )));
        }
        let product = products
            .iter()
            .find(|p| p.id == selection.product_id)
            .ok_or_else(|| {
                AppError::not_found(format!("Product {} not found", selection.product_id))
            })?;
        selections.push((product, selection.quantity));
    }

    let day_span = (end - start).num_days();
    let mut slips = Vec::with_capacity(request.count as usize);

    for _ in 0..request.count {
        let offset = if day_span == 0 {
            0
        } else {
            rng.gen_range(0..=day_span)
        };
        let slip_date = (start + Duration::days(offset))
            .format("%Y-%m-%d")
            .to_string();

        let mut per_slip = selections.clone();
        per_slip.shuffle(rng);

        let mut items = Vec::with_capacity(per_slip.len());
        let mut total = Decimal::ZERO;
        for (product, pinned_quantity) in per_slip {
            let quantity = pinned_quantity
                .unwrap_or_else(|| pricing.quantity.realistic_quantity(rng, &product.unit));

            let base_price = generate_unit_price(rng, product.base_price, product.max_price);
            let unit_price = pricing.currency.convert(base_price, &format.currency_symbol);
            let total_price =
                round_money(to_f64(to_decimal(unit_price) * Decimal::from(quantity)));
            total += to_decimal(total_price);

            items.push(GeneratedSlipItem {
                product_id: product.id.clone(),
                name: product.name.clone(),
                unit: product.unit.clone(),
                quantity,
                unit_price,
                total_price,
            });
        }

        slips.push(GeneratedSlip {
            serial_number: generate_serial(rng),
            slip_date,
            total_amount: round_money(to_f64(total)),
            items_count: items.len() as i64,
            format_id: format.id.clone(),
            items,
        });
    }

    Ok(slips)
}

/// Display serial: last six digits of the wall clock in millis plus five
/// random digits. Record identity is the slip's UUID; this is display-only.
fn generate_serial(rng: &mut impl Rng) -> String {
    let millis = shared::util::now_millis();
    format!("{:06}{:05}", millis % 1_000_000, rng.gen_range(0..100_000))
}
