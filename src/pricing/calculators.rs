//! Core pricing calculation functions.
//!
//! Pure functions for quote pricing math - no database access.

use rust_decimal::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::models::{CarrierOffer, QuoteRequest, QuoteType};

use super::carriers::CARRIERS;

pub const AUTO_BASE_PRICE: Decimal = dec!(600.00);
pub const HOME_BASE_PRICE: Decimal = dec!(1200.00);

const YOUNG_DRIVER_AGE: i32 = 25;
const YOUNG_DRIVER_MODIFIER: Decimal = dec!(0.25);
const OLD_VEHICLE_YEAR: i32 = 2005;
const OLD_VEHICLE_MODIFIER: Decimal = dec!(0.15);
const PER_ACCIDENT_MODIFIER: Decimal = dec!(0.1);
const MAX_ACCIDENT_MODIFIER: Decimal = dec!(0.4);
const HIGH_HOME_VALUE: Decimal = dec!(750000);
const HIGH_HOME_VALUE_MODIFIER: Decimal = dec!(0.2);
const SECURITY_SYSTEM_DISCOUNT: Decimal = dec!(0.05);

/// Round to specified decimal places using banker's rounding (ROUND_HALF_EVEN).
///
/// Banker's rounding rounds to the nearest even number when the value is exactly
/// halfway between two possibilities. This reduces cumulative rounding bias.
///
/// # Examples
/// ```
/// use rust_decimal_macros::dec;
/// use insurance_quotes::pricing::round_money;
///
/// assert_eq!(round_money(dec!(2.5), 0), dec!(2));   // rounds to even
/// assert_eq!(round_money(dec!(3.5), 0), dec!(4));   // rounds to even
/// assert_eq!(round_money(dec!(1.234), 2), dec!(1.23));
/// ```
pub fn round_money(amount: Decimal, places: u32) -> Decimal {
    amount.round_dp_with_strategy(places, RoundingStrategy::MidpointNearestEven)
}

/// Annual base price for the coverage type
pub fn base_price(quote_type: QuoteType) -> Decimal {
    match quote_type {
        QuoteType::Auto => AUTO_BASE_PRICE,
        QuoteType::Home => HOME_BASE_PRICE,
    }
}

/// Sum the risk modifiers that apply to the request.
///
/// Missing optional fields contribute nothing. The result may be negative
/// (a home with only a security system) and is not floored.
pub fn risk_modifier(request: &QuoteRequest) -> Decimal {
    let mut modifier = Decimal::ZERO;

    if matches!(request.age, Some(age) if age < YOUNG_DRIVER_AGE) {
        modifier += YOUNG_DRIVER_MODIFIER;
    }

    match request.quote_type {
        QuoteType::Auto => {
            if matches!(request.vehicle_year, Some(year) if year < OLD_VEHICLE_YEAR) {
                modifier += OLD_VEHICLE_MODIFIER;
            }
            let accidents = request.accidents_last_5_years.unwrap_or(0);
            if accidents > 0 {
                modifier += (PER_ACCIDENT_MODIFIER * Decimal::from(accidents))
                    .min(MAX_ACCIDENT_MODIFIER);
            }
        }
        QuoteType::Home => {
            if matches!(request.home_value, Some(value) if value > HIGH_HOME_VALUE) {
                modifier += HIGH_HOME_VALUE_MODIFIER;
            }
            if request.security_system == Some(true) {
                modifier -= SECURITY_SYSTEM_DISCOUNT;
            }
        }
    }

    modifier
}

/// Monthly price before the per-carrier multiplier is applied
pub fn effective_monthly_base(request: &QuoteRequest) -> Decimal {
    base_price(request.quote_type) * (Decimal::ONE + risk_modifier(request)) / Decimal::from(12)
}

/// Price a validated request against every carrier.
///
/// Deterministic and side-effect free: identical input always yields
/// identical offers, in carrier catalogue order.
pub fn price(request: &QuoteRequest) -> Vec<CarrierOffer> {
    let monthly_base = effective_monthly_base(request);

    CARRIERS
        .iter()
        .map(|carrier| carrier.offer(round_money(monthly_base * carrier.multiplier, 2)))
        .collect()
}
