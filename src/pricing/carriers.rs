//! Fixed carrier catalogue.
//!
//! Ratings, features and call-to-action labels are static and do not depend
//! on the request; only the price multiplier feeds into the calculation.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::models::CarrierOffer;

/// Static data for one simulated carrier
#[derive(Debug, Clone, Copy)]
pub struct Carrier {
    pub name: &'static str,
    pub multiplier: Decimal,
    pub rating: f64,
    pub features: &'static [&'static str],
    pub cta: &'static str,
}

impl Carrier {
    /// Build the offer for this carrier at an already-rounded monthly price
    pub fn offer(&self, monthly: Decimal) -> CarrierOffer {
        CarrierOffer {
            name: self.name.to_string(),
            monthly,
            rating: self.rating,
            features: self.features.iter().map(|f| f.to_string()).collect(),
            cta: self.cta.to_string(),
        }
    }
}

pub const CARRIERS: [Carrier; 3] = [
    Carrier {
        name: "BlueShield Mutual",
        multiplier: dec!(0.95),
        rating: 4.7,
        features: &["24/7 support", "Bundle discount", "Fast claims"],
        cta: "Get Started",
    },
    Carrier {
        name: "NorthStar Insurance",
        multiplier: dec!(1.02),
        rating: 4.5,
        features: &[
            "Accident forgiveness",
            "Roadside (auto)",
            "Smart home (home)",
        ],
        cta: "Select",
    },
    Carrier {
        name: "Aurora Coverage Co.",
        multiplier: dec!(0.88),
        rating: 4.3,
        features: &["Low deductible options", "Local agents", "Online portal"],
        cta: "View Details",
    },
];
