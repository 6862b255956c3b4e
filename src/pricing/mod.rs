//! Pricing engine module.
//!
//! Turns a validated quote request into simulated offers from three fixed
//! carriers. Stateless; owns nothing and never fails.

pub mod calculators;
pub mod carriers;

// Re-export commonly used items
pub use calculators::{price, risk_modifier, round_money};
pub use carriers::{Carrier, CARRIERS};
