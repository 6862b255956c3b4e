//! Quote request, carrier offer and stored quote models

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Kind of coverage being quoted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuoteType {
    Auto,
    Home,
}

impl QuoteType {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuoteType::Auto => "auto",
            QuoteType::Home => "home",
        }
    }
}

impl fmt::Display for QuoteType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QuoteType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto" => Ok(QuoteType::Auto),
            "home" => Ok(QuoteType::Home),
            other => Err(format!("unknown quote type '{}'", other)),
        }
    }
}

/// Customer-submitted quote request.
///
/// Auto and home fields share one shape; fields that do not apply to
/// `quote_type` are ignored by pricing but persisted as submitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteRequest {
    pub quote_type: QuoteType,
    pub zip_code: String,
    #[serde(default)]
    pub age: Option<i32>,

    // Auto
    #[serde(default)]
    pub vehicle_year: Option<i32>,
    #[serde(default)]
    pub vehicle_make: Option<String>,
    #[serde(default)]
    pub vehicle_model: Option<String>,
    #[serde(default)]
    pub accidents_last_5_years: Option<i32>,

    // Home
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub home_value: Option<Decimal>,
    #[serde(default)]
    pub square_feet: Option<i32>,
    #[serde(default)]
    pub security_system: Option<bool>,
}

pub const AGE_RANGE: (i32, i32) = (16, 120);
pub const VEHICLE_YEAR_RANGE: (i32, i32) = (1980, 2100);
pub const ACCIDENTS_RANGE: (i32, i32) = (0, 10);
pub const MIN_SQUARE_FEET: i32 = 100;

/// A single constraint violation on a request field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

fn check_range(
    errors: &mut Vec<FieldError>,
    field: &'static str,
    value: Option<i32>,
    (min, max): (i32, i32),
) {
    if let Some(v) = value {
        if v < min || v > max {
            errors.push(FieldError {
                field,
                message: format!("must be between {} and {}, got {}", min, max, v),
            });
        }
    }
}

impl QuoteRequest {
    /// Check every declared range constraint.
    ///
    /// All violations are collected so the caller can report them at once.
    /// Pricing must only ever see requests that passed this check.
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();

        check_range(&mut errors, "age", self.age, AGE_RANGE);
        check_range(&mut errors, "vehicle_year", self.vehicle_year, VEHICLE_YEAR_RANGE);
        check_range(
            &mut errors,
            "accidents_last_5_years",
            self.accidents_last_5_years,
            ACCIDENTS_RANGE,
        );

        if let Some(value) = self.home_value {
            if value.is_sign_negative() && !value.is_zero() {
                errors.push(FieldError {
                    field: "home_value",
                    message: format!("must be greater than or equal to 0, got {}", value),
                });
            }
        }

        if let Some(sqft) = self.square_feet {
            if sqft < MIN_SQUARE_FEET {
                errors.push(FieldError {
                    field: "square_feet",
                    message: format!(
                        "must be greater than or equal to {}, got {}",
                        MIN_SQUARE_FEET, sqft
                    ),
                });
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Quote request as received over the wire.
///
/// `home_value` arrives as a JSON number and is only converted to a decimal
/// during [`QuotePayload::into_request`], so values outside the decimal range
/// are reported as field errors alongside the other constraints.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct QuotePayload {
    pub quote_type: QuoteType,
    pub zip_code: String,
    #[serde(default)]
    pub age: Option<i32>,
    #[serde(default)]
    pub vehicle_year: Option<i32>,
    #[serde(default)]
    pub vehicle_make: Option<String>,
    #[serde(default)]
    pub vehicle_model: Option<String>,
    #[serde(default)]
    pub accidents_last_5_years: Option<i32>,
    #[serde(default)]
    pub home_value: Option<f64>,
    #[serde(default)]
    pub square_feet: Option<i32>,
    #[serde(default)]
    pub security_system: Option<bool>,
}

impl QuotePayload {
    /// Convert to a validated [`QuoteRequest`], collecting every violation
    pub fn into_request(self) -> Result<QuoteRequest, Vec<FieldError>> {
        let mut errors = Vec::new();

        let home_value = match self.home_value {
            Some(value) => match Decimal::from_f64(value) {
                Some(decimal) => Some(decimal),
                None => {
                    let message = if value.is_sign_negative() {
                        format!("must be greater than or equal to 0, got {}", value)
                    } else {
                        format!("must be less than {}, got {}", Decimal::MAX, value)
                    };
                    errors.push(FieldError {
                        field: "home_value",
                        message,
                    });
                    None
                }
            },
            None => None,
        };

        let request = QuoteRequest {
            quote_type: self.quote_type,
            zip_code: self.zip_code,
            age: self.age,
            vehicle_year: self.vehicle_year,
            vehicle_make: self.vehicle_make,
            vehicle_model: self.vehicle_model,
            accidents_last_5_years: self.accidents_last_5_years,
            home_value,
            square_feet: self.square_feet,
            security_system: self.security_system,
        };

        if let Err(range_errors) = request.validate() {
            errors.extend(range_errors);
        }

        if errors.is_empty() {
            Ok(request)
        } else {
            Err(errors)
        }
    }
}

/// Simulated price offer from one carrier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarrierOffer {
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub monthly: Decimal,
    pub rating: f64,
    pub features: Vec<String>,
    pub cta: String,
}

/// A priced request ready to be persisted
#[derive(Debug, Clone, PartialEq)]
pub struct NewQuote {
    pub request: QuoteRequest,
    pub results: Vec<CarrierOffer>,
}

/// Persisted quote: the request as submitted plus its offers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredQuote {
    #[serde(with = "uuid_string")]
    pub id: Uuid,
    #[serde(flatten)]
    pub request: QuoteRequest,
    pub results: Vec<CarrierOffer>,
    pub created_at: DateTime<Utc>,
}

mod uuid_string {
    use serde::{Deserialize, Deserializer, Serializer};
    use uuid::Uuid;

    pub fn serialize<S: Serializer>(id: &Uuid, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&id.hyphenated())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Uuid, D::Error> {
        let s = String::deserialize(deserializer)?;
        Uuid::parse_str(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn auto_request() -> QuoteRequest {
        QuoteRequest {
            quote_type: QuoteType::Auto,
            zip_code: "94107".to_string(),
            age: Some(30),
            vehicle_year: Some(2018),
            vehicle_make: Some("Toyota".to_string()),
            vehicle_model: Some("Corolla".to_string()),
            accidents_last_5_years: Some(0),
            home_value: None,
            square_feet: None,
            security_system: None,
        }
    }

    #[test]
    fn test_valid_request_passes() {
        assert!(auto_request().validate().is_ok());
    }

    #[test]
    fn test_age_below_minimum_rejected() {
        let mut req = auto_request();
        req.age = Some(15);
        let errors = req.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "age");
    }

    #[test]
    fn test_age_bounds_inclusive() {
        let mut req = auto_request();
        req.age = Some(16);
        assert!(req.validate().is_ok());
        req.age = Some(120);
        assert!(req.validate().is_ok());
        req.age = Some(121);
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_vehicle_year_out_of_range_rejected() {
        let mut req = auto_request();
        req.vehicle_year = Some(1975);
        let errors = req.validate().unwrap_err();
        assert_eq!(errors[0].field, "vehicle_year");
    }

    #[test]
    fn test_collects_all_violations() {
        let mut req = auto_request();
        req.age = Some(200);
        req.accidents_last_5_years = Some(11);
        req.square_feet = Some(50);
        req.home_value = Some(dec!(-1));
        let fields: Vec<_> = req.validate().unwrap_err().iter().map(|e| e.field).collect();
        assert_eq!(
            fields,
            vec!["age", "accidents_last_5_years", "home_value", "square_feet"]
        );
    }

    #[test]
    fn test_zero_home_value_allowed() {
        let req = QuoteRequest {
            quote_type: QuoteType::Home,
            home_value: Some(dec!(0)),
            ..auto_request()
        };
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_deserialize_minimal_request() {
        let req: QuoteRequest =
            serde_json::from_str(r#"{"quote_type":"home","zip_code":"10001"}"#).unwrap();
        assert_eq!(req.quote_type, QuoteType::Home);
        assert_eq!(req.age, None);
        assert_eq!(req.home_value, None);
    }

    #[test]
    fn test_deserialize_rejects_unknown_quote_type() {
        let result: Result<QuoteRequest, _> =
            serde_json::from_str(r#"{"quote_type":"boat","zip_code":"10001"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_home_value_accepts_json_number() {
        let req: QuoteRequest = serde_json::from_str(
            r#"{"quote_type":"home","zip_code":"10001","home_value":800000.0}"#,
        )
        .unwrap();
        assert_eq!(req.home_value, Some(dec!(800000)));
    }

    fn home_payload(home_value: f64) -> QuotePayload {
        serde_json::from_value(serde_json::json!({
            "quote_type": "home",
            "zip_code": "10001",
            "home_value": home_value,
            "square_feet": 1500
        }))
        .unwrap()
    }

    #[test]
    fn test_payload_converts_home_value() {
        let req = home_payload(800000.0).into_request().unwrap();
        assert_eq!(req.home_value, Some(dec!(800000)));
        assert_eq!(req.square_feet, Some(1500));
    }

    #[test]
    fn test_payload_huge_home_value_is_field_error() {
        let errors = home_payload(1e29).into_request().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "home_value");
    }

    #[test]
    fn test_payload_reports_conversion_and_range_errors_together() {
        let mut payload = home_payload(1e30);
        payload.age = Some(15);
        let fields: Vec<_> = payload
            .into_request()
            .unwrap_err()
            .iter()
            .map(|e| e.field)
            .collect();
        assert_eq!(fields, vec!["home_value", "age"]);
    }

    #[test]
    fn test_payload_negative_home_value_rejected() {
        let errors = home_payload(-5.0).into_request().unwrap_err();
        assert_eq!(errors[0].field, "home_value");

        let errors = home_payload(-1e29).into_request().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.starts_with("must be greater than or equal to 0"));
    }

    #[test]
    fn test_stored_quote_serializes_flat_with_string_id() {
        let id = Uuid::new_v4();
        let stored = StoredQuote {
            id,
            request: auto_request(),
            results: vec![],
            created_at: Utc::now(),
        };
        let value = serde_json::to_value(&stored).unwrap();
        assert_eq!(value["id"], serde_json::json!(id.to_string()));
        assert_eq!(value["quote_type"], "auto");
        assert_eq!(value["zip_code"], "94107");
        assert!(value["results"].is_array());
    }

    #[test]
    fn test_quote_type_from_str() {
        assert_eq!("auto".parse::<QuoteType>(), Ok(QuoteType::Auto));
        assert_eq!("home".parse::<QuoteType>(), Ok(QuoteType::Home));
        assert!("life".parse::<QuoteType>().is_err());
    }
}
