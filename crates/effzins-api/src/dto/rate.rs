//! Rate calculation DTOs.
//!
//! Field names on the wire follow the German contract of the endpoint
//! (`laufzeit`, `endBetrag`, ...); the Rust names are their English meaning.

use std::str::FromStr;

use bigdecimal::BigDecimal;
use effzins_math::{RateInputs, RateSet};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize, Serializer};

/// Rate calculation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// Total plan duration in years.
    #[serde(rename = "laufzeit")]
    pub term: i32,

    /// Years during which payments are made.
    #[serde(rename = "einzahlungsDauer")]
    pub contribution_duration: i32,

    /// Payments per year, 0 for a single lump-sum deposit.
    #[serde(rename = "zahlungenProJahr")]
    pub payments_per_year: i32,

    /// Amount of each payment. Accepts a JSON number or a decimal string.
    #[serde(
        rename = "einzahlungsHoehe",
        with = "rust_decimal::serde::arbitrary_precision"
    )]
    pub deposit_amount: Decimal,

    /// Amount to reach by the end of the term. Accepts a JSON number or a
    /// decimal string.
    #[serde(rename = "endBetrag", with = "rust_decimal::serde::arbitrary_precision")]
    pub target_amount: Decimal,
}

impl From<&CalculationRequest> for RateInputs {
    fn from(req: &CalculationRequest) -> Self {
        Self {
            term: req.term,
            contribution_duration: req.contribution_duration,
            payments_per_year: req.payments_per_year,
            deposit_amount: req.deposit_amount,
            target_amount: req.target_amount,
        }
    }
}

/// Rate calculation response.
///
/// Rates serialize as JSON numbers that keep their five fractional digits,
/// e.g. `1.05240` rather than `1.0524`, at any magnitude.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalculationResponse {
    /// Rate over the remaining open periods.
    #[serde(rename = "aktuellerZinssatz", serialize_with = "plain_number")]
    pub current_rate: BigDecimal,

    /// Rate per payment period.
    #[serde(rename = "periodenZinssatz", serialize_with = "plain_number")]
    pub periodic_rate: BigDecimal,

    /// Annualized rate over the whole term.
    #[serde(rename = "zinssatz", serialize_with = "plain_number")]
    pub overall_rate: BigDecimal,
}

impl From<RateSet> for CalculationResponse {
    fn from(rates: RateSet) -> Self {
        Self {
            current_rate: rates.current_rate,
            periodic_rate: rates.periodic_rate,
            overall_rate: rates.overall_rate,
        }
    }
}

/// Writes the decimal digits verbatim as a JSON number.
fn plain_number<S: Serializer>(value: &BigDecimal, serializer: S) -> Result<S::Ok, S::Error> {
    serde_json::Number::from_str(&value.to_string())
        .map_err(serde::ser::Error::custom)?
        .serialize(serializer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn big(s: &str) -> BigDecimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_request_accepts_numbers_and_strings() {
        let req: CalculationRequest = serde_json::from_str(
            r#"{
                "laufzeit": 10,
                "einzahlungsDauer": 5,
                "zahlungenProJahr": 12,
                "einzahlungsHoehe": 100.50,
                "endBetrag": "20000"
            }"#,
        )
        .unwrap();

        assert_eq!(req.term, 10);
        assert_eq!(req.contribution_duration, 5);
        assert_eq!(req.payments_per_year, 12);
        assert_eq!(req.deposit_amount, dec!(100.50));
        assert_eq!(req.target_amount, dec!(20000));
    }

    #[test]
    fn test_request_missing_field_rejected() {
        let result = serde_json::from_str::<CalculationRequest>(
            r#"{"laufzeit": 10, "zahlungenProJahr": 12, "einzahlungsHoehe": 1, "endBetrag": 2}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_response_keeps_trailing_zeros() {
        let response = CalculationResponse {
            current_rate: big("1.29650"),
            periodic_rate: big("1.00427"),
            overall_rate: big("1.05240"),
        };

        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(
            json,
            r#"{"aktuellerZinssatz":1.29650,"periodenZinssatz":1.00427,"zinssatz":1.05240}"#
        );
    }

    #[test]
    fn test_response_beyond_fixed_decimal_range() {
        let response = CalculationResponse {
            current_rate: big("392145659611153100000000000000000000000000000.00000"),
            periodic_rate: big("1.00000"),
            overall_rate: big("0.77790"),
        };

        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(
            json,
            r#"{"aktuellerZinssatz":392145659611153100000000000000000000000000000.00000,"periodenZinssatz":1.00000,"zinssatz":0.77790}"#
        );
    }

    #[test]
    fn test_request_converts_to_inputs() {
        let req = CalculationRequest {
            term: 10,
            contribution_duration: 5,
            payments_per_year: 0,
            deposit_amount: dec!(100),
            target_amount: dec!(200),
        };

        let inputs = RateInputs::from(&req);
        assert_eq!(inputs.payments_per_year, 0);
        assert_eq!(inputs.target_amount, dec!(200));
    }
}
