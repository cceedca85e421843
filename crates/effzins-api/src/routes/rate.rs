//! Effective rate endpoint.

use axum::{extract::rejection::JsonRejection, Json};
use effzins_math::{rate_set, RateInputs};
use rust_decimal::Decimal;

use crate::dto::{CalculationRequest, CalculationResponse};
use crate::error::{ApiError, ApiResult};

/// Calculate current, periodic, and overall rate of a savings plan.
pub async fn effective_rate(
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> ApiResult<Json<CalculationResponse>> {
    let Json(req) = payload?;
    calculate(&req).map(Json)
}

/// Validate a request and compute its rates.
///
/// Validation stops at the first failing check; nothing is computed for an
/// invalid request.
pub fn calculate(req: &CalculationRequest) -> ApiResult<CalculationResponse> {
    tracing::info!(request = ?req, "calculating rates");

    validate(req)?;
    let response = CalculationResponse::from(rate_set(&RateInputs::from(req))?);

    tracing::info!(
        current_rate = %response.current_rate,
        periodic_rate = %response.periodic_rate,
        overall_rate = %response.overall_rate,
        "calculated rates"
    );
    Ok(response)
}

fn validate(req: &CalculationRequest) -> ApiResult<()> {
    if req.deposit_amount <= Decimal::ZERO {
        return Err(ApiError::Validation(
            "deposit amount must be greater than zero".to_string(),
        ));
    }
    if req.target_amount <= Decimal::ZERO {
        return Err(ApiError::Validation(
            "target amount must be greater than zero".to_string(),
        ));
    }
    if req.term < 1 {
        return Err(ApiError::Validation(
            "term must be greater than zero".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn request() -> CalculationRequest {
        CalculationRequest {
            term: 10,
            contribution_duration: 5,
            payments_per_year: 12,
            deposit_amount: dec!(100),
            target_amount: dec!(20000),
        }
    }

    fn validation_message(req: &CalculationRequest) -> String {
        match calculate(req) {
            Err(ApiError::Validation(message)) => message,
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_calculate_monthly_plan() {
        let response = calculate(&request()).unwrap();
        assert_eq!(response.overall_rate.to_string(), "1.05241");
        assert_eq!(response.periodic_rate.to_string(), "1.00427");
        assert_eq!(response.current_rate.to_string(), "1.29650");
    }

    #[test]
    fn test_calculate_lump_sum() {
        let req = CalculationRequest {
            term: 5,
            payments_per_year: 0,
            deposit_amount: dec!(1000),
            target_amount: dec!(5000),
            ..request()
        };
        let response = calculate(&req).unwrap();
        assert_eq!(response.overall_rate.to_string(), "1.37973");
        assert_eq!(response.periodic_rate, response.overall_rate);
        assert_eq!(response.current_rate, response.overall_rate);
    }

    #[test]
    fn test_calculate_duration_beyond_term() {
        let req = CalculationRequest {
            contribution_duration: 15,
            ..request()
        };
        let response = calculate(&req).unwrap();
        assert_eq!(response.current_rate.to_string(), "0.77790");
        assert_eq!(response.overall_rate.to_string(), "1.05241");
    }

    #[test]
    fn test_deposit_checked_first() {
        let req = CalculationRequest {
            term: 0,
            deposit_amount: Decimal::ZERO,
            target_amount: dec!(-1),
            ..request()
        };
        assert_eq!(
            validation_message(&req),
            "deposit amount must be greater than zero"
        );
    }

    #[test]
    fn test_target_checked_before_term() {
        let req = CalculationRequest {
            term: 0,
            target_amount: Decimal::ZERO,
            ..request()
        };
        assert_eq!(
            validation_message(&req),
            "target amount must be greater than zero"
        );
    }

    #[test]
    fn test_term_must_be_positive() {
        let req = CalculationRequest {
            term: -3,
            ..request()
        };
        assert_eq!(validation_message(&req), "term must be greater than zero");
    }

    #[test]
    fn test_negative_payments_is_calculation_error() {
        let req = CalculationRequest {
            payments_per_year: -12,
            ..request()
        };
        assert!(matches!(calculate(&req), Err(ApiError::Calculation(_))));
    }
}
