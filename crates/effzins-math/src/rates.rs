//! Savings plan rate formulas.
//!
//! All three rates share one skeleton: the total contributed is divided into
//! the target amount, and a root is taken over the number of compounding
//! periods.
//!
//! | Rate | Total contributed | Root degree |
//! |------|-------------------|-------------|
//! | [`overall_rate`] | `term * ppy * deposit`, or `deposit` when `ppy == 0` | `term` |
//! | [`periodic_rate`] | `term * ppy * deposit` | `term * ppy` |
//! | [`current_rate`] | `term * ppy * deposit` | `term * ppy`, then raised to `open_periods + 1` |
//!
//! Amounts come in as [`Decimal`]. Totals, ratios and results are held as
//! [`BigDecimal`], so a result is never limited by the fixed `Decimal` range.
//! Results are growth factors (`1.05` means 5% growth) rounded half-up to
//! [`RATE_SCALE`] fractional digits.

use bigdecimal::{BigDecimal, RoundingMode, Zero};
use rust_decimal::Decimal;

use crate::error::{MathError, MathResult};
use crate::roots::{from_f64, nth_root, root_f64};

/// Number of fractional digits in every returned rate.
pub const RATE_SCALE: i64 = 5;

/// Significant digits kept by the target/contribution division.
pub const RATIO_PRECISION: u64 = 34;

/// Parameters of a savings plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateInputs {
    /// Total plan duration in years.
    pub term: i32,
    /// Years during which payments are made.
    pub contribution_duration: i32,
    /// Payments per year; zero means a single lump-sum deposit.
    pub payments_per_year: i32,
    /// Amount of each payment, or the lump sum.
    pub deposit_amount: Decimal,
    /// Amount to reach by the end of the term.
    pub target_amount: Decimal,
}

/// The three rates computed for one plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateSet {
    /// Rate over the remaining open periods.
    pub current_rate: BigDecimal,
    /// Rate per payment period.
    pub periodic_rate: BigDecimal,
    /// Annualized rate over the whole term.
    pub overall_rate: BigDecimal,
}

/// Annual growth factor that turns the total contributions into the target.
///
/// Compounds once per year over `term` years regardless of
/// `payments_per_year`. With `payments_per_year == 0` the deposit is a single
/// lump sum.
///
/// # Example
///
/// ```rust
/// use effzins_math::overall_rate;
/// use rust_decimal_macros::dec;
///
/// let rate = overall_rate(10, 12, dec!(100), dec!(20000)).unwrap();
/// assert_eq!(rate.to_string(), "1.05241");
/// ```
pub fn overall_rate(
    term: i32,
    payments_per_year: i32,
    deposit_amount: Decimal,
    target_amount: Decimal,
) -> MathResult<BigDecimal> {
    let total = if payments_per_year == 0 {
        to_big(deposit_amount)?
    } else {
        total_contributed(term, payments_per_year, deposit_amount)?
    };
    let ratio = growth_ratio(target_amount, &total)?;

    nth_root(&ratio, i64::from(term)).map(|rate| round_rate(&rate))
}

/// Growth factor per payment period.
///
/// `payments_per_year` must be non-zero; a zero value is rejected with
/// [`MathError::InvalidInput`] rather than producing a zero total.
pub fn periodic_rate(
    term: i32,
    payments_per_year: i32,
    deposit_amount: Decimal,
    target_amount: Decimal,
) -> MathResult<BigDecimal> {
    let periodic =
        unrounded_periodic_rate(term, payments_per_year, deposit_amount, target_amount)?;

    from_f64(periodic, "periodic rate").map(|rate| round_rate(&rate))
}

/// Periodic rate compounded over the open periods plus one.
///
/// The open periods are the payment periods of the term that lie after the
/// contribution duration:
/// `term * payments_per_year - contribution_duration * payments_per_year`.
/// A contribution duration longer than the term gives a negative count.
pub fn current_rate(
    term: i32,
    contribution_duration: i32,
    payments_per_year: i32,
    deposit_amount: Decimal,
    target_amount: Decimal,
) -> MathResult<BigDecimal> {
    let periodic =
        unrounded_periodic_rate(term, payments_per_year, deposit_amount, target_amount)?;

    // i32 * i32 always fits in i64
    let open_periods = periods(term, payments_per_year)
        - periods(contribution_duration, payments_per_year);
    let compounded = periodic.powf((open_periods + 1) as f64);

    from_f64(compounded, "current rate compounding").map(|rate| round_rate(&rate))
}

/// Computes all three rates for a plan.
///
/// With `payments_per_year == 0` there are no payment periods, so the periodic
/// and current rates collapse to the overall rate instead of being computed.
pub fn rate_set(inputs: &RateInputs) -> MathResult<RateSet> {
    let overall = overall_rate(
        inputs.term,
        inputs.payments_per_year,
        inputs.deposit_amount,
        inputs.target_amount,
    )?;

    if inputs.payments_per_year == 0 {
        log::debug!("lump-sum plan, periodic and current rate equal overall rate");
        return Ok(RateSet {
            current_rate: overall.clone(),
            periodic_rate: overall.clone(),
            overall_rate: overall,
        });
    }

    let periodic = periodic_rate(
        inputs.term,
        inputs.payments_per_year,
        inputs.deposit_amount,
        inputs.target_amount,
    )?;
    let current = current_rate(
        inputs.term,
        inputs.contribution_duration,
        inputs.payments_per_year,
        inputs.deposit_amount,
        inputs.target_amount,
    )?;

    Ok(RateSet {
        current_rate: current,
        periodic_rate: periodic,
        overall_rate: overall,
    })
}

fn unrounded_periodic_rate(
    term: i32,
    payments_per_year: i32,
    deposit_amount: Decimal,
    target_amount: Decimal,
) -> MathResult<f64> {
    if payments_per_year == 0 {
        return Err(MathError::invalid_input(
            "payments per year must be non-zero for a periodic rate",
        ));
    }
    let total = total_contributed(term, payments_per_year, deposit_amount)?;
    let ratio = growth_ratio(target_amount, &total)?;

    root_f64(&ratio, periods(term, payments_per_year))
}

fn periods(years: i32, payments_per_year: i32) -> i64 {
    i64::from(years) * i64::from(payments_per_year)
}

fn to_big(amount: Decimal) -> MathResult<BigDecimal> {
    amount
        .to_string()
        .parse()
        .map_err(|_| MathError::invalid_input(format!("unreadable amount {amount}")))
}

fn total_contributed(
    term: i32,
    payments_per_year: i32,
    deposit_amount: Decimal,
) -> MathResult<BigDecimal> {
    Ok(BigDecimal::from(periods(term, payments_per_year)) * to_big(deposit_amount)?)
}

fn growth_ratio(target_amount: Decimal, total: &BigDecimal) -> MathResult<BigDecimal> {
    if total.is_zero() {
        return Err(MathError::DivisionByZero);
    }
    Ok((to_big(target_amount)? / total).with_prec(RATIO_PRECISION))
}

/// Rounds half-up to exactly [`RATE_SCALE`] fractional digits.
fn round_rate(value: &BigDecimal) -> BigDecimal {
    value.with_scale_round(RATE_SCALE, RoundingMode::HalfUp)
}
