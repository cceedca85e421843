//! # Effzins Math
//!
//! Rate formulas for savings and installment plans.
//!
//! This crate provides:
//!
//! - **Rates**: overall, periodic, and current growth factors of a plan
//! - **Roots**: the shared n-th root helper
//!
//! ## Design Philosophy
//!
//! - **Decimal amounts**: plan amounts use [`rust_decimal::Decimal`]
//! - **Unbounded results**: ratios and rates use [`bigdecimal::BigDecimal`]
//! - **Pure functions**: no state, safe to call from any thread
//! - **Fixed output scale**: every rate carries exactly five fractional digits

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::doc_markdown)]

pub mod error;
pub mod rates;
pub mod roots;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{MathError, MathResult};
    pub use crate::rates::{
        current_rate, overall_rate, periodic_rate, rate_set, RateInputs, RateSet, RATE_SCALE,
        RATIO_PRECISION,
    };
    pub use crate::roots::nth_root;
}

pub use error::{MathError, MathResult};
pub use rates::{
    current_rate, overall_rate, periodic_rate, rate_set, RateInputs, RateSet, RATE_SCALE,
    RATIO_PRECISION,
};
pub use roots::nth_root;
