//! Route handlers.

pub mod rate;
