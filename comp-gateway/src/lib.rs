//! HTTP implementation of the calculation gateway.
//!
//! The remote service speaks loose JSON: monetary fields may arrive as
//! numbers or as strings (the service serializes decimals as strings to
//! preserve precision). This crate is the coercion boundary: every numeric
//! field is normalised into [`rust_decimal::Decimal`] immediately on
//! receipt, and scenario fractions are serialized unchanged on send.

mod client;
mod wire;

pub use client::HttpCalculationGateway;
