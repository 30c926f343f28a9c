//! Core types for the checkout screen.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod phone;
pub mod price;

pub use phone::{PhoneError, PhoneNumber};
pub use price::{CurrencyCode, Price, PriceError};
