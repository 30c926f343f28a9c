//! Checkout Core - Shared types library.
//!
//! This crate provides the value types used by the checkout screen:
//! - `checkout-screen` - Presenter, view contract, and basket summary
//! - `checkout-cli` - Terminal host for the checkout screen
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no logging, no UI. This keeps
//! it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for phone numbers and prices

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
