//! Checkout Screen - Presenter and display logic for the checkout screen.
//!
//! The screen shows a basket's price breakdown and a phone number field with
//! an inline error indicator. Rendering belongs to whatever display surface
//! implements [`CheckoutView`]; this crate only decides what the view shows.
//!
//! # Architecture
//!
//! - [`validator`] - Pure phone number classification
//! - [`view`] - The capability contract a display surface implements
//! - [`presenter`] - Translates input changes into view instructions
//! - [`screen`] - Hosts a presenter and a view for the lifetime of one screen
//! - [`basket`] - Fixed demo basket and its price summary
//! - [`config`] - Environment configuration
//!
//! # Threading
//!
//! Everything here is single-threaded. The presenter holds an
//! [`std::rc::Weak`] reference to its view, so it is neither `Send` nor `Sync`.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod basket;
pub mod config;
pub mod presenter;
pub mod screen;
pub mod validator;
pub mod view;

pub use basket::{Basket, BasketItem, BasketSummary};
pub use config::{CheckoutConfig, ConfigError};
pub use presenter::{CheckoutPresenter, PresenterState};
pub use screen::CheckoutScreen;
pub use validator::PhoneValidator;
pub use view::CheckoutView;
