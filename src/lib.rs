//! # Clamp-on sensor bias
//!
//! Steady-state model of the reading error of a temperature sensor clamped to
//! the outside of a water pipe, built as a [Twine](https://github.com/isentropic-dev/twine)
//! model.
//!
//! ## Crate layout
//!
//! - [`models`]: The [`twine_core::Model`] implementation and its components.
//! - [`config`]: TOML parameter files in display units and their conversion
//!   to model inputs.
//! - [`support`]: Supporting utilities used by the model.
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Model-specific utility code stays in the
//! model's internal `core` module.

pub mod config;
pub mod models;
pub mod support;
