//! Shared model and editing logic for the print layout designer.
//!
//! Everything in this crate is platform independent: the WASM frontend renders
//! the state kept here and forwards user gestures to it, while the tests run on
//! the host.

pub mod config;
pub mod designer;
pub mod error;
pub mod i18n;
pub mod model;
pub mod requests;
