#![cfg_attr(not(test), forbid(unsafe_code))]
#![deny(warnings, clippy::pedantic)]
#![allow(clippy::multiple_crate_versions)]

//! Shared models and helpers for the Medan admin console.
//!
//! Everything here is plain data: serde wire models for the management
//! areas, the recharge status classification, sign-in token extraction,
//! tolerant response-body helpers, and the [`models::ApiError`] taxonomy
//! the HTTP wrapper speaks. Nothing in this crate touches the DOM, so the
//! whole surface is testable on a native target.

pub mod models;
