//! Shared configuration, errors, constants and the seed catalog for Gigboard.
//!
//! This crate has no database or HTTP dependencies so that every other crate
//! in the workspace can depend on it.

pub mod catalog;
pub mod config;
pub mod constants;
pub mod error;
pub mod util;
