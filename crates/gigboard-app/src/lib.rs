//! Gigboard HTTP application: routing, request-scoped context and the
//! authentication middleware.

pub mod app;
pub mod catalog_handler;
pub mod config;
pub mod db_handler;
pub mod error;
pub mod middleware;
