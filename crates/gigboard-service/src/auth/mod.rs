//! Caller authentication.
//!
//! ## Module Organization
//!
//! - `identity`: Extracting the caller identity from config or proxy headers
//! - `authenticate`: Resolving an identity to a stored user, provisioning on first sight
//! - `depot`: Helpers for reading the authenticated user from Salvo's depot

pub mod authenticate;
pub mod depot;
pub mod identity;

pub use authenticate::{require_user, resolve_user};
pub use depot::get_depot_user;
pub use identity::{Identity, extract_identity};
