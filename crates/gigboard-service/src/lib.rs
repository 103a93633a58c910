//! Domain services for Gigboard: caller authentication, catalog seeding and
//! the public read paths used by profile and browse pages.

pub mod auth;
pub mod error;
pub mod seed;
pub mod skill;
pub mod taxonomy;
