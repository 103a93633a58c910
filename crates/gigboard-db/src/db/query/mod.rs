//! Query functions grouped by table.
//!
//! Every function takes a pooled connection so callers can run several of
//! them inside one transaction.

pub mod category;
pub mod skill;
pub mod subcategory;
pub mod user;

/// Rows per `INSERT` statement. Keeps batches well under the PostgreSQL
/// limit of 65535 bind parameters.
pub const INSERT_CHUNK_SIZE: usize = 1000;
