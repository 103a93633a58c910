//! Catalog seeding.
//!
//! Two seeders populate the taxonomy from a [`Catalog`](gigboard_core::catalog::Catalog):
//! [`CategorySeeder`] inserts categories once, [`SubcategorySeeder`] replaces
//! every subcategory with the catalog's current snapshot. Both require an
//! authenticated caller and run as a single transaction.

pub mod category;
pub mod plan;
pub mod subcategory;

use std::future::Future;

use serde::Serialize;

use gigboard_db::{db::connection::DbConnection, depot_types::DepotUser};

use crate::error::ServiceResult;

pub use category::CategorySeeder;
pub use subcategory::SubcategorySeeder;

/// Trait for seeders that populate reference tables.
pub trait Seeder {
    /// Seeds the database on behalf of `caller`.
    ///
    /// ## Errors
    /// Returns `NotAuthenticated` for public callers, or an error if the
    /// seeding transaction fails.
    fn seed(
        &self,
        conn: &mut DbConnection<'_>,
        caller: &DepotUser,
    ) -> impl Future<Output = ServiceResult<SeedOutcome>> + Send;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedTarget {
    Categories,
    Subcategories,
}

impl SeedTarget {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Categories => "Categories",
            Self::Subcategories => "Subcategories",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedStatus {
    /// Rows were written.
    Seeded,
    /// The table already held data; nothing was written.
    AlreadySeeded,
}

/// Result of one seeder run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedOutcome {
    pub target: SeedTarget,
    pub status: SeedStatus,
    /// Rows inserted for `Seeded`, rows already present for `AlreadySeeded`.
    pub count: usize,
}

impl SeedOutcome {
    #[must_use]
    pub const fn seeded(target: SeedTarget, count: usize) -> Self {
        Self {
            target,
            status: SeedStatus::Seeded,
            count,
        }
    }

    #[must_use]
    pub const fn already_seeded(target: SeedTarget, count: usize) -> Self {
        Self {
            target,
            status: SeedStatus::AlreadySeeded,
            count,
        }
    }

    #[must_use]
    pub fn message(&self) -> String {
        match self.status {
            SeedStatus::Seeded => format!("{} seeded successfully", self.target.label()),
            SeedStatus::AlreadySeeded => format!("{} already seeded", self.target.label()),
        }
    }
}

/// Wire form of a seed result: `{ "message": ..., "count": ... }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeedReport {
    pub message: String,
    pub count: usize,
}

impl From<SeedOutcome> for SeedReport {
    fn from(outcome: SeedOutcome) -> Self {
        Self {
            message: outcome.message(),
            count: outcome.count,
        }
    }
}
