use diesel_async::{AsyncConnection, scoped_futures::ScopedFutureExt};

use gigboard_core::catalog::Catalog;
use gigboard_db::{
    db::{connection::DbConnection, query},
    depot_types::DepotUser,
    model::category::NewCategory,
};

use super::plan::{CategoryPlan, plan_categories};
use super::{SeedOutcome, SeedTarget, Seeder};
use crate::auth::require_user;
use crate::error::ServiceError;

/// Inserts the catalog's categories into an empty category table.
pub struct CategorySeeder<'c> {
    catalog: &'c Catalog,
}

impl<'c> CategorySeeder<'c> {
    #[must_use]
    pub const fn new(catalog: &'c Catalog) -> Self {
        Self { catalog }
    }
}

impl Seeder for CategorySeeder<'_> {
    #[tracing::instrument(skip_all)]
    async fn seed(
        &self,
        conn: &mut DbConnection<'_>,
        caller: &DepotUser,
    ) -> crate::error::ServiceResult<SeedOutcome> {
        let user = require_user(caller)?;
        tracing::debug!(user_id = %user.id, "Seeding categories");

        // The transaction callback must own everything it captures.
        let catalog = self.catalog.clone();

        let outcome = conn
            .transaction::<_, ServiceError, _>(move |tx| {
                async move {
                    query::category::lock_for_seeding(tx).await?;
                    let existing = query::category::load_all(tx).await?;

                    match plan_categories(&existing, &catalog) {
                        CategoryPlan::AlreadySeeded { existing, missing } => {
                            if !missing.is_empty() {
                                tracing::warn!(
                                    existing,
                                    missing = ?missing,
                                    "Category table is partially seeded; leaving it unchanged"
                                );
                            }
                            Ok(SeedOutcome::already_seeded(SeedTarget::Categories, existing))
                        }
                        CategoryPlan::Insert(names) => {
                            let rows: Vec<NewCategory<'_>> =
                                names.into_iter().map(NewCategory::named).collect();
                            let inserted = query::category::insert_missing(tx, &rows).await?;
                            Ok(SeedOutcome::seeded(SeedTarget::Categories, inserted))
                        }
                    }
                }
                .scope_boxed()
            })
            .await?;

        tracing::info!(
            count = outcome.count,
            status = ?outcome.status,
            "Category seeding finished"
        );

        Ok(outcome)
    }
}
