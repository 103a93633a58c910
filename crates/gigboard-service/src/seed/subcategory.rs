use diesel_async::{AsyncConnection, scoped_futures::ScopedFutureExt};

use gigboard_core::catalog::Catalog;
use gigboard_db::{
    db::{connection::DbConnection, query},
    depot_types::DepotUser,
    model::subcategory::NewSubcategory,
};

use super::plan::plan_subcategories;
use super::{SeedOutcome, SeedTarget, Seeder};
use crate::auth::require_user;
use crate::error::ServiceError;

/// Replaces every subcategory with the catalog snapshot for the stored
/// categories.
///
/// The clear and the reinsert share one transaction, so readers see either
/// the previous set or the new one.
pub struct SubcategorySeeder<'c> {
    catalog: &'c Catalog,
}

impl<'c> SubcategorySeeder<'c> {
    #[must_use]
    pub const fn new(catalog: &'c Catalog) -> Self {
        Self { catalog }
    }
}

impl Seeder for SubcategorySeeder<'_> {
    #[tracing::instrument(skip_all)]
    async fn seed(
        &self,
        conn: &mut DbConnection<'_>,
        caller: &DepotUser,
    ) -> crate::error::ServiceResult<SeedOutcome> {
        let user = require_user(caller)?;
        tracing::debug!(user_id = %user.id, "Seeding subcategories");

        // The transaction callback must own everything it captures.
        let catalog = self.catalog.clone();

        let outcome = conn
            .transaction::<_, ServiceError, _>(move |tx| {
                async move {
                    query::subcategory::lock_for_seeding(tx).await?;
                    let categories = query::category::load_all(tx).await?;

                    // Fails before the clear, leaving existing rows untouched.
                    let plan = plan_subcategories(&categories, &catalog)?;

                    let cleared = query::subcategory::delete_all(tx).await?;
                    if cleared > 0 {
                        tracing::debug!(cleared, "Cleared existing subcategories");
                    }

                    for name in &plan.unmatched {
                        tracing::debug!(category = %name, "No catalog subcategories for category");
                    }

                    let rows: Vec<NewSubcategory<'_>> = plan
                        .rows
                        .iter()
                        .map(|(category_id, name)| NewSubcategory::new(*category_id, name))
                        .collect();
                    let inserted = query::subcategory::insert_batch(tx, &rows).await?;

                    Ok(SeedOutcome::seeded(SeedTarget::Subcategories, inserted))
                }
                .scope_boxed()
            })
            .await?;

        tracing::info!(count = outcome.count, "Subcategory seeding finished");

        Ok(outcome)
    }
}
