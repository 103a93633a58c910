//! Pure planning step for the seeders.
//!
//! The seeders read the current rows, hand them to these functions, and then
//! apply the returned plan inside the same transaction.

use gigboard_core::catalog::Catalog;
use gigboard_db::model::category::Category;

use crate::error::{ServiceError, ServiceResult};

pub const SEED_CATEGORIES_FIRST: &str =
    "Please seed categories first before seeding subcategories";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryPlan<'c> {
    /// The table is empty: insert these names.
    Insert(Vec<&'c str>),
    /// The table already has rows. `missing` lists catalog names that are
    /// absent, which only happens after a partial or manual load.
    AlreadySeeded {
        existing: usize,
        missing: Vec<&'c str>,
    },
}

/// Decides what the category seeder should do with the current rows.
#[must_use]
pub fn plan_categories<'c>(existing: &[Category], catalog: &'c Catalog) -> CategoryPlan<'c> {
    if existing.is_empty() {
        return CategoryPlan::Insert(catalog.category_names().collect());
    }

    let missing = catalog
        .category_names()
        .filter(|name| !existing.iter().any(|c| c.name == *name))
        .collect();

    CategoryPlan::AlreadySeeded {
        existing: existing.len(),
        missing,
    }
}

/// Subcategory rows to insert, as `(category_id, name)` pairs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubcategoryPlan<'c> {
    pub rows: Vec<(uuid::Uuid, &'c str)>,
    /// Stored categories with no catalog entry. They get no subcategories.
    pub unmatched: Vec<String>,
}

/// ## Summary
/// Builds the full subcategory snapshot for the stored categories.
///
/// ## Errors
/// Returns `PreconditionFailed` if there are no categories.
pub fn plan_subcategories<'c>(
    categories: &[Category],
    catalog: &'c Catalog,
) -> ServiceResult<SubcategoryPlan<'c>> {
    if categories.is_empty() {
        return Err(ServiceError::PreconditionFailed(
            SEED_CATEGORIES_FIRST.to_string(),
        ));
    }

    let mut rows = Vec::with_capacity(catalog.subcategory_count());
    let mut unmatched = Vec::new();

    for category in categories {
        let names = catalog.subcategories_for(&category.name);
        if names.is_empty() {
            unmatched.push(category.name.clone());
        }
        rows.extend(names.iter().map(|name| (category.id, name.as_str())));
    }

    Ok(SubcategoryPlan { rows, unmatched })
}
