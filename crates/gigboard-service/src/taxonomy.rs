//! Read paths for the category/subcategory taxonomy.

use gigboard_db::{
    db::{connection::DbConnection, query},
    model::{category::Category, subcategory::Subcategory},
};

use crate::error::ServiceResult;

/// ## Summary
/// Lists every category ordered by name.
///
/// ## Errors
/// Returns an error if the query fails.
pub async fn list_categories(conn: &mut DbConnection<'_>) -> ServiceResult<Vec<Category>> {
    Ok(query::category::load_all(conn).await?)
}

/// ## Summary
/// Lists subcategories, optionally only those of one category.
///
/// ## Errors
/// Returns an error if the query fails.
pub async fn list_subcategories(
    conn: &mut DbConnection<'_>,
    category_id: Option<uuid::Uuid>,
) -> ServiceResult<Vec<Subcategory>> {
    let subcategories = match category_id {
        Some(id) => query::subcategory::load_for_category(conn, id).await?,
        None => query::subcategory::load_all(conn).await?,
    };
    Ok(subcategories)
}
