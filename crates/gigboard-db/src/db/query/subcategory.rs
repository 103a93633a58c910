use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::{connection::DbConnection, schema};
use crate::error::DbResult;
use crate::model::subcategory::{NewSubcategory, Subcategory};

/// ## Summary
/// Loads every subcategory ordered by category and name.
///
/// ## Errors
/// Returns an error if the query fails.
pub async fn load_all(conn: &mut DbConnection<'_>) -> DbResult<Vec<Subcategory>> {
    Ok(schema::subcategory::table
        .select(Subcategory::as_select())
        .order((
            schema::subcategory::category_id.asc(),
            schema::subcategory::name.asc(),
        ))
        .load::<Subcategory>(conn)
        .await?)
}

/// ## Summary
/// Loads the subcategories of one category ordered by name.
///
/// ## Errors
/// Returns an error if the query fails.
pub async fn load_for_category(
    conn: &mut DbConnection<'_>,
    category_id: uuid::Uuid,
) -> DbResult<Vec<Subcategory>> {
    Ok(schema::subcategory::table
        .filter(schema::subcategory::category_id.eq(category_id))
        .select(Subcategory::as_select())
        .order(schema::subcategory::name.asc())
        .load::<Subcategory>(conn)
        .await?)
}

/// ## Summary
/// Counts subcategory rows.
///
/// ## Errors
/// Returns an error if the query fails.
pub async fn count(conn: &mut DbConnection<'_>) -> DbResult<i64> {
    Ok(schema::subcategory::table.count().get_result(conn).await?)
}

/// ## Summary
/// Takes a self-conflicting lock on the subcategory table for the rest of
/// the current transaction.
///
/// ## Errors
/// Returns an error if the lock statement fails.
pub async fn lock_for_seeding(conn: &mut DbConnection<'_>) -> DbResult<()> {
    diesel::sql_query("LOCK TABLE subcategory IN SHARE ROW EXCLUSIVE MODE")
        .execute(conn)
        .await?;
    Ok(())
}

/// ## Summary
/// Deletes every subcategory row.
///
/// Returns the number of rows removed.
///
/// ## Errors
/// Returns an error if the delete fails.
pub async fn delete_all(conn: &mut DbConnection<'_>) -> DbResult<usize> {
    Ok(diesel::delete(schema::subcategory::table)
        .execute(conn)
        .await?)
}

/// ## Summary
/// Inserts subcategory rows in chunks.
///
/// Returns the number of rows inserted.
///
/// ## Errors
/// Returns an error if any insert fails. Callers that need all-or-nothing
/// behaviour must run this inside a transaction.
pub async fn insert_batch(
    conn: &mut DbConnection<'_>,
    rows: &[NewSubcategory<'_>],
) -> DbResult<usize> {
    let mut inserted = 0;
    for chunk in rows.chunks(super::INSERT_CHUNK_SIZE) {
        inserted += diesel::insert_into(schema::subcategory::table)
            .values(chunk)
            .execute(conn)
            .await?;
    }
    Ok(inserted)
}
