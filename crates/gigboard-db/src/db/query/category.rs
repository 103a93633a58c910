use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::{connection::DbConnection, schema};
use crate::error::DbResult;
use crate::model::category::{Category, NewCategory};

/// ## Summary
/// Loads every category ordered by name.
///
/// ## Errors
/// Returns an error if the query fails.
pub async fn load_all(conn: &mut DbConnection<'_>) -> DbResult<Vec<Category>> {
    Ok(schema::category::table
        .select(Category::as_select())
        .order(schema::category::name.asc())
        .load::<Category>(conn)
        .await?)
}

/// ## Summary
/// Counts category rows.
///
/// ## Errors
/// Returns an error if the query fails.
pub async fn count(conn: &mut DbConnection<'_>) -> DbResult<i64> {
    Ok(schema::category::table.count().get_result(conn).await?)
}

/// ## Summary
/// Takes a table lock that conflicts with itself, so concurrent seeders
/// serialize while plain readers continue.
///
/// Only meaningful inside a transaction; the lock is released on commit.
///
/// ## Errors
/// Returns an error if the lock statement fails.
pub async fn lock_for_seeding(conn: &mut DbConnection<'_>) -> DbResult<()> {
    diesel::sql_query("LOCK TABLE category IN SHARE ROW EXCLUSIVE MODE")
        .execute(conn)
        .await?;
    Ok(())
}

/// ## Summary
/// Inserts categories, skipping any whose name already exists.
///
/// Returns the number of rows actually inserted.
///
/// ## Errors
/// Returns an error if the insert fails.
pub async fn insert_missing(
    conn: &mut DbConnection<'_>,
    rows: &[NewCategory<'_>],
) -> DbResult<usize> {
    if rows.is_empty() {
        return Ok(0);
    }

    let mut inserted = 0;
    for chunk in rows.chunks(super::INSERT_CHUNK_SIZE) {
        inserted += diesel::insert_into(schema::category::table)
            .values(chunk)
            .on_conflict(schema::category::name)
            .do_nothing()
            .execute(conn)
            .await?;
    }

    Ok(inserted)
}
