//! Category repository

use sqlx::PgPool;

use super::DbError;
use crate::models::Category;

/// Category repository. Categories are read-only through the API.
pub struct CategoryRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> CategoryRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// All categories in id order.
    pub async fn list(&self) -> Result<Vec<Category>, DbError> {
        let categories =
            sqlx::query_as::<_, Category>("SELECT id, type FROM categories ORDER BY id")
                .fetch_all(self.pool)
                .await?;

        Ok(categories)
    }
}
