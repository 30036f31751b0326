//! Question repository

use sqlx::PgPool;

use super::DbError;
use crate::models::{NewQuestion, Question};

/// Question repository
pub struct QuestionRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> QuestionRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// All questions in id order.
    ///
    /// The listing endpoint slices pages out of this full fetch; fine at
    /// question-bank scale.
    pub async fn list_all(&self) -> Result<Vec<Question>, DbError> {
        let questions = sqlx::query_as::<_, Question>(
            "SELECT id, question, answer, category, difficulty FROM questions ORDER BY id",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(questions)
    }

    /// Look up a single question by id.
    pub async fn get(&self, id: i32) -> Result<Question, DbError> {
        sqlx::query_as::<_, Question>(
            "SELECT id, question, answer, category, difficulty FROM questions WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::NotFound {
            resource: "question",
            id: id.to_string(),
        })
    }

    /// Insert a question, returning its generated id.
    pub async fn insert(&self, new: &NewQuestion) -> Result<i32, DbError> {
        let row: (i32,) = sqlx::query_as(
            r#"
            INSERT INTO questions (question, answer, category, difficulty)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(&new.question)
        .bind(&new.answer)
        .bind(&new.category)
        .bind(new.difficulty)
        .fetch_one(self.pool)
        .await?;

        Ok(row.0)
    }

    /// Delete a question by id.
    pub async fn delete(&self, id: i32) -> Result<(), DbError> {
        sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(())
    }

    /// Case-insensitive substring search over question text.
    pub async fn search(&self, term: &str) -> Result<Vec<Question>, DbError> {
        let pattern = format!("%{}%", term);
        let questions = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE question ILIKE $1
            ORDER BY id
            "#,
        )
        .bind(pattern)
        .fetch_all(self.pool)
        .await?;

        Ok(questions)
    }

    /// All questions whose category reference equals `category`.
    pub async fn by_category(&self, category: &str) -> Result<Vec<Question>, DbError> {
        let questions = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE category = $1
            ORDER BY id
            "#,
        )
        .bind(category)
        .fetch_all(self.pool)
        .await?;

        Ok(questions)
    }

    /// Questions eligible for quiz play: in the target category (or any,
    /// when `category` is None) and not among the already-seen ids.
    pub async fn eligible(
        &self,
        category: Option<&str>,
        seen: &[i32],
    ) -> Result<Vec<Question>, DbError> {
        let questions = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE ($1::text IS NULL OR category = $1)
              AND id <> ALL($2)
            ORDER BY id
            "#,
        )
        .bind(category)
        .bind(seen)
        .fetch_all(self.pool)
        .await?;

        Ok(questions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_pool, migrations};

    // Integration tests - run with DATABASE_URL set
    // cargo test -p trivia-server -- --ignored

    async fn test_pool() -> PgPool {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = create_pool(&url).await.expect("pool creation failed");
        migrations::run(&pool).await.expect("migrations failed");
        pool
    }

    fn fixture(question: &str, category: &str) -> NewQuestion {
        NewQuestion {
            question: question.to_owned(),
            answer: "fixture answer".to_owned(),
            category: category.to_owned(),
            difficulty: 1,
        }
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn insert_get_delete_cycle() {
        let pool = test_pool().await;
        let repo = QuestionRepo::new(&pool);

        let id = repo
            .insert(&fixture("repo cycle question", "3"))
            .await
            .expect("insert failed");

        let stored = repo.get(id).await.expect("get failed");
        assert_eq!(stored.question, "repo cycle question");
        assert_eq!(stored.category, "3");

        repo.delete(id).await.expect("delete failed");
        let err = repo.get(id).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn eligible_excludes_seen_ids() {
        let pool = test_pool().await;
        let repo = QuestionRepo::new(&pool);

        let first = repo
            .insert(&fixture("eligible one", "917001"))
            .await
            .expect("insert failed");
        let second = repo
            .insert(&fixture("eligible two", "917001"))
            .await
            .expect("insert failed");

        let remaining = repo
            .eligible(Some("917001"), &[first])
            .await
            .expect("query failed");
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, second);

        repo.delete(first).await.expect("cleanup failed");
        repo.delete(second).await.expect("cleanup failed");
    }
}
