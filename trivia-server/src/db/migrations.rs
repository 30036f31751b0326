//! Schema migrations for the trivia tables

use sqlx::PgPool;

/// Run all migrations. Idempotent.
pub async fn run(pool: &PgPool) -> Result<(), sqlx::Error> {
    tracing::info!("Running trivia migrations...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS categories (
            id SERIAL PRIMARY KEY,
            type TEXT NOT NULL UNIQUE
        )
        "#,
    )
    .execute(pool)
    .await?;

    // category holds the string form of a categories.id; kept as loose
    // text for compatibility with existing rows, not a foreign key
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS questions (
            id SERIAL PRIMARY KEY,
            question TEXT NOT NULL,
            answer TEXT NOT NULL,
            category TEXT NOT NULL,
            difficulty INTEGER NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    create_indexes(pool).await?;

    tracing::info!("Trivia migrations complete");
    Ok(())
}

async fn create_indexes(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_questions_category ON questions(category)")
        .execute(pool)
        .await?;

    Ok(())
}

/// Canonical category labels the project ships as seed data.
const SEED_CATEGORIES: [&str; 6] = [
    "Science",
    "Art",
    "Geography",
    "History",
    "Entertainment",
    "Sports",
];

/// Insert the canonical categories where absent. Idempotent.
pub async fn seed_categories(pool: &PgPool) -> Result<(), sqlx::Error> {
    for label in SEED_CATEGORIES {
        sqlx::query("INSERT INTO categories (type) VALUES ($1) ON CONFLICT (type) DO NOTHING")
            .bind(label)
            .execute(pool)
            .await?;
    }

    Ok(())
}
